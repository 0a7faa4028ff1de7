//! Opaque bearer token storage.
//!
//! Tokens are UUID v4 strings mapped to the account they authenticate
//! (`auth_tokens` partition, `token -> AccessToken`). A token is issued at
//! login and resolved on every authenticated request.

use std::sync::Arc;

use pantry_commons::{AccessToken, UserId};
use pantry_store::entity_store::EntityStore;
use pantry_store::StorageBackend;

use crate::error::{AuthError, AuthResult};

/// Partition holding issued bearer tokens.
pub const TOKENS_PARTITION: &str = "auth_tokens";

/// Store for issued bearer tokens.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore<String, AccessToken> for TokenStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        TOKENS_PARTITION
    }
}

impl TokenStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Issues and persists a fresh token for the given user.
    pub async fn issue(&self, user_id: UserId) -> AuthResult<AccessToken> {
        let token = AccessToken::issue(user_id);
        let store = self.clone();
        let record = token.clone();
        tokio::task::spawn_blocking(move || {
            let key = record.token.clone();
            store.put(&key, &record).map_err(AuthError::from)
        })
        .await
        .map_err(|e| AuthError::Storage(e.to_string()))??;
        Ok(token)
    }

    /// Resolves a presented token to its record.
    ///
    /// Unknown tokens yield `InvalidToken`.
    pub async fn resolve(&self, token: &str) -> AuthResult<AccessToken> {
        let store = self.clone();
        let token = token.to_string();
        let found = tokio::task::spawn_blocking(move || store.get(&token).map_err(AuthError::from))
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))??;
        found.ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_store::test_utils::InMemoryBackend;

    fn create_store() -> TokenStore {
        TokenStore::new(Arc::new(InMemoryBackend::new()))
    }

    #[tokio::test]
    async fn test_issue_and_resolve() {
        let store = create_store();
        let user_id = UserId::generate();

        let token = store.issue(user_id.clone()).await.unwrap();
        let resolved = store.resolve(&token.token).await.unwrap();

        assert_eq!(resolved.user_id, user_id);
    }

    #[tokio::test]
    async fn test_unknown_token_rejected() {
        let store = create_store();
        let result = store.resolve("not-a-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_tokens_are_distinct_per_issue() {
        let store = create_store();
        let user_id = UserId::generate();

        let a = store.issue(user_id.clone()).await.unwrap();
        let b = store.issue(user_id).await.unwrap();
        assert_ne!(a.token, b.token);
    }
}
