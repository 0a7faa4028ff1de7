//! Identity store: user accounts keyed by id with a unique email index.
//!
//! Two partitions back the store:
//! - `users`: `user_id -> User` (JSON)
//! - `users_by_email`: `lowercase(email) -> user_id`
//!
//! The index key is the fully lower-cased address, so uniqueness is
//! case-insensitive. User and index writes go through one atomic batch.

use std::sync::Arc;

use log::info;
use pantry_commons::{User, UserId};
use pantry_store::entity_store::EntityStore;
use pantry_store::{Operation, Partition, StorageBackend};

use crate::email::{email_index_key, normalize_email};
use crate::error::{AuthError, AuthResult};
use crate::password::{hash_password, validate_password, verify_password, BCRYPT_COST};

/// Partition holding user records.
pub const USERS_PARTITION: &str = "users";

/// Partition holding the unique lowercase-email index.
pub const USERS_BY_EMAIL_PARTITION: &str = "users_by_email";

/// Fields required to register a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Store for user accounts.
///
/// Public methods are async and run storage work on the blocking pool;
/// password hashing already does. Cloning is cheap (shared backend).
#[derive(Clone)]
pub struct IdentityStore {
    backend: Arc<dyn StorageBackend>,
    bcrypt_cost: u32,
}

impl EntityStore<UserId, User> for IdentityStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        USERS_PARTITION
    }
}

impl IdentityStore {
    /// Creates an identity store with the default bcrypt cost.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_cost(backend, BCRYPT_COST)
    }

    /// Creates an identity store with an explicit bcrypt cost.
    ///
    /// Tests use a low cost to keep hashing fast.
    pub fn with_cost(backend: Arc<dyn StorageBackend>, bcrypt_cost: u32) -> Self {
        Self {
            backend,
            bcrypt_cost,
        }
    }

    /// Registers a new account.
    ///
    /// Normalizes and validates the email, validates and hashes the
    /// password, then persists the user record and its email index entry
    /// in one atomic batch. Fails with `InvalidEmail`, `WeakPassword`, or
    /// `EmailTaken` before anything is written.
    pub async fn create_user(&self, new_user: NewUser) -> AuthResult<User> {
        let email = normalize_email(&new_user.email)?;
        validate_password(&new_user.password)?;
        let password_hash = hash_password(&new_user.password, Some(self.bcrypt_cost)).await?;

        let user = User::new(email, password_hash, new_user.name);
        self.insert(user).await
    }

    /// Registers a new account with staff and superuser privileges.
    pub async fn create_superuser(&self, email: &str, password: &str) -> AuthResult<User> {
        let email = normalize_email(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password, Some(self.bcrypt_cost)).await?;

        let mut user = User::new(email, password_hash, String::new());
        user.promote_to_superuser();
        let user = self.insert(user).await?;
        info!("Created superuser account for {}", user.email);
        Ok(user)
    }

    /// Looks up a user by id.
    pub async fn get_by_id(&self, id: &UserId) -> AuthResult<Option<User>> {
        let store = self.clone();
        let id = id.clone();
        tokio::task::spawn_blocking(move || store.get(&id).map_err(AuthError::from))
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
    }

    /// Looks up a user by email address (case-insensitive).
    pub async fn get_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let email = normalize_email(email)?;
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.get_by_email_sync(&email))
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
    }

    /// Verifies credentials and returns the matching account.
    ///
    /// Unknown email, wrong password, and deactivated accounts all yield
    /// the same `InvalidCredentials` error so callers learn nothing about
    /// which part failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<User> {
        let invalid = || AuthError::InvalidCredentials("invalid email or password".to_string());

        let user = self.get_by_email(email).await?.ok_or_else(invalid)?;
        if !user.is_active {
            return Err(invalid());
        }

        if verify_password(password, &user.password_hash).await? {
            Ok(user)
        } else {
            Err(invalid())
        }
    }

    /// Validates and hashes a new password onto the user record.
    ///
    /// The caller persists the change with `update_user`.
    pub async fn set_password(&self, user: &mut User, password: &str) -> AuthResult<()> {
        validate_password(password)?;
        user.password_hash = hash_password(password, Some(self.bcrypt_cost)).await?;
        Ok(())
    }

    /// Persists changes to an existing user, maintaining the email index.
    ///
    /// If the email changed, the old index entry is removed and the new one
    /// written in the same batch as the user record; a conflicting address
    /// fails with `EmailTaken` before anything is written.
    pub async fn update_user(&self, mut user: User) -> AuthResult<User> {
        user.email = normalize_email(&user.email)?;
        user.updated_at = chrono::Utc::now().timestamp_millis();

        let store = self.clone();
        let updated = user.clone();
        tokio::task::spawn_blocking(move || store.update_sync(&updated))
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))??;
        Ok(user)
    }

    async fn insert(&self, user: User) -> AuthResult<User> {
        let store = self.clone();
        let record = user.clone();
        tokio::task::spawn_blocking(move || store.insert_sync(&record))
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))??;
        Ok(user)
    }

    fn get_by_email_sync(&self, normalized_email: &str) -> AuthResult<Option<User>> {
        let index = Partition::new(USERS_BY_EMAIL_PARTITION);
        let key = email_index_key(normalized_email);

        let Some(id_bytes) = self.backend.get(&index, key.as_bytes())? else {
            return Ok(None);
        };
        let id = String::from_utf8(id_bytes)
            .map_err(|e| AuthError::Storage(format!("corrupt email index entry: {}", e)))?;
        let id = UserId::try_new(id)
            .map_err(|e| AuthError::Storage(format!("corrupt email index entry: {}", e)))?;

        Ok(self.get(&id)?)
    }

    fn insert_sync(&self, user: &User) -> AuthResult<()> {
        let index = Partition::new(USERS_BY_EMAIL_PARTITION);
        let key = email_index_key(&user.email);

        if self.backend.get(&index, key.as_bytes())?.is_some() {
            return Err(AuthError::EmailTaken(user.email.clone()));
        }

        self.backend.batch(vec![
            Operation::Put {
                partition: Partition::new(USERS_PARTITION),
                key: user.id.as_str().as_bytes().to_vec(),
                value: self.serialize(user)?,
            },
            Operation::Put {
                partition: index,
                key: key.into_bytes(),
                value: user.id.as_str().as_bytes().to_vec(),
            },
        ])?;
        Ok(())
    }

    fn update_sync(&self, user: &User) -> AuthResult<()> {
        let existing = self
            .get(&user.id)?
            .ok_or_else(|| AuthError::UserNotFound(user.id.to_string()))?;

        let index = Partition::new(USERS_BY_EMAIL_PARTITION);
        let old_key = email_index_key(&existing.email);
        let new_key = email_index_key(&user.email);

        let mut operations = Vec::new();
        if old_key != new_key {
            if self.backend.get(&index, new_key.as_bytes())?.is_some() {
                return Err(AuthError::EmailTaken(user.email.clone()));
            }
            operations.push(Operation::Delete {
                partition: index.clone(),
                key: old_key.into_bytes(),
            });
            operations.push(Operation::Put {
                partition: index,
                key: new_key.into_bytes(),
                value: user.id.as_str().as_bytes().to_vec(),
            });
        }
        operations.push(Operation::Put {
            partition: Partition::new(USERS_PARTITION),
            key: user.id.as_str().as_bytes().to_vec(),
            value: self.serialize(user)?,
        });

        self.backend.batch(operations)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_store::test_utils::InMemoryBackend;

    fn create_store() -> IdentityStore {
        IdentityStore::with_cost(Arc::new(InMemoryBackend::new()), 4)
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "Password123".to_string(),
            name: "test_name".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_with_email_successful() {
        let store = create_store();
        let user = store.create_user(new_user("test@test.com")).await.unwrap();

        assert_eq!(user.email, "test@test.com");
        assert!(verify_password("Password123", &user.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_new_user_email_normalized() {
        let store = create_store();
        let user = store.create_user(new_user("test@TEST.com")).await.unwrap();
        assert_eq!(user.email, "test@test.com");
    }

    #[tokio::test]
    async fn test_new_user_invalid_email() {
        let store = create_store();
        let result = store.create_user(new_user("")).await;
        assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let store = create_store();
        let result = store
            .create_user(NewUser {
                email: "test@test.com".to_string(),
                password: "pw".to_string(),
                name: String::new(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[tokio::test]
    async fn test_create_new_superuser() {
        let store = create_store();
        let user = store.create_superuser("test@TEST.com", "Password123").await.unwrap();
        assert!(user.is_staff);
        assert!(user.is_superuser);
        assert_eq!(user.email, "test@test.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_case_insensitively() {
        let store = create_store();
        store.create_user(new_user("Alice@test.com")).await.unwrap();

        let result = store.create_user(new_user("alice@TEST.com")).await;
        assert!(matches!(result, Err(AuthError::EmailTaken(_))));
    }

    #[tokio::test]
    async fn test_get_by_email_is_case_insensitive() {
        let store = create_store();
        let created = store.create_user(new_user("alice@test.com")).await.unwrap();

        let found = store.get_by_email("alice@TEST.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_authenticate_success_and_failure() {
        let store = create_store();
        store.create_user(new_user("alice@test.com")).await.unwrap();

        let user = store.authenticate("alice@test.com", "Password123").await.unwrap();
        assert_eq!(user.email, "alice@test.com");

        let wrong = store.authenticate("alice@test.com", "WrongPassword").await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials(_))));

        let unknown = store.authenticate("nobody@test.com", "Password123").await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_authenticate() {
        let store = create_store();
        let mut user = store.create_user(new_user("alice@test.com")).await.unwrap();
        user.is_active = false;
        store.update_user(user).await.unwrap();

        let result = store.authenticate("alice@test.com", "Password123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_update_email_moves_index() {
        let store = create_store();
        let mut user = store.create_user(new_user("alice@test.com")).await.unwrap();
        user.email = "alice@example.com".to_string();

        store.update_user(user).await.unwrap();

        assert!(store.get_by_email("alice@test.com").await.unwrap().is_none());
        assert!(store.get_by_email("alice@example.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_to_taken_email_rejected() {
        let store = create_store();
        store.create_user(new_user("taken@test.com")).await.unwrap();
        let mut user = store.create_user(new_user("alice@test.com")).await.unwrap();

        user.email = "taken@test.com".to_string();
        let result = store.update_user(user).await;
        assert!(matches!(result, Err(AuthError::EmailTaken(_))));
    }

    #[tokio::test]
    async fn test_set_password_changes_hash() {
        let store = create_store();
        let mut user = store.create_user(new_user("alice@test.com")).await.unwrap();
        let old_hash = user.password_hash.clone();

        store.set_password(&mut user, "NewPassword456").await.unwrap();
        assert_ne!(user.password_hash, old_hash);
        store.update_user(user).await.unwrap();

        assert!(store.authenticate("alice@test.com", "NewPassword456").await.is_ok());
        assert!(store.authenticate("alice@test.com", "Password123").await.is_err());
    }
}
