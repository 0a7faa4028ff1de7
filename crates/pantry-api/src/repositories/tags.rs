//! Tag repository.

use std::sync::Arc;

use pantry_commons::{Tag, UserId};
use pantry_store::{OwnedEntityStore, StorageBackend};

use crate::error::{ApiError, ApiResult};
use crate::validation::{require_non_blank, FieldErrors};

/// Partition holding tag records.
pub const TAGS_PARTITION: &str = "tags";

/// Ownership-scoped store for tags.
#[derive(Clone)]
pub struct TagRepo {
    store: OwnedEntityStore<Tag>,
}

impl TagRepo {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            store: OwnedEntityStore::new(backend, TAGS_PARTITION),
        }
    }

    /// Returns the caller's tags, name descending.
    pub async fn list_for(&self, owner: &UserId) -> ApiResult<Vec<Tag>> {
        let store = self.store.clone();
        let owner = owner.clone();
        let mut tags = tokio::task::spawn_blocking(move || store.list_for(&owner))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;

        tags.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(tags)
    }

    /// Creates a tag owned by the caller.
    pub async fn create(&self, owner: &UserId, name: String) -> ApiResult<Tag> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "name", &name);
        errors.into_result()?;

        let tag = Tag::new(owner.clone(), name);
        let store = self.store.clone();
        let record = tag.clone();
        tokio::task::spawn_blocking(move || store.insert(&record))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_store::test_utils::InMemoryBackend;

    fn create_repo() -> TagRepo {
        TagRepo::new(Arc::new(InMemoryBackend::new()))
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name_descending() {
        let repo = create_repo();
        let owner = UserId::generate();

        for name in ["apple", "zucchini", "mango"] {
            repo.create(&owner, name.to_string()).await.unwrap();
        }

        let names: Vec<_> = repo
            .list_for(&owner)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["zucchini", "mango", "apple"]);
    }

    #[tokio::test]
    async fn test_list_is_limited_to_owner() {
        let repo = create_repo();
        let alice = UserId::generate();
        let bob = UserId::generate();

        repo.create(&alice, "vegan".to_string()).await.unwrap();
        repo.create(&bob, "dessert".to_string()).await.unwrap();

        let alice_tags = repo.list_for(&alice).await.unwrap();
        assert_eq!(alice_tags.len(), 1);
        assert_eq!(alice_tags[0].name, "vegan");
    }

    #[tokio::test]
    async fn test_empty_name_rejected_before_persisting() {
        let repo = create_repo();
        let owner = UserId::generate();

        let result = repo.create(&owner, "   ".to_string()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(repo.list_for(&owner).await.unwrap().is_empty());
    }
}
