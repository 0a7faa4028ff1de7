//! Recipe repository.

use std::sync::Arc;

use pantry_commons::{Recipe, RecordId, UserId};
use pantry_store::{OwnedEntityStore, StorageBackend};
use rust_decimal::Decimal;

use crate::error::{ApiError, ApiResult};
use crate::validation::{require_non_blank, FieldErrors};

/// Partition holding recipe records.
pub const RECIPES_PARTITION: &str = "recipes";

/// Fields accepted when creating a recipe.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub time_minutes: u32,
    pub price: Decimal,
}

/// Ownership-scoped store for recipes.
#[derive(Clone)]
pub struct RecipeRepo {
    store: OwnedEntityStore<Recipe>,
}

impl RecipeRepo {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            store: OwnedEntityStore::new(backend, RECIPES_PARTITION),
        }
    }

    /// Returns the caller's recipes, newest first.
    pub async fn list_for(&self, owner: &UserId) -> ApiResult<Vec<Recipe>> {
        let store = self.store.clone();
        let owner = owner.clone();
        let mut recipes = tokio::task::spawn_blocking(move || store.list_for(&owner))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;

        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(recipes)
    }

    /// Creates a recipe owned by the caller.
    pub async fn create(&self, owner: &UserId, fields: NewRecipe) -> ApiResult<Recipe> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "title", &fields.title);
        if fields.time_minutes == 0 {
            errors.add("time_minutes", "must be a positive integer");
        }
        errors.into_result()?;

        let recipe = Recipe::new(owner.clone(), fields.title, fields.time_minutes, fields.price);
        let store = self.store.clone();
        let record = recipe.clone();
        tokio::task::spawn_blocking(move || store.insert(&record))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;
        Ok(recipe)
    }

    /// Fetches one of the caller's recipes.
    ///
    /// Another user's recipe id resolves to `NotFound`, not a leak.
    pub async fn get(&self, owner: &UserId, id: &RecordId) -> ApiResult<Recipe> {
        let store = self.store.clone();
        let owner = owner.clone();
        let id = id.clone();
        let found = tokio::task::spawn_blocking(move || store.get(&owner, &id))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;
        found.ok_or_else(|| ApiError::NotFound("recipe not found".to_string()))
    }

    /// Records the uploaded image path on one of the caller's recipes.
    pub async fn set_image(
        &self,
        owner: &UserId,
        id: &RecordId,
        image: String,
    ) -> ApiResult<Recipe> {
        let mut recipe = self.get(owner, id).await?;
        recipe.image = Some(image);

        let store = self.store.clone();
        let record = recipe.clone();
        tokio::task::spawn_blocking(move || store.insert(&record))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_store::test_utils::InMemoryBackend;

    fn create_repo() -> RecipeRepo {
        RecipeRepo::new(Arc::new(InMemoryBackend::new()))
    }

    fn sample_recipe(title: &str) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            time_minutes: 10,
            price: Decimal::new(500, 2),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = create_repo();
        let owner = UserId::generate();

        let created = repo.create(&owner, sample_recipe("Steak")).await.unwrap();
        let found = repo.get(&owner, &created.id).await.unwrap();

        assert_eq!(found.title, "Steak");
        assert_eq!(found.user_id, owner);
        assert!(found.image.is_none());
    }

    #[tokio::test]
    async fn test_get_other_users_recipe_is_not_found() {
        let repo = create_repo();
        let alice = UserId::generate();
        let bob = UserId::generate();

        let created = repo.create(&alice, sample_recipe("Steak")).await.unwrap();
        let result = repo.get(&bob, &created.id).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_limited_to_owner() {
        let repo = create_repo();
        let alice = UserId::generate();
        let bob = UserId::generate();

        repo.create(&alice, sample_recipe("Curry")).await.unwrap();
        repo.create(&bob, sample_recipe("Soup")).await.unwrap();

        let alice_recipes = repo.list_for(&alice).await.unwrap();
        assert_eq!(alice_recipes.len(), 1);
        assert_eq!(alice_recipes[0].title, "Curry");
    }

    #[tokio::test]
    async fn test_blank_title_rejected_before_persisting() {
        let repo = create_repo();
        let owner = UserId::generate();

        let result = repo.create(&owner, sample_recipe(" ")).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(repo.list_for(&owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_time_minutes_rejected() {
        let repo = create_repo();
        let owner = UserId::generate();

        let result = repo
            .create(
                &owner,
                NewRecipe {
                    title: "Instant".to_string(),
                    time_minutes: 0,
                    price: Decimal::new(100, 2),
                },
            )
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_set_image_persists_path() {
        let repo = create_repo();
        let owner = UserId::generate();

        let created = repo.create(&owner, sample_recipe("Steak")).await.unwrap();
        let updated = repo
            .set_image(&owner, &created.id, "uploads/recipe/abc.jpg".to_string())
            .await
            .unwrap();
        assert_eq!(updated.image.as_deref(), Some("uploads/recipe/abc.jpg"));

        let found = repo.get(&owner, &created.id).await.unwrap();
        assert_eq!(found.image.as_deref(), Some("uploads/recipe/abc.jpg"));
    }
}
