//! Ingredient repository.

use std::sync::Arc;

use pantry_commons::{Ingredient, UserId};
use pantry_store::{OwnedEntityStore, StorageBackend};

use crate::error::{ApiError, ApiResult};
use crate::validation::{require_non_blank, FieldErrors};

/// Partition holding ingredient records.
pub const INGREDIENTS_PARTITION: &str = "ingredients";

/// Ownership-scoped store for ingredients.
#[derive(Clone)]
pub struct IngredientRepo {
    store: OwnedEntityStore<Ingredient>,
}

impl IngredientRepo {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            store: OwnedEntityStore::new(backend, INGREDIENTS_PARTITION),
        }
    }

    /// Returns the caller's ingredients, name descending.
    pub async fn list_for(&self, owner: &UserId) -> ApiResult<Vec<Ingredient>> {
        let store = self.store.clone();
        let owner = owner.clone();
        let mut ingredients = tokio::task::spawn_blocking(move || store.list_for(&owner))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;

        ingredients.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(ingredients)
    }

    /// Creates an ingredient owned by the caller.
    pub async fn create(&self, owner: &UserId, name: String) -> ApiResult<Ingredient> {
        let mut errors = FieldErrors::new();
        require_non_blank(&mut errors, "name", &name);
        errors.into_result()?;

        let ingredient = Ingredient::new(owner.clone(), name);
        let store = self.store.clone();
        let record = ingredient.clone();
        tokio::task::spawn_blocking(move || store.insert(&record))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;
        Ok(ingredient)
    }
}
