//! Request and response models for the ingredient endpoints.

use pantry_commons::{Ingredient, RecordId};
use serde::{Deserialize, Serialize};

/// POST /api/ingredients request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
}

/// Ingredient as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientResponse {
    pub id: RecordId,
    pub name: String,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id.clone(),
            name: ingredient.name.clone(),
        }
    }
}
