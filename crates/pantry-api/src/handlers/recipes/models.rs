//! Request and response models for the recipe endpoints.

use pantry_commons::{Recipe, RecordId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// POST /api/recipes request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub time_minutes: u32,
    pub price: Decimal,
}

/// Query parameters for POST /api/recipes/{id}/image.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadImageQuery {
    /// Original filename; only its extension ends up in the stored path.
    pub filename: String,
}

/// Recipe as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeResponse {
    pub id: RecordId,
    pub title: String,
    pub time_minutes: u32,
    pub price: Decimal,
    pub image: Option<String>,
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            image: recipe.image.clone(),
        }
    }
}
