//! Ingredient handlers
//!
//! GET  /api/ingredients - Lists the caller's ingredients, name descending.
//! POST /api/ingredients - Creates an ingredient owned by the caller.

pub mod models;

use actix_web::{web, HttpResponse};
use pantry_auth::AuthenticatedUser;

use self::models::{CreateIngredientRequest, IngredientResponse};
use crate::error::ApiError;
use crate::repositories::IngredientRepo;

/// GET /api/ingredients
pub async fn list_ingredients_handler(
    auth: AuthenticatedUser,
    repo: web::Data<IngredientRepo>,
) -> Result<HttpResponse, ApiError> {
    let ingredients = repo.list_for(auth.user_id()).await?;
    let body: Vec<IngredientResponse> = ingredients.iter().map(IngredientResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/ingredients
pub async fn create_ingredient_handler(
    auth: AuthenticatedUser,
    repo: web::Data<IngredientRepo>,
    body: web::Json<CreateIngredientRequest>,
) -> Result<HttpResponse, ApiError> {
    let ingredient = repo.create(auth.user_id(), body.into_inner().name).await?;
    Ok(HttpResponse::Created().json(IngredientResponse::from(&ingredient)))
}
