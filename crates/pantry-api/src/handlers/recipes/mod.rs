//! Recipe handlers
//!
//! GET  /api/recipes             - Lists the caller's recipes, newest first.
//! POST /api/recipes             - Creates a recipe owned by the caller.
//! GET  /api/recipes/{id}        - Fetches one of the caller's recipes.
//! POST /api/recipes/{id}/image  - Uploads an image for one of the caller's recipes.

pub mod models;

use actix_web::{web, HttpResponse};
use pantry_auth::AuthenticatedUser;
use pantry_commons::RecordId;

use self::models::{CreateRecipeRequest, RecipeResponse, UploadImageQuery};
use crate::error::ApiError;
use crate::media::{recipe_image_path, MediaStore};
use crate::repositories::{NewRecipe, RecipeRepo};
use crate::validation::{require_non_blank, FieldErrors};

fn parse_recipe_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::try_new(raw).map_err(|_| ApiError::NotFound("recipe not found".to_string()))
}

/// GET /api/recipes
pub async fn list_recipes_handler(
    auth: AuthenticatedUser,
    repo: web::Data<RecipeRepo>,
) -> Result<HttpResponse, ApiError> {
    let recipes = repo.list_for(auth.user_id()).await?;
    let body: Vec<RecipeResponse> = recipes.iter().map(RecipeResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/recipes
pub async fn create_recipe_handler(
    auth: AuthenticatedUser,
    repo: web::Data<RecipeRepo>,
    body: web::Json<CreateRecipeRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let recipe = repo
        .create(
            auth.user_id(),
            NewRecipe {
                title: body.title,
                time_minutes: body.time_minutes,
                price: body.price,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(RecipeResponse::from(&recipe)))
}

/// GET /api/recipes/{id}
pub async fn get_recipe_handler(
    auth: AuthenticatedUser,
    repo: web::Data<RecipeRepo>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_recipe_id(&path)?;
    let recipe = repo.get(auth.user_id(), &id).await?;
    Ok(HttpResponse::Ok().json(RecipeResponse::from(&recipe)))
}

/// POST /api/recipes/{id}/image
///
/// Accepts the raw image bytes as the request body with the original
/// filename passed as `?filename=`. Derives a fresh storage path from a
/// random id plus the filename's extension, writes the file under the
/// media root, and records the path on the recipe.
pub async fn upload_recipe_image_handler(
    auth: AuthenticatedUser,
    repo: web::Data<RecipeRepo>,
    media: web::Data<MediaStore>,
    path: web::Path<String>,
    query: web::Query<UploadImageQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = parse_recipe_id(&path)?;

    let mut errors = FieldErrors::new();
    require_non_blank(&mut errors, "filename", &query.filename);
    if body.is_empty() {
        errors.add("image", "must not be empty");
    }
    errors.into_result()?;

    // Confirm ownership before writing anything to disk.
    repo.get(auth.user_id(), &id).await?;

    let image_path = recipe_image_path(&query.filename);
    media.save(&image_path, body.to_vec()).await?;
    let recipe = repo.set_image(auth.user_id(), &id, image_path).await?;

    log::info!("Stored image for recipe {} at {:?}", recipe.id, recipe.image);
    Ok(HttpResponse::Ok().json(RecipeResponse::from(&recipe)))
}
