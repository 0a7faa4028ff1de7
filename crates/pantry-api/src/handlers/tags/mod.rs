//! Tag handlers
//!
//! GET  /api/tags - Lists the caller's tags, name descending.
//! POST /api/tags - Creates a tag owned by the caller.

pub mod models;

use actix_web::{web, HttpResponse};
use pantry_auth::AuthenticatedUser;

use self::models::{CreateTagRequest, TagResponse};
use crate::error::ApiError;
use crate::repositories::TagRepo;

/// GET /api/tags
pub async fn list_tags_handler(
    auth: AuthenticatedUser,
    repo: web::Data<TagRepo>,
) -> Result<HttpResponse, ApiError> {
    let tags = repo.list_for(auth.user_id()).await?;
    let body: Vec<TagResponse> = tags.iter().map(TagResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/tags
pub async fn create_tag_handler(
    auth: AuthenticatedUser,
    repo: web::Data<TagRepo>,
    body: web::Json<CreateTagRequest>,
) -> Result<HttpResponse, ApiError> {
    let tag = repo.create(auth.user_id(), body.into_inner().name).await?;
    Ok(HttpResponse::Created().json(TagResponse::from(&tag)))
}
