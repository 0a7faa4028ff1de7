//! API routes configuration
//!
//! Registration and token endpoints are public; every resource endpoint
//! authenticates through the bearer-token extractor.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// Configure the API routes:
/// - POST /api/users, POST /api/users/token - account + login (public)
/// - GET/PATCH /api/users/me - own profile
/// - GET/POST /api/tags, /api/ingredients, /api/recipes - owned resources
/// - GET /api/recipes/{id}, POST /api/recipes/{id}/image
/// - GET /api/healthcheck - liveness probe
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/users")
                    .route("", web::post().to(handlers::users::create_user_handler))
                    .route("/token", web::post().to(handlers::users::token_handler))
                    .route("/me", web::get().to(handlers::users::me_handler))
                    .route("/me", web::patch().to(handlers::users::update_me_handler)),
            )
            .service(
                web::scope("/tags")
                    .route("", web::get().to(handlers::tags::list_tags_handler))
                    .route("", web::post().to(handlers::tags::create_tag_handler)),
            )
            .service(
                web::scope("/ingredients")
                    .route("", web::get().to(handlers::ingredients::list_ingredients_handler))
                    .route("", web::post().to(handlers::ingredients::create_ingredient_handler)),
            )
            .service(
                web::scope("/recipes")
                    .route("", web::get().to(handlers::recipes::list_recipes_handler))
                    .route("", web::post().to(handlers::recipes::create_recipe_handler))
                    .route("/{id}", web::get().to(handlers::recipes::get_recipe_handler))
                    .route(
                        "/{id}/image",
                        web::post().to(handlers::recipes::upload_recipe_image_handler),
                    ),
            )
            .route("/healthcheck", web::get().to(healthcheck_handler)),
    );
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
