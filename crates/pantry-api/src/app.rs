//! Application component wiring shared by the server and the API tests.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;
use pantry_auth::identity::IdentityStore;
use pantry_auth::tokens::TokenStore;
use pantry_store::StorageBackend;

use crate::media::MediaStore;
use crate::repositories::{IngredientRepo, RecipeRepo, TagRepo};
use crate::routes;

/// Every storage partition the API uses. RocksDB is opened with exactly
/// this set.
pub const ALL_PARTITIONS: &[&str] = &[
    pantry_auth::USERS_PARTITION,
    pantry_auth::USERS_BY_EMAIL_PARTITION,
    pantry_auth::TOKENS_PARTITION,
    crate::repositories::TAGS_PARTITION,
    crate::repositories::INGREDIENTS_PARTITION,
    crate::repositories::RECIPES_PARTITION,
];

/// The stores and repositories behind the HTTP handlers.
///
/// Built once at bootstrap over a shared backend; clones are cheap and
/// every actix worker gets its own.
#[derive(Clone)]
pub struct AppComponents {
    pub identity: IdentityStore,
    pub tokens: TokenStore,
    pub tags: TagRepo,
    pub ingredients: IngredientRepo,
    pub recipes: RecipeRepo,
    pub media: MediaStore,
}

impl AppComponents {
    /// Wires all components over one storage backend.
    pub fn new(backend: Arc<dyn StorageBackend>, media_root: PathBuf, bcrypt_cost: u32) -> Self {
        Self {
            identity: IdentityStore::with_cost(backend.clone(), bcrypt_cost),
            tokens: TokenStore::new(backend.clone()),
            tags: TagRepo::new(backend.clone()),
            ingredients: IngredientRepo::new(backend.clone()),
            recipes: RecipeRepo::new(backend),
            media: MediaStore::new(media_root),
        }
    }

    /// Registers app data and routes on an actix service config.
    ///
    /// Used identically by the production server and `test::init_service`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.identity.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(self.tags.clone()))
            .app_data(web::Data::new(self.ingredients.clone()))
            .app_data(web::Data::new(self.recipes.clone()))
            .app_data(web::Data::new(self.media.clone()))
            .configure(routes::configure);
    }
}
