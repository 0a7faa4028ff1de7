//! Ownership-scoped repositories for the API resources.
//!
//! Each repository wraps an `OwnedEntityStore` partition, adds field
//! validation, stamps the caller as owner on create, and applies the
//! resource's list ordering. Storage work runs on the blocking pool.

pub mod ingredients;
pub mod recipes;
pub mod tags;

pub use ingredients::{IngredientRepo, INGREDIENTS_PARTITION};
pub use recipes::{NewRecipe, RecipeRepo, RECIPES_PARTITION};
pub use tags::{TagRepo, TAGS_PARTITION};
