//! Shared vocabulary for the pantry backend.
//!
//! Holds the typed identifiers, the domain entities, and the `StorageKey`
//! trait that the storage layer builds on. Keeping these in one crate lets
//! the store, auth, and API crates share types without depending on each
//! other.

pub mod ids;
pub mod models;
pub mod storage;

pub use ids::{RecordId, UserId};
pub use models::{AccessToken, Ingredient, Recipe, Tag, User, UserOwned};
pub use storage::StorageKey;
