//! Domain entities stored by the pantry backend.

mod ingredient;
mod recipe;
mod tag;
mod token;
mod user;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use tag::Tag;
pub use token::AccessToken;
pub use user::User;

use crate::{RecordId, UserId};

/// Records that belong to exactly one user.
///
/// The storage layer derives the composite key `{owner}:{record_id}` from
/// these accessors, so ownership is part of the key itself rather than a
/// filter applied after the fact.
pub trait UserOwned {
    /// The identity that owns this record.
    fn owner(&self) -> &UserId;

    /// The record's own identifier.
    fn record_id(&self) -> &RecordId;
}
