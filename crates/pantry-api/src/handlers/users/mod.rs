//! User account handlers: registration, token issuing, own-profile access.

mod create;
mod me;
mod token;

pub mod models;

pub use create::create_user_handler;
pub use me::{me_handler, update_me_handler};
pub use token::token_handler;

use crate::error::ApiError;
use pantry_auth::AuthError;

/// Maps account-field failures onto field-level validation errors so the
/// caller sees which input was wrong; everything else passes through.
fn map_account_error(err: AuthError) -> ApiError {
    match err {
        AuthError::InvalidEmail(message) => ApiError::validation("email", message),
        AuthError::EmailTaken(_) => {
            ApiError::validation("email", "a user with this email already exists")
        }
        AuthError::WeakPassword(message) => ApiError::validation("password", message),
        other => ApiError::Auth(other),
    }
}
