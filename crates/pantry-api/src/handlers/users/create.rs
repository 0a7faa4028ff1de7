//! Registration handler
//!
//! POST /api/users - Creates a new account (public endpoint).

use actix_web::{web, HttpResponse};
use pantry_auth::identity::{IdentityStore, NewUser};

use super::map_account_error;
use super::models::{CreateUserRequest, UserResponse};
use crate::error::ApiError;

/// POST /api/users
///
/// Registers an account from email, password, and optional display name.
/// Returns 201 with the public user view, or 400 with field errors.
pub async fn create_user_handler(
    identity: web::Data<IdentityStore>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let user = identity
        .create_user(NewUser {
            email: body.email,
            password: body.password,
            name: body.name,
        })
        .await
        .map_err(map_account_error)?;

    log::info!("Registered new account {}", user.email);
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}
