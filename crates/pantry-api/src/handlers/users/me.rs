//! Own-profile handlers
//!
//! GET /api/users/me - Returns the authenticated account.
//! PATCH /api/users/me - Updates name, email and/or password.

use actix_web::{web, HttpResponse};
use pantry_auth::identity::IdentityStore;
use pantry_auth::AuthenticatedUser;

use super::map_account_error;
use super::models::{UpdateMeRequest, UserResponse};
use crate::error::ApiError;

/// GET /api/users/me
pub async fn me_handler(auth: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse::from(&auth.user))
}

/// PATCH /api/users/me
///
/// Applies the provided fields to the caller's own account. A changed
/// email is re-normalized and re-checked for uniqueness; a new password
/// is validated and re-hashed.
pub async fn update_me_handler(
    auth: AuthenticatedUser,
    identity: web::Data<IdentityStore>,
    body: web::Json<UpdateMeRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let mut user = auth.user;

    if let Some(email) = body.email {
        user.email = email;
    }
    if let Some(name) = body.name {
        user.name = name;
    }
    if let Some(password) = body.password {
        identity
            .set_password(&mut user, &password)
            .await
            .map_err(map_account_error)?;
    }

    let user = identity.update_user(user).await.map_err(map_account_error)?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}
