//! Token handler
//!
//! POST /api/users/token - Verifies credentials and issues a bearer token.

use actix_web::{web, HttpResponse};
use pantry_auth::identity::IdentityStore;
use pantry_auth::tokens::TokenStore;

use super::models::{TokenRequest, TokenResponse};
use crate::error::ApiError;

/// POST /api/users/token
///
/// Returns a fresh opaque bearer token for valid credentials, 401 otherwise.
pub async fn token_handler(
    identity: web::Data<IdentityStore>,
    tokens: web::Data<TokenStore>,
    body: web::Json<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = identity.authenticate(&body.email, &body.password).await?;
    let token = tokens.issue(user.id.clone()).await?;

    log::debug!("Issued token for {}", user.email);
    Ok(HttpResponse::Ok().json(TokenResponse { token: token.token }))
}
