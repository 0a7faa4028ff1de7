//! Actix-web extractor for bearer-token authentication.
//!
//! Handlers that take an [`AuthenticatedUser`] parameter only run for
//! requests carrying a valid `Authorization: Bearer <token>` header; every
//! other request is rejected with a 401 JSON body before any handler or
//! repository code executes.
//!
//! # Setup
//!
//! `IdentityStore` and `TokenStore` must be registered as app data:
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(identity.clone()))
//!     .app_data(web::Data::new(tokens.clone()))
//!     .service(my_handler)
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use actix_web::{dev::Payload, http::StatusCode, FromRequest, HttpRequest, ResponseError};
use pantry_commons::User;

use crate::error::AuthError;
use crate::identity::IdentityStore;
use crate::tokens::TokenStore;

/// The caller resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> &pantry_commons::UserId {
        &self.user.id
    }
}

/// Error type for authentication extraction.
///
/// Wraps `AuthError` and implements `ResponseError` for automatic HTTP
/// error responses.
#[derive(Debug)]
pub struct AuthExtractError {
    inner: AuthError,
}

impl AuthExtractError {
    pub fn new(error: AuthError) -> Self {
        Self { inner: error }
    }

    pub fn inner(&self) -> &AuthError {
        &self.inner
    }

    /// Error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match &self.inner {
            AuthError::MissingAuthorization(_) => "MISSING_AUTHORIZATION",
            AuthError::MalformedAuthorization(_) => "MALFORMED_AUTHORIZATION",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            AuthError::InactiveAccount => "INACTIVE_ACCOUNT",
            AuthError::UserNotFound(_) => "USER_NOT_FOUND",
            AuthError::Storage(_) => "STORAGE_ERROR",
            _ => "AUTHENTICATION_ERROR",
        }
    }
}

impl fmt::Display for AuthExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl ResponseError for AuthExtractError {
    fn status_code(&self) -> StatusCode {
        match &self.inner {
            AuthError::Storage(_) | AuthError::HashingError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let body = serde_json::json!({
            "error": self.error_code(),
            "message": self.inner.to_string(),
        });

        actix_web::HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }
}

impl From<AuthError> for AuthExtractError {
    fn from(error: AuthError) -> Self {
        Self::new(error)
    }
}

/// Pulls the bearer token out of the Authorization header.
fn bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| {
            AuthError::MissingAuthorization(
                "Authorization header is required. Use 'Authorization: Bearer <token>'".to_string(),
            )
        })?
        .to_str()
        .map_err(|_| {
            AuthError::MalformedAuthorization(
                "Authorization header contains invalid characters".to_string(),
            )
        })?;

    let mut parts = header.trim().splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default().trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MalformedAuthorization(
            "Expected 'Authorization: Bearer <token>'".to_string(),
        ));
    }

    Ok(token.to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthExtractError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let identity = req
                .app_data::<actix_web::web::Data<IdentityStore>>()
                .ok_or_else(|| {
                    AuthExtractError::new(AuthError::Storage(
                        "IdentityStore not configured as app data".to_string(),
                    ))
                })?
                .get_ref()
                .clone();
            let tokens = req
                .app_data::<actix_web::web::Data<TokenStore>>()
                .ok_or_else(|| {
                    AuthExtractError::new(AuthError::Storage(
                        "TokenStore not configured as app data".to_string(),
                    ))
                })?
                .get_ref()
                .clone();

            let token = bearer_token(&req)?;
            let access = tokens.resolve(&token).await?;

            let user = identity
                .get_by_id(&access.user_id)
                .await?
                .ok_or(AuthError::InvalidToken)?;

            if !user.is_active {
                return Err(AuthExtractError::new(AuthError::InactiveAccount));
            }

            Ok(AuthenticatedUser { user })
        })
    }
}
