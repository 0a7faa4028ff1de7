//! API error type and HTTP response mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::validation::FieldErrors;
use pantry_auth::AuthError;

/// Errors surfaced by API handlers and repositories
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Shorthand for a single-field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation(FieldErrors::single(field, message))
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Auth(_) => "authentication_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::Storage(_) => "storage_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<pantry_store::StorageError> for ApiError {
    fn from(err: pantry_store::StorageError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(inner) => match inner {
                AuthError::InvalidEmail(_)
                | AuthError::WeakPassword(_)
                | AuthError::EmailTaken(_) => StatusCode::BAD_REQUEST,
                AuthError::Storage(_) | AuthError::HashingError(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                _ => StatusCode::UNAUTHORIZED,
            },
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(fields) => serde_json::json!({
                "error": self.error_code(),
                "fields": fields,
            }),
            other => serde_json::json!({
                "error": other.error_code(),
                "message": other.to_string(),
            }),
        };

        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::validation("name", "must not be empty");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_errors_keep_their_status() {
        let err = ApiError::Auth(AuthError::InvalidToken);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = ApiError::Auth(AuthError::EmailTaken("a@b.com".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::NotFound("recipe".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
