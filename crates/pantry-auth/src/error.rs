use thiserror::Error;

/// Errors that can occur in identity and authentication flows
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Missing authorization: {0}")]
    MissingAuthorization(String),

    #[error("Malformed authorization: {0}")]
    MalformedAuthorization(String),

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Account is inactive")]
    InactiveAccount,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

impl From<pantry_store::StorageError> for AuthError {
    fn from(err: pantry_store::StorageError) -> Self {
        AuthError::Storage(err.to_string())
    }
}
