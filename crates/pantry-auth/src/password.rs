// Password hashing and validation module

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::{AuthError, AuthResult};

/// Bcrypt cost factor for password hashing.
/// Higher values = more secure but slower.
pub const BCRYPT_COST: u32 = DEFAULT_COST;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (bcrypt has a 72-byte limit)
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Hash a password using bcrypt.
///
/// Runs on a blocking thread pool to avoid blocking the async runtime.
/// The returned hash string includes the salt.
///
/// # Errors
/// Returns `AuthError::HashingError` if bcrypt fails
pub async fn hash_password(password: &str, cost: Option<u32>) -> AuthResult<String> {
    let password = password.to_string();
    let cost = cost.unwrap_or(BCRYPT_COST);

    tokio::task::spawn_blocking(move || {
        hash(password, cost).map_err(|e| AuthError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::HashingError(format!("Task join error: {}", e)))?
}

/// Verify a password against a bcrypt hash.
///
/// Runs on a blocking thread pool. Returns `Ok(true)` on match, `Ok(false)`
/// on mismatch.
///
/// # Errors
/// Returns `AuthError::HashingError` if bcrypt verification fails
pub async fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &hash).map_err(|e| AuthError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::HashingError(format!("Task join error: {}", e)))?
}

/// Validate password meets security requirements.
///
/// # Errors
/// Returns `AuthError::WeakPassword` with the specific reason
pub fn validate_password(password: &str) -> AuthResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let password = "SecurePassword123!";
        let hash = hash_password(password, Some(4)).await.expect("Failed to hash");
        assert!(hash.starts_with("$2b$"));

        let verified = verify_password(password, &hash).await.expect("Failed to verify");
        assert!(verified);

        let wrong_verified = verify_password("WrongPassword", &hash)
            .await
            .expect("Failed to verify");
        assert!(!wrong_verified);
    }

    #[test]
    fn test_validate_password_too_short() {
        let result = validate_password("short");
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[test]
    fn test_validate_password_too_long() {
        let result = validate_password(&"x".repeat(80));
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("MySecurePassword123!").is_ok());
    }
}
