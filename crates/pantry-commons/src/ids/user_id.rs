//! Type-safe wrapper for user identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::StorageKey;

/// Type-safe wrapper for user identifiers.
///
/// Ensures user ids cannot be accidentally used where record ids are
/// expected, and keeps key material out of storage paths and composite keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

/// Error type for id validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdValidationError(pub String);

impl fmt::Display for IdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IdValidationError {}

impl UserId {
    /// Creates a new UserId from a string.
    ///
    /// # Panics
    /// Panics if the id is invalid. Use `try_new()` for fallible creation.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self::try_new(id).expect("UserId contains invalid characters")
    }

    /// Creates a new UserId, returning an error if validation fails.
    ///
    /// Rejects ids that would break composite storage keys (`:`), storage
    /// paths (`/`, `\`, `..`), or contain null bytes.
    pub fn try_new(id: impl Into<String>) -> Result<Self, IdValidationError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self(id))
    }

    /// Generates a new unique UserId (UUID v4).
    #[inline]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn validate_id(id: &str) -> Result<(), IdValidationError> {
    if id.is_empty() {
        return Err(IdValidationError("id cannot be empty".to_string()));
    }
    if id.contains(':') {
        return Err(IdValidationError(
            "id cannot contain ':' (storage key separator)".to_string(),
        ));
    }
    if id.contains("..") || id.contains('/') || id.contains('\\') {
        return Err(IdValidationError(
            "id cannot contain path separators".to_string(),
        ));
    }
    if id.contains('\0') {
        return Err(IdValidationError("id cannot contain null bytes".to_string()));
    }
    Ok(())
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StorageKey for UserId {
    fn storage_key(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map(UserId).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_id() {
        let id = UserId::try_new("alice123");
        assert!(id.is_ok());
        assert_eq!(id.unwrap().as_str(), "alice123");
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn test_colon_blocked() {
        let id = UserId::try_new("user:1");
        assert!(id.is_err());
        assert!(id.unwrap_err().0.contains("separator"));
    }

    #[test]
    fn test_path_traversal_blocked() {
        assert!(UserId::try_new("../../../etc/passwd").is_err());
        assert!(UserId::try_new("user/subdir").is_err());
        assert!(UserId::try_new("user\\subdir").is_err());
    }

    #[test]
    fn test_empty_blocked() {
        assert!(UserId::try_new("").is_err());
    }

    #[test]
    #[should_panic(expected = "invalid characters")]
    fn test_new_panics_on_invalid() {
        let _ = UserId::new("a:b");
    }
}
