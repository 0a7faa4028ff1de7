//! Type-safe wrapper for record identifiers (tags, ingredients, recipes).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user_id::{validate_id, IdValidationError};
use crate::StorageKey;

/// Identifier of a single owned record within a resource partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId from a string.
    ///
    /// # Panics
    /// Panics if the id is invalid. Use `try_new()` for fallible creation.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self::try_new(id).expect("RecordId contains invalid characters")
    }

    /// Creates a new RecordId, returning an error if validation fails.
    pub fn try_new(id: impl Into<String>) -> Result<Self, IdValidationError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self(id))
    }

    /// Generates a new unique RecordId (UUID v4).
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

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StorageKey for RecordId {
    fn storage_key(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map(RecordId).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn test_invalid_record_id() {
        assert!(RecordId::try_new("").is_err());
        assert!(RecordId::try_new("a:b").is_err());
    }
}
