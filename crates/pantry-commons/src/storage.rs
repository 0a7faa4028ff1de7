//! Key trait shared between the id types and the storage layer.

/// Types that can act as a storage key.
///
/// Implemented by the typed id wrappers so stores can be generic over the
/// key type instead of passing raw strings around.
pub trait StorageKey {
    /// Encodes the key as bytes for the storage backend.
    fn storage_key(&self) -> Vec<u8>;

    /// Decodes a key from its byte representation.
    fn from_storage_key(bytes: &[u8]) -> Result<Self, String>
    where
        Self: Sized;
}

impl StorageKey for String {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())
    }
}
