//! Ownership-scoped entity storage.
//!
//! Every record in an `OwnedEntityStore` belongs to exactly one user, and
//! the owner is part of the storage key (`{owner}:{record_id}`). Listing a
//! user's records is a prefix scan over `{owner}:`, so a query can never
//! observe another user's rows — isolation holds by key construction, not
//! by a filter someone has to remember to apply.

use std::marker::PhantomData;
use std::sync::Arc;

use pantry_commons::{RecordId, UserId, UserOwned};
use serde::{de::DeserializeOwned, Serialize};

use crate::key_encoding::{owner_key, owner_prefix};
use crate::storage_trait::{Partition, Result, StorageBackend, StorageError};

/// Ownership-scoped store for one entity type.
pub struct OwnedEntityStore<V> {
    backend: Arc<dyn StorageBackend>,
    partition: String,
    _entity: PhantomData<fn() -> V>,
}

impl<V> Clone for OwnedEntityStore<V> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            partition: self.partition.clone(),
            _entity: PhantomData,
        }
    }
}

impl<V> OwnedEntityStore<V>
where
    V: UserOwned + Serialize + DeserializeOwned + Send + Sync,
{
    /// Creates a store over the given backend partition.
    pub fn new(backend: Arc<dyn StorageBackend>, partition: impl Into<String>) -> Self {
        Self {
            backend,
            partition: partition.into(),
            _entity: PhantomData,
        }
    }

    fn partition(&self) -> Partition {
        Partition::new(self.partition.as_str())
    }

    fn serialize(&self, entity: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Persists a record under its own owner and id.
    ///
    /// The key is derived from the record itself, never from caller-supplied
    /// key material, so a record cannot be filed under a foreign owner.
    pub fn insert(&self, record: &V) -> Result<()> {
        let key = owner_key(record.owner().as_str(), record.record_id().as_str());
        let value = self.serialize(record)?;
        self.backend.put(&self.partition(), key.as_bytes(), &value)
    }

    /// Retrieves one record of the given owner. `Ok(None)` when the id does
    /// not exist *for that owner* — another user's id behaves as absent.
    pub fn get(&self, owner: &UserId, record_id: &RecordId) -> Result<Option<V>> {
        let key = owner_key(owner.as_str(), record_id.as_str());
        match self.backend.get(&self.partition(), key.as_bytes())? {
            Some(bytes) => Ok(Some(self.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Returns every record of the given owner, in key order.
    pub fn list_for(&self, owner: &UserId) -> Result<Vec<V>> {
        let prefix = owner_prefix(owner.as_str());
        let entries = self
            .backend
            .scan(&self.partition(), Some(prefix.as_bytes()), None)?;

        let mut records = Vec::with_capacity(entries.len());
        for (_key, value_bytes) in entries {
            records.push(self.deserialize(&value_bytes)?);
        }
        Ok(records)
    }

    /// Deletes one record of the given owner (idempotent).
    pub fn delete(&self, owner: &UserId, record_id: &RecordId) -> Result<()> {
        let key = owner_key(owner.as_str(), record_id.as_str());
        self.backend.delete(&self.partition(), key.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryBackend;
    use pantry_commons::Tag;

    fn create_store() -> OwnedEntityStore<Tag> {
        OwnedEntityStore::new(Arc::new(InMemoryBackend::new()), "tags")
    }

    #[test]
    fn test_insert_and_get() {
        let store = create_store();
        let owner = UserId::generate();
        let tag = Tag::new(owner.clone(), "vegan".to_string());

        store.insert(&tag).unwrap();

        let found = store.get(&owner, &tag.id).unwrap();
        assert_eq!(found, Some(tag));
    }

    #[test]
    fn test_get_with_wrong_owner_is_none() {
        let store = create_store();
        let owner = UserId::generate();
        let tag = Tag::new(owner.clone(), "vegan".to_string());
        store.insert(&tag).unwrap();

        let other = UserId::generate();
        assert_eq!(store.get(&other, &tag.id).unwrap(), None);
    }

    #[test]
    fn test_list_for_is_isolated_per_owner() {
        let store = create_store();
        let alice = UserId::generate();
        let bob = UserId::generate();

        for name in ["vegan", "dessert"] {
            store.insert(&Tag::new(alice.clone(), name.to_string())).unwrap();
        }
        store.insert(&Tag::new(bob.clone(), "breakfast".to_string())).unwrap();

        let alice_tags = store.list_for(&alice).unwrap();
        assert_eq!(alice_tags.len(), 2);
        assert!(alice_tags.iter().all(|t| t.user_id == alice));

        let bob_tags = store.list_for(&bob).unwrap();
        assert_eq!(bob_tags.len(), 1);
        assert_eq!(bob_tags[0].name, "breakfast");
    }

    #[test]
    fn test_list_for_unknown_owner_is_empty() {
        let store = create_store();
        assert!(store.list_for(&UserId::generate()).unwrap().is_empty());
    }

    #[test]
    fn test_delete_only_touches_own_record() {
        let store = create_store();
        let alice = UserId::generate();
        let bob = UserId::generate();

        let alice_tag = Tag::new(alice.clone(), "vegan".to_string());
        let bob_tag = Tag::new(bob.clone(), "vegan".to_string());
        store.insert(&alice_tag).unwrap();
        store.insert(&bob_tag).unwrap();

        // Deleting with bob's owner and alice's record id is a no-op.
        store.delete(&bob, &alice_tag.id).unwrap();
        assert!(store.get(&alice, &alice_tag.id).unwrap().is_some());

        store.delete(&alice, &alice_tag.id).unwrap();
        assert!(store.get(&alice, &alice_tag.id).unwrap().is_none());
        assert!(store.get(&bob, &bob_tag.id).unwrap().is_some());
    }
}
