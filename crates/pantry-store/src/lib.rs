//! Storage layer for the pantry backend.
//!
//! ## Architecture
//!
//! ```text
//! OwnedEntityStore<V>      ← ownership-scoped CRUD, keys {owner}:{record_id}
//! EntityStore<K, V>        ← typed entity CRUD with generic keys
//!     ↓
//! StorageBackend           ← generic K/V operations over named partitions
//!     ↓
//! RocksDB / in-memory      ← actual storage implementation
//! ```
//!
//! Partitions map to RocksDB column families in production and to ordered
//! maps in the in-memory test backend.

pub mod entity_store;
pub mod key_encoding;
pub mod owned_store;
pub mod rocksdb_impl;
pub mod storage_trait;
pub mod test_utils;

pub use entity_store::EntityStore;
pub use owned_store::OwnedEntityStore;
pub use rocksdb_impl::RocksDbBackend;
pub use storage_trait::{Operation, Partition, StorageBackend, StorageError};
