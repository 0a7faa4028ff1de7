//! Test utilities for pantry-store.
//!
//! Provides an in-memory `StorageBackend` for unit and API tests, and a
//! tempdir-backed RocksDB wrapper for tests that need the real engine.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::Result;
use tempfile::TempDir;

use crate::rocksdb_impl::RocksDbBackend;
use crate::storage_trait::{Operation, Partition, StorageBackend, StorageError};

/// In-memory storage backend.
///
/// Partitions are `BTreeMap`s so scans come back in ascending key order,
/// matching RocksDB iteration. Partitions are created lazily on first
/// write; reads from unknown partitions behave as empty rather than
/// erroring, which keeps test setup minimal.
pub struct InMemoryBackend {
    partitions: RwLock<HashMap<String, BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            partitions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for InMemoryBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        let partitions = self
            .partitions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(partitions
            .get(partition.name())
            .and_then(|map| map.get(key).cloned()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        partitions
            .entry(partition.name().to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<(), StorageError> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        if let Some(map) = partitions.get_mut(partition.name()) {
            map.remove(key);
        }
        Ok(())
    }

    fn batch(&self, operations: Vec<Operation>) -> Result<(), StorageError> {
        // One write lock for the whole batch keeps it atomic with respect
        // to concurrent readers.
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        for op in operations {
            match op {
                Operation::Put { partition, key, value } => {
                    partitions
                        .entry(partition.name().to_string())
                        .or_default()
                        .insert(key, value);
                }
                Operation::Delete { partition, key } => {
                    if let Some(map) = partitions.get_mut(partition.name()) {
                        map.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }

    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StorageError> {
        let partitions = self
            .partitions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        let Some(map) = partitions.get(partition.name()) else {
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for (key, value) in map.iter() {
            if let Some(p) = prefix {
                if !key.starts_with(p) {
                    continue;
                }
            }
            results.push((key.clone(), value.clone()));
            if let Some(limit) = limit {
                if results.len() >= limit {
                    break;
                }
            }
        }
        Ok(results)
    }

    fn partition_exists(&self, partition: &Partition) -> bool {
        self.partitions
            .read()
            .map(|p| p.contains_key(partition.name()))
            .unwrap_or(false)
    }
}

/// Test database wrapper that cleans up its files on drop.
pub struct TestDb {
    pub backend: RocksDbBackend,
    pub path: PathBuf,
    #[allow(dead_code)]
    temp_dir: TempDir,
}

impl TestDb {
    /// Opens a fresh RocksDB in a temp directory with the given partitions.
    pub fn new(partitions: &[&str]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        let backend = RocksDbBackend::open(&path, partitions)?;
        Ok(Self {
            backend,
            path,
            temp_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_scan_is_ordered() {
        let backend = InMemoryBackend::new();
        let partition = Partition::new("p");

        backend.put(&partition, b"b", b"2").unwrap();
        backend.put(&partition, b"a", b"1").unwrap();
        backend.put(&partition, b"c", b"3").unwrap();

        let keys: Vec<_> = backend
            .scan(&partition, None, None)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_in_memory_scan_unknown_partition_is_empty() {
        let backend = InMemoryBackend::new();
        assert!(backend.scan(&Partition::new("nope"), None, None).unwrap().is_empty());
    }

    #[test]
    fn test_test_db_opens_partitions() {
        let db = TestDb::new(&["tags", "recipes"]).unwrap();
        assert!(db.backend.partition_exists(&Partition::new("tags")));
        assert!(db.backend.partition_exists(&Partition::new("recipes")));
    }
}
