//! RocksDB implementation of the StorageBackend trait.
//!
//! Maps partitions to RocksDB column families. The database is opened once
//! at bootstrap with the full partition set; missing column families are
//! created by the open call, never afterwards.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{ColumnFamily, Direction, IteratorMode, Options, WriteBatch, DB};

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};

/// RocksDB-backed storage.
pub struct RocksDbBackend {
    db: Arc<DB>,
}

impl RocksDbBackend {
    /// Opens (or creates) a database at `path` with the given partitions.
    pub fn open(path: &Path, partitions: &[&str]) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, path, partitions)
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Wraps an already-open database handle.
    pub fn new(db: Arc<DB>) -> Self {
        Self { db }
    }

    fn cf(&self, partition: &Partition) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))
    }
}

impl StorageBackend for RocksDbBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf = self.cf(partition)?;
        self.db.get_cf(cf, key).map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let cf = self.cf(partition)?;
        self.db
            .put_cf(cf, key, value)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let cf = self.cf(partition)?;
        self.db
            .delete_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn batch(&self, operations: Vec<Operation>) -> Result<()> {
        let mut batch = WriteBatch::default();

        for op in operations {
            match op {
                Operation::Put { partition, key, value } => {
                    let cf = self.cf(&partition)?;
                    batch.put_cf(cf, key, value);
                }
                Operation::Delete { partition, key } => {
                    let cf = self.cf(&partition)?;
                    batch.delete_cf(cf, key);
                }
            }
        }

        self.db.write(batch).map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let cf = self.cf(partition)?;

        let mode = match prefix {
            Some(p) => IteratorMode::From(p, Direction::Forward),
            None => IteratorMode::Start,
        };

        let mut results = Vec::new();
        for entry in self.db.iterator_cf(cf, mode) {
            let (key, value) = entry.map_err(|e| StorageError::IoError(e.to_string()))?;
            if let Some(p) = prefix {
                if !key.starts_with(p) {
                    break;
                }
            }
            results.push((key.to_vec(), value.to_vec()));
            if let Some(limit) = limit {
                if results.len() >= limit {
                    break;
                }
            }
        }

        Ok(results)
    }

    fn partition_exists(&self, partition: &Partition) -> bool {
        self.db.cf_handle(partition.name()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_backend() -> (RocksDbBackend, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = RocksDbBackend::open(temp_dir.path(), &["test_cf"]).unwrap();
        (backend, temp_dir)
    }

    #[test]
    fn test_put_and_get() {
        let (backend, _temp) = create_backend();
        let partition = Partition::new("test_cf");

        backend.put(&partition, b"key1", b"value1").unwrap();
        let value = backend.get(&partition, b"key1").unwrap();

        assert_eq!(value, Some(b"value1".to_vec()));
    }

    #[test]
    fn test_missing_partition() {
        let (backend, _temp) = create_backend();
        let partition = Partition::new("nope");

        assert!(!backend.partition_exists(&partition));
        assert!(matches!(
            backend.get(&partition, b"key1"),
            Err(StorageError::PartitionNotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let (backend, _temp) = create_backend();
        let partition = Partition::new("test_cf");

        backend.put(&partition, b"key1", b"value1").unwrap();
        backend.delete(&partition, b"key1").unwrap();

        assert_eq!(backend.get(&partition, b"key1").unwrap(), None);
    }

    #[test]
    fn test_batch_operations() {
        let (backend, _temp) = create_backend();
        let partition = Partition::new("test_cf");

        let ops = vec![
            Operation::Put {
                partition: partition.clone(),
                key: b"key1".to_vec(),
                value: b"value1".to_vec(),
            },
            Operation::Put {
                partition: partition.clone(),
                key: b"key2".to_vec(),
                value: b"value2".to_vec(),
            },
            Operation::Delete {
                partition: partition.clone(),
                key: b"key1".to_vec(),
            },
        ];

        backend.batch(ops).unwrap();

        assert_eq!(backend.get(&partition, b"key1").unwrap(), None);
        assert_eq!(backend.get(&partition, b"key2").unwrap(), Some(b"value2".to_vec()));
    }

    #[test]
    fn test_scan_with_prefix() {
        let (backend, _temp) = create_backend();
        let partition = Partition::new("test_cf");

        backend.put(&partition, b"user:1", b"value1").unwrap();
        backend.put(&partition, b"user:2", b"value2").unwrap();
        backend.put(&partition, b"admin:1", b"value3").unwrap();

        let results = backend.scan(&partition, Some(b"user:"), None).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_scan_with_limit() {
        let (backend, _temp) = create_backend();
        let partition = Partition::new("test_cf");

        backend.put(&partition, b"key1", b"value1").unwrap();
        backend.put(&partition, b"key2", b"value2").unwrap();
        backend.put(&partition, b"key3", b"value3").unwrap();

        let results = backend.scan(&partition, None, Some(2)).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let partition = Partition::new("test_cf");

        {
            let backend = RocksDbBackend::open(temp_dir.path(), &["test_cf"]).unwrap();
            backend.put(&partition, b"key1", b"value1").unwrap();
        }

        let backend = RocksDbBackend::open(temp_dir.path(), &["test_cf"]).unwrap();
        assert_eq!(backend.get(&partition, b"key1").unwrap(), Some(b"value1".to_vec()));
    }
}
