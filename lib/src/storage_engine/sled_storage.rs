// lib/src/storage_engine/sled_storage.rs

use std::fmt;
use std::path::Path;
use async_trait::async_trait;
use log::info;
use sled::Db;
use models::errors::{MedResult, MedTrackError};

use crate::storage_engine::StorageEngine;

/// Durable engine over a single sled database, one tree per logical table.
/// Conditional writes ride on sled's native compare_and_swap.
pub struct SledStorage {
    db: Db,
}

impl fmt::Debug for SledStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SledStorage").finish_non_exhaustive()
    }
}

impl SledStorage {
    pub fn open(path: &Path) -> MedResult<Self> {
        let db = sled::open(path)
            .map_err(|e| MedTrackError::StoreUnavailable(format!("failed to open sled at {}: {}", path.display(), e)))?;
        info!("SledStorage opened at {}", path.display());
        Ok(SledStorage { db })
    }

    fn tree(&self, name: &str) -> MedResult<sled::Tree> {
        self.db
            .open_tree(name)
            .map_err(|e| MedTrackError::StoreUnavailable(e.to_string()))
    }
}

#[async_trait]
impl StorageEngine for SledStorage {
    async fn connect(&self) -> MedResult<()> {
        // Opening the Db is the connection; nothing further to do.
        Ok(())
    }

    async fn insert(&self, tree: &str, key: &[u8], value: Vec<u8>) -> MedResult<()> {
        self.tree(tree)?.insert(key, value)?;
        Ok(())
    }

    async fn retrieve(&self, tree: &str, key: &[u8]) -> MedResult<Option<Vec<u8>>> {
        Ok(self.tree(tree)?.get(key)?.map(|ivec| ivec.to_vec()))
    }

    async fn delete(&self, tree: &str, key: &[u8]) -> MedResult<()> {
        self.tree(tree)?.remove(key)?;
        Ok(())
    }

    async fn scan_prefix(&self, tree: &str, prefix: &[u8]) -> MedResult<Vec<(Vec<u8>, Vec<u8>)>> {
        let tree = self.tree(tree)?;
        let mut entries = Vec::new();
        for item in tree.scan_prefix(prefix) {
            let (k, v) = item?;
            entries.push((k.to_vec(), v.to_vec()));
        }
        Ok(entries)
    }

    async fn compare_and_swap(
        &self,
        tree: &str,
        key: &[u8],
        expected: Option<Vec<u8>>,
        new: Option<Vec<u8>>,
    ) -> MedResult<bool> {
        let outcome = self
            .tree(tree)?
            .compare_and_swap(key, expected.as_deref(), new)?;
        Ok(outcome.is_ok())
    }

    async fn flush(&self) -> MedResult<()> {
        self.db
            .flush_async()
            .await
            .map_err(|e| MedTrackError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }

    fn engine_type(&self) -> &'static str {
        "sled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sled_round_trip_and_cas() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SledStorage::open(dir.path()).unwrap();

        engine.insert("users", b"ann@x.com", b"r1".to_vec()).await.unwrap();
        assert_eq!(
            engine.retrieve("users", b"ann@x.com").await.unwrap(),
            Some(b"r1".to_vec())
        );

        assert!(!engine
            .compare_and_swap("users", b"ann@x.com", None, Some(b"r2".to_vec()))
            .await
            .unwrap());
        assert!(engine
            .compare_and_swap("users", b"ann@x.com", Some(b"r1".to_vec()), Some(b"r2".to_vec()))
            .await
            .unwrap());
        engine.flush().await.unwrap();
    }
}
