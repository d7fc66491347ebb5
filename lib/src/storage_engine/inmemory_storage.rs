// lib/src/storage_engine/inmemory_storage.rs

use std::collections::{BTreeMap, HashMap};
use async_trait::async_trait;
use tokio::sync::Mutex as TokioMutex;
use log::info;
use models::errors::MedResult;

use crate::storage_engine::StorageEngine;

type Tree = BTreeMap<Vec<u8>, Vec<u8>>;

/// Volatile engine backing tests and local mode. BTreeMap per tree so that
/// prefix scans come back in key order, matching the sled engine.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    trees: TokioMutex<HashMap<String, Tree>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl StorageEngine for InMemoryStorage {
    async fn connect(&self) -> MedResult<()> {
        Ok(())
    }

    async fn insert(&self, tree: &str, key: &[u8], value: Vec<u8>) -> MedResult<()> {
        let mut trees = self.trees.lock().await;
        trees.entry(tree.to_string()).or_default().insert(key.to_vec(), value);
        Ok(())
    }

    async fn retrieve(&self, tree: &str, key: &[u8]) -> MedResult<Option<Vec<u8>>> {
        let trees = self.trees.lock().await;
        Ok(trees.get(tree).and_then(|t| t.get(key).cloned()))
    }

    async fn delete(&self, tree: &str, key: &[u8]) -> MedResult<()> {
        let mut trees = self.trees.lock().await;
        if let Some(t) = trees.get_mut(tree) {
            t.remove(key);
        }
        Ok(())
    }

    async fn scan_prefix(&self, tree: &str, prefix: &[u8]) -> MedResult<Vec<(Vec<u8>, Vec<u8>)>> {
        let trees = self.trees.lock().await;
        let Some(t) = trees.get(tree) else {
            return Ok(Vec::new());
        };
        Ok(t.range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    async fn compare_and_swap(
        &self,
        tree: &str,
        key: &[u8],
        expected: Option<Vec<u8>>,
        new: Option<Vec<u8>>,
    ) -> MedResult<bool> {
        // The whole map is behind one lock, so check-then-act is atomic here.
        let mut trees = self.trees.lock().await;
        let t = trees.entry(tree.to_string()).or_default();
        if t.get(key).cloned() != expected {
            return Ok(false);
        }
        match new {
            Some(value) => {
                t.insert(key.to_vec(), value);
            }
            None => {
                t.remove(key);
            }
        }
        Ok(true)
    }

    async fn flush(&self) -> MedResult<()> {
        Ok(())
    }

    fn engine_type(&self) -> &'static str {
        "in-memory"
    }
}

impl Drop for InMemoryStorage {
    fn drop(&mut self) {
        info!("InMemoryStorage dropped; all data discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::{index_key, index_scan_prefix};

    #[tokio::test]
    async fn insert_retrieve_delete_round_trip() {
        let engine = InMemoryStorage::new();
        engine.insert("users", b"ann@x.com", b"record".to_vec()).await.unwrap();
        assert_eq!(
            engine.retrieve("users", b"ann@x.com").await.unwrap(),
            Some(b"record".to_vec())
        );
        engine.delete("users", b"ann@x.com").await.unwrap();
        assert_eq!(engine.retrieve("users", b"ann@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn scan_prefix_is_bounded_and_ordered() {
        let engine = InMemoryStorage::new();
        engine
            .insert("idx", &index_key("ann@x.com", "b"), vec![2])
            .await
            .unwrap();
        engine
            .insert("idx", &index_key("ann@x.com", "a"), vec![1])
            .await
            .unwrap();
        engine
            .insert("idx", &index_key("bob@x.com", "a"), vec![3])
            .await
            .unwrap();

        let entries = engine
            .scan_prefix("idx", &index_scan_prefix("ann@x.com"))
            .await
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, vec![1]);
        assert_eq!(entries[1].1, vec![2]);
    }

    #[tokio::test]
    async fn compare_and_swap_rejects_stale_expectation() {
        let engine = InMemoryStorage::new();
        assert!(engine
            .compare_and_swap("t", b"k", None, Some(b"v1".to_vec()))
            .await
            .unwrap());
        // Second conditional insert against None must lose.
        assert!(!engine
            .compare_and_swap("t", b"k", None, Some(b"v2".to_vec()))
            .await
            .unwrap());
        assert!(engine
            .compare_and_swap("t", b"k", Some(b"v1".to_vec()), Some(b"v2".to_vec()))
            .await
            .unwrap());
        assert_eq!(engine.retrieve("t", b"k").await.unwrap(), Some(b"v2".to_vec()));
    }
}
