//! In-memory object store for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ObjectStore, StorageError};

/// HashMap-backed [`ObjectStore`]. Used by integration tests to exercise
/// the upload/delete paths without a real bucket.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    public_base_url: String,
}

impl MemoryStore {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an object exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        self.objects.lock().unwrap().insert(key.to_string(), bytes);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_round_trip() {
        let store = MemoryStore::new("http://localhost/store");
        store.put("a.glb", vec![1, 2, 3], None).await.unwrap();
        assert_eq!(store.get("a.glb").await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryStore::new("http://localhost/store");
        assert!(matches!(
            store.get("missing").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new("http://localhost/store");
        store.put("a.glb", vec![0], None).await.unwrap();
        store.delete("a.glb").await.unwrap();
        store.delete("a.glb").await.unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let store = MemoryStore::new("http://localhost/store/");
        assert_eq!(store.public_url("k.glb"), "http://localhost/store/k.glb");
    }
}
