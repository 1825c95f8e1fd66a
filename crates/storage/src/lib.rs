//! Object store abstraction.
//!
//! Uploaded model files live in an external object store. [`ObjectStore`]
//! is the provider trait; [`s3::S3Store`] is the production backend and
//! [`memory::MemoryStore`] backs the API integration tests.

pub mod memory;
pub mod s3;

pub use memory::MemoryStore;
pub use s3::S3Store;

use async_trait::async_trait;

/// Errors from an object store backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A bucket-scoped object store.
///
/// Keys are flat (no `/`); public URLs are `<public base>/<key>`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write an object. Overwrites any existing object under `key`.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// Read an object's bytes.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Delete an object. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL an anonymous client can fetch the object from.
    fn public_url(&self, key: &str) -> String;
}
