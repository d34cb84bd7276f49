//! Object storage trait definition.

use async_trait::async_trait;

use super::StorageError;

/// Binary object storage addressed by relative path keys.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `path`, replacing any existing object, and return
    /// a publicly resolvable URL for it.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Delete the object at `path`.
    ///
    /// Returns `Err(StorageError::NotFound)` if nothing is stored there.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;
}
