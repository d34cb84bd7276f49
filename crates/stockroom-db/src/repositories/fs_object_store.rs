//! Local filesystem implementation of the `ObjectStore` trait.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use stockroom_core::{ObjectStore, StorageError};

/// Stores objects as files under a root directory.
///
/// Keys are relative `/`-separated paths. URLs are `file://` URLs of the
/// stored file unless a public base URL is configured, in which case they
/// are `{base}/{key}`.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
    public_base_url: Option<String>,
}

impl FsObjectStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            public_base_url: None,
        }
    }

    /// Serve URLs from `base_url` instead of `file://` paths.
    #[must_use]
    pub fn with_public_base_url(mut self, base_url: Option<String>) -> Self {
        self.public_base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to a file under the root.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidPath(key.to_string()));
        }
        let relative = Path::new(key);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(StorageError::InvalidPath(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn url_for(&self, key: &str, file: &Path) -> Result<String, StorageError> {
        if let Some(base) = &self.public_base_url {
            return Ok(format!("{base}/{key}"));
        }
        let absolute = tokio::fs::canonicalize(file)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(format!("file://{}", absolute.display()))
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let file = self.resolve(path)?;
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        tokio::fs::write(&file, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        debug!(key = path, bytes = bytes.len(), "Stored object");
        self.url_for(path, &file).await
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let file = self.resolve(path)?;
        match tokio::fs::remove_file(&file).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path.to_string()));
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        }

        // Drop the per-product directory once it is empty
        if let Some(parent) = file.parent() {
            if parent != self.root && tokio::fs::remove_dir(parent).await.is_ok() {
                debug!(dir = %parent.display(), "Removed empty object directory");
            }
        }

        debug!(key = path, "Deleted object");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_upload_writes_file_and_returns_file_url() {
        let temp = TempDir::new().unwrap();
        let store = FsObjectStore::new(temp.path());

        let url = store
            .upload("products/p1/1_cat.png", b"meow")
            .await
            .unwrap();

        let file = temp.path().join("products/p1/1_cat.png");
        assert_eq!(std::fs::read(&file).unwrap(), b"meow");
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("products/p1/1_cat.png"));
    }

    #[tokio::test]
    async fn test_public_base_url_prefixes_key() {
        let temp = TempDir::new().unwrap();
        let store = FsObjectStore::new(temp.path())
            .with_public_base_url(Some("https://cdn.example.com/img/".to_string()));

        let url = store.upload("products/p1/1_a.png", b"x").await.unwrap();
        assert_eq!(url, "https://cdn.example.com/img/products/p1/1_a.png");
    }

    #[tokio::test]
    async fn test_upload_overwrites_existing_object() {
        let temp = TempDir::new().unwrap();
        let store = FsObjectStore::new(temp.path());

        store.upload("a.png", b"one").await.unwrap();
        store.upload("a.png", b"two").await.unwrap();

        assert_eq!(std::fs::read(temp.path().join("a.png")).unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_delete_removes_file_and_empty_directory() {
        let temp = TempDir::new().unwrap();
        let store = FsObjectStore::new(temp.path());
        store.upload("products/p1/1_a.png", b"x").await.unwrap();

        store.delete("products/p1/1_a.png").await.unwrap();

        assert!(!temp.path().join("products/p1/1_a.png").exists());
        assert!(!temp.path().join("products/p1").exists());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FsObjectStore::new(temp.path());

        assert!(matches!(
            store.delete("products/nope.png").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_keys_escaping_the_root() {
        let temp = TempDir::new().unwrap();
        let store = FsObjectStore::new(temp.path());

        for key in ["", "../evil.png", "products/../../evil.png", "/etc/passwd"] {
            assert!(
                matches!(
                    store.upload(key, b"x").await,
                    Err(StorageError::InvalidPath(_))
                ),
                "key {key:?} should be rejected"
            );
        }
    }
}
