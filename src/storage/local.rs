//! Local filesystem object store.
//!
//! Each bucket is a directory under the root and each key a relative path
//! inside it. Used by the CLI and by tests; production uses `S3Storage`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result, s3_uri};
use crate::storage::ObjectStore;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a bucket and key.
    ///
    /// Keys may not climb out of their bucket directory.
    fn path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let escapes = Path::new(bucket)
            .components()
            .chain(relative.components())
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if bucket.is_empty() || key.is_empty() || escapes {
            return Err(AppError::storage(s3_uri(bucket, key), "invalid bucket or key"));
        }
        Ok(self.root_dir.join(bucket).join(relative))
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.ensure_dir(path).await?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.path(bucket, key)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::storage(s3_uri(bucket, key), e))
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let path = self.path(bucket, key)?;
        self.write_bytes(&path, &body)
            .await
            .map_err(|e| AppError::storage(s3_uri(bucket, key), e))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage
            .put_object("dst", "output/doc_es.json", b"{\"a\": 1}".to_vec())
            .await
            .unwrap();

        let path = dir.path().join("dst/output/doc_es.json");
        assert!(path.exists());
        assert!(!dir.path().join("dst/output/doc_es.json.tmp").exists());

        let body = storage.get_object("dst", "output/doc_es.json").await.unwrap();
        assert_eq!(body, b"{\"a\": 1}");
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.put_object("b", "k.json", b"old".to_vec()).await.unwrap();
        storage.put_object("b", "k.json", b"new".to_vec()).await.unwrap();

        assert_eq!(storage.get_object("b", "k.json").await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_missing_object_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.get_object("src", "in/none.json").await.unwrap_err();
        assert!(matches!(err, AppError::Storage { .. }));
        assert!(err.to_string().contains("s3://src/in/none.json"));
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(storage.put_object("b", "../x.json", b"x".to_vec()).await.is_err());
        assert!(storage.put_object("b", "/etc/x.json", b"x".to_vec()).await.is_err());
        assert!(storage.get_object("..", "x.json").await.is_err());
        assert!(storage.get_object("b", "").await.is_err());
    }
}
