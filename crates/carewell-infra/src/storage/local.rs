//! Local filesystem image store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use carewell_core::ports::{ImageStore, StorageError};

/// Where uploads are written and how they are addressed publicly.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the files are written to.
    pub upload_dir: PathBuf,
    /// URL prefix the directory is served under.
    pub public_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("public/uploads"),
            public_prefix: "/uploads".to_string(),
        }
    }
}

/// Writes each upload to `upload_dir/<uuid>.<ext>`.
pub struct LocalImageStore {
    config: StorageConfig,
}

impl LocalImageStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Generated file name: random UUID plus the original extension, if any.
    fn file_name_for(original_name: &str) -> String {
        let id = Uuid::new_v4();
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                ext.chars()
                    .filter(char::is_ascii_alphanumeric)
                    .collect::<String>()
                    .to_ascii_lowercase()
            })
            .filter(|ext| !ext.is_empty());

        match extension {
            Some(ext) => format!("{id}.{ext}"),
            None => id.to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        if bytes.is_empty() {
            return Err(StorageError::Empty);
        }

        tokio::fs::create_dir_all(&self.config.upload_dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let file_name = Self::file_name_for(original_name);
        let path = self.config.upload_dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Stored uploaded image");

        Ok(format!(
            "{}/{}",
            self.config.public_prefix.trim_end_matches('/'),
            file_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> LocalImageStore {
        LocalImageStore::new(StorageConfig {
            upload_dir: dir.join("uploads"),
            public_prefix: "/uploads/".to_string(),
        })
    }

    #[tokio::test]
    async fn test_store_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let url = store.store("Cover Photo.PNG", b"\x89PNG").await.unwrap();

        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));
        let file_name = url.trim_start_matches("/uploads/");
        let written = std::fs::read(dir.path().join("uploads").join(file_name)).unwrap();
        assert_eq!(written, b"\x89PNG");
    }

    #[tokio::test]
    async fn test_store_generates_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let a = store.store("a.jpg", b"a").await.unwrap();
        let b = store.store("a.jpg", b"b").await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_store_rejects_empty_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let result = store.store("empty.png", b"").await;
        assert!(matches!(result, Err(StorageError::Empty)));
    }

    #[test]
    fn test_file_name_without_extension() {
        let name = LocalImageStore::file_name_for("README");
        assert!(!name.contains('.'));
        assert!(Uuid::parse_str(&name).is_ok());
    }
}
