use async_trait::async_trait;

/// Durable storage for uploaded images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` under a generated name derived from `original_name`'s
    /// extension and return the public path of the stored file.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// Image storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Empty upload")]
    Empty,

    #[error("Write failed: {0}")]
    Io(String),
}
