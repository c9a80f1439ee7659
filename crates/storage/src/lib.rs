//! Object-storage gateway.
//!
//! Wraps an external REST object-storage service behind the [`ObjectStore`]
//! trait. The concrete [`StorageGateway`] is configured from the environment
//! and degrades to a disabled state when credentials are missing, in which
//! case every call fails fast with [`StorageError::Unavailable`].

use std::path::Path;

pub mod client;
pub mod config;
pub mod gateway;
pub mod keys;

pub use client::StorageClient;
pub use config::StorageConfig;
pub use gateway::StorageGateway;

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The gateway is disabled because endpoint or access key is missing.
    #[error("Object storage is not configured")]
    Unavailable,

    /// The URL does not point at an object in the configured store.
    #[error("Cannot extract an object key from URL '{0}'")]
    InvalidUrl(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service returned a non-2xx status code.
    #[error("Storage service error ({status}): {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Reading the local source file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upload/delete surface used by the API and the batch jobs.
///
/// Constructed once at process start and shared as `Arc<dyn ObjectStore>`.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Whether uploads and deletes can be attempted at all.
    fn is_enabled(&self) -> bool;

    /// Store `bytes` under a fresh key inside `folder` and return the
    /// object's public URL. The key's extension and content type are taken
    /// from `file_name`.
    async fn upload(&self, bytes: Vec<u8>, file_name: &str, folder: &str)
        -> Result<String, StorageError>;

    /// Delete the object behind a public URL returned by [`ObjectStore::upload`].
    async fn delete(&self, url: &str) -> Result<(), StorageError>;

    /// Read a local file and upload its contents.
    async fn upload_path(
        &self,
        path: &Path,
        file_name: &str,
        folder: &str,
    ) -> Result<String, StorageError> {
        if !self.is_enabled() {
            return Err(StorageError::Unavailable);
        }
        let bytes = tokio::fs::read(path).await?;
        self.upload(bytes, file_name, folder).await
    }
}
