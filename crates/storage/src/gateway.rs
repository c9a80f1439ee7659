//! The configured object-storage gateway.

use crate::client::StorageClient;
use crate::config::StorageConfig;
use crate::keys;
use crate::{ObjectStore, StorageError};

/// Object-storage gateway; disabled when no credentials were configured.
#[derive(Debug)]
pub struct StorageGateway {
    client: Option<StorageClient>,
}

impl StorageGateway {
    /// Configure the gateway from the environment.
    ///
    /// Missing endpoint or key yields a disabled gateway and a warning; this
    /// is never fatal.
    pub fn from_env() -> Self {
        match StorageConfig::from_env() {
            Some(config) => Self::from_config(config),
            None => {
                tracing::warn!("Object storage credentials not found; remote storage disabled");
                Self::disabled()
            }
        }
    }

    /// Build an enabled gateway, falling back to disabled if the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: StorageConfig) -> Self {
        let bucket = config.bucket.clone();
        match StorageClient::new(config) {
            Ok(client) => {
                tracing::info!(bucket = %bucket, "Object storage client initialized");
                Self {
                    client: Some(client),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize object storage client");
                Self::disabled()
            }
        }
    }

    /// A gateway that refuses every operation.
    pub fn disabled() -> Self {
        Self { client: None }
    }

    fn client(&self) -> Result<&StorageClient, StorageError> {
        self.client.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[async_trait::async_trait]
impl ObjectStore for StorageGateway {
    fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<String, StorageError> {
        let client = self.client()?;
        let key = keys::object_key(folder, file_name);
        let content_type = keys::content_type_for(file_name);
        let size = bytes.len();

        client.put_object(&key, bytes, content_type).await?;

        let url = client.public_url(&key);
        tracing::info!(%url, size, content_type, "File uploaded");
        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let client = self.client()?;
        let key = keys::extract_object_key(url)
            .ok_or_else(|| StorageError::InvalidUrl(url.to_string()))?;

        client.remove_objects(&[key]).await?;

        tracing::info!(%url, "File deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
