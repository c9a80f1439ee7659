//! REST client for the object-storage HTTP API.
//!
//! Speaks the `storage/v1` object API: uploads are `POST`ed to
//! `/storage/v1/object/{bucket}/{key}` and deletions go through
//! `DELETE /storage/v1/object/{bucket}` with a list of key prefixes.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::StorageConfig;
use crate::keys;
use crate::StorageError;

/// HTTP client bound to one endpoint, key and bucket.
pub struct StorageClient {
    client: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Public URL for `key` in the configured bucket.
    pub fn public_url(&self, key: &str) -> String {
        keys::public_url(&self.config.endpoint, &self.config.bucket, key)
    }

    /// Upload `bytes` under `key` with the given content type.
    pub async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .post(format!(
                "{}/storage/v1/object/{}/{key}",
                self.config.endpoint, self.config.bucket
            ))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.access_key))
            .header("apikey", &self.config.access_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Remove the objects stored under `keys`.
    pub async fn remove_objects(&self, keys: &[String]) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(format!(
                "{}/storage/v1/object/{}",
                self.config.endpoint, self.config.bucket
            ))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.access_key))
            .header("apikey", &self.config.access_key)
            .json(&serde_json::json!({ "prefixes": keys }))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or turn it into a
    /// [`StorageError::Service`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorageError::Service {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl std::fmt::Debug for StorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient")
            .field("endpoint", &self.config.endpoint)
            .field("bucket", &self.config.bucket)
            .finish_non_exhaustive()
    }
}
