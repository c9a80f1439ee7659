//! Storage configuration loaded from the environment.

use std::time::Duration;

/// Bucket used when `STORAGE_BUCKET` is not set.
pub const DEFAULT_BUCKET: &str = "fashion-images";

/// Default per-request timeout for the storage HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the object-storage service.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Service base URL, e.g. `https://project.example.co`.
    pub endpoint: String,
    /// Access key sent as bearer token and `apikey` header.
    pub access_key: String,
    /// Target bucket name.
    pub bucket: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Fallback               | Default          |
    /// |------------------------|------------------------|------------------|
    /// | `STORAGE_URL`          | `SUPABASE_URL`         | (required)       |
    /// | `STORAGE_KEY`          | `SUPABASE_ANON_KEY`    | (required)       |
    /// | `STORAGE_BUCKET`       | `SUPABASE_BUCKET_NAME` | `fashion-images` |
    /// | `STORAGE_TIMEOUT_SECS` |                        | `60`             |
    ///
    /// Returns `None` when the endpoint or the access key is missing.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StorageConfig::from_env`] but reading from an arbitrary
    /// key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let read = |primary: &str, legacy: &str| {
            lookup(primary)
                .or_else(|| lookup(legacy))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let endpoint = read("STORAGE_URL", "SUPABASE_URL")?;
        let access_key = read("STORAGE_KEY", "SUPABASE_ANON_KEY")?;
        let bucket =
            read("STORAGE_BUCKET", "SUPABASE_BUCKET_NAME").unwrap_or_else(|| DEFAULT_BUCKET.into());
        let timeout_secs = lookup("STORAGE_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key,
            bucket,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
