//! Batch jobs for the lookbook catalog.
//!
//! - [`migrate`]: move legacy local files into object storage.
//! - [`seed`]: populate media files and team members from the media root.
//! - [`delete_object`]: remove a previously uploaded object.
//!
//! Every job writes operator-facing lines to a caller-supplied writer so the
//! binary can print them and tests can capture them.

use lookbook_storage::{ObjectStore, StorageError};

pub mod cli;
pub mod migrate;
pub mod roster;
pub mod seed;

/// Errors that abort a whole job run.
///
/// Per-record problems never surface here; they are counted in the job's
/// summary instead.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// Pre-flight failure: no storage credentials are configured.
    #[error("Object storage is not configured; set STORAGE_URL and STORAGE_KEY")]
    StorageDisabled,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The roster file is unreadable or malformed.
    #[error("Invalid roster: {0}")]
    Roster(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Delete the object behind a public URL returned by an earlier upload.
pub async fn delete_object(
    store: &dyn ObjectStore,
    url: &str,
    out: &mut impl std::io::Write,
) -> Result<(), JobError> {
    if !store.is_enabled() {
        return Err(JobError::StorageDisabled);
    }
    store.delete(url).await?;
    writeln!(out, "Deleted object: {url}")?;
    Ok(())
}
