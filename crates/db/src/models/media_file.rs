//! Media file models and DTOs.

use lookbook_core::error::CoreError;
use lookbook_core::media::MediaType;
use lookbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaFile {
    pub id: DbId,
    pub name: String,
    /// One of `image`, `video`, `logo` (enforced by a CHECK constraint).
    pub media_type: String,
    pub file_url: Option<String>,
    pub file_path: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MediaFile {
    /// Parsed `media_type` column.
    pub fn media_type(&self) -> Result<MediaType, CoreError> {
        MediaType::from_name(&self.media_type)
    }
}

/// DTO for creating a new media file.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaFile {
    pub name: String,
    pub media_type: String,
    pub file_url: Option<String>,
    pub file_path: Option<String>,
    /// Defaults to an empty string if omitted.
    pub description: Option<String>,
}
