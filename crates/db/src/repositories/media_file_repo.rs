//! Repository for the `media_files` table.

use lookbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::media_file::{CreateMediaFile, MediaFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, media_type, file_url, file_path, description, created_at, updated_at";

/// Provides operations for auxiliary media files.
pub struct MediaFileRepo;

impl MediaFileRepo {
    /// Insert a media file unless its name is already taken.
    ///
    /// Returns `None` when a row with the same name exists (in any category).
    /// If `description` is `None`, defaults to an empty string.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateMediaFile,
    ) -> Result<Option<MediaFile>, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_files (name, media_type, file_url, file_path, description)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''))
             ON CONFLICT ON CONSTRAINT uq_media_files_name DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaFile>(&query)
            .bind(&input.name)
            .bind(&input.media_type)
            .bind(&input.file_url)
            .bind(&input.file_path)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Whether a media file with exactly this name and category exists.
    pub async fn exists_by_name_and_type(
        pool: &PgPool,
        name: &str,
        media_type: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM media_files WHERE name = $1 AND media_type = $2)",
        )
        .bind(name)
        .bind(media_type)
        .fetch_one(pool)
        .await
    }

    /// Find a media file by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_files WHERE id = $1");
        sqlx::query_as::<_, MediaFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all media files in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_files ORDER BY id ASC");
        sqlx::query_as::<_, MediaFile>(&query).fetch_all(pool).await
    }

    /// Record the remote URL of a migrated media file.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_file_url(
        pool: &PgPool,
        id: DbId,
        file_url: &str,
    ) -> Result<Option<MediaFile>, sqlx::Error> {
        let query = format!(
            "UPDATE media_files SET file_url = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaFile>(&query)
            .bind(id)
            .bind(file_url)
            .fetch_optional(pool)
            .await
    }
}
