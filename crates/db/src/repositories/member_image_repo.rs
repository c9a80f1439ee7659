//! Repository for the `member_images` table.

use lookbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{CreateMemberImage, MemberImage, MemberImageWithOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, team_member_id, image_url, image_file, sort_order, created_at, updated_at";

/// Gallery order: display order first, then insertion order for ties.
const GALLERY_ORDER: &str = "sort_order ASC, id ASC";

/// Provides operations for team-member gallery images.
pub struct MemberImageRepo;

impl MemberImageRepo {
    /// Insert a new gallery image, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to `0`.
    pub async fn create(pool: &PgPool, input: &CreateMemberImage) -> Result<MemberImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO member_images (team_member_id, image_url, image_file, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MemberImage>(&query)
            .bind(input.team_member_id)
            .bind(&input.image_url)
            .bind(&input.image_file)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List one member's gallery in display order.
    pub async fn list_by_member(
        pool: &PgPool,
        team_member_id: DbId,
    ) -> Result<Vec<MemberImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM member_images
             WHERE team_member_id = $1
             ORDER BY {GALLERY_ORDER}"
        );
        sqlx::query_as::<_, MemberImage>(&query)
            .bind(team_member_id)
            .fetch_all(pool)
            .await
    }

    /// List the galleries of several members in one query, grouped by member
    /// and in display order within each group.
    pub async fn list_for_members(
        pool: &PgPool,
        team_member_ids: &[DbId],
    ) -> Result<Vec<MemberImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM member_images
             WHERE team_member_id = ANY($1)
             ORDER BY team_member_id ASC, {GALLERY_ORDER}"
        );
        sqlx::query_as::<_, MemberImage>(&query)
            .bind(team_member_ids)
            .fetch_all(pool)
            .await
    }

    /// List every gallery image together with its owner's name.
    pub async fn list_with_owners(pool: &PgPool) -> Result<Vec<MemberImageWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, MemberImageWithOwner>(
            "SELECT i.id, i.team_member_id, m.name AS member_name,
                    i.image_url, i.image_file, i.sort_order
             FROM member_images i
             JOIN team_members m ON m.id = i.team_member_id
             ORDER BY i.team_member_id ASC, i.sort_order ASC, i.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Record the remote URL of a migrated image.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_image_url(
        pool: &PgPool,
        id: DbId,
        image_url: &str,
    ) -> Result<Option<MemberImage>, sqlx::Error> {
        let query = format!(
            "UPDATE member_images SET image_url = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MemberImage>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }
}
