//! Repository for the `team_members` table.

use lookbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{CreateTeamMember, NewRosterMember, TeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, view_url, created_at, updated_at";

/// Provides create/read/reset operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// Insert a new team member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeamMember) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, title, view_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.view_url)
            .fetch_one(pool)
            .await
    }

    /// Find a team member by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all team members in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY id ASC");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// Replace every team member (and, by cascade, every gallery image) with
    /// `roster`, in one transaction. Returns the number of members removed.
    ///
    /// If any insert fails, nothing is deleted.
    pub async fn replace_all(
        pool: &PgPool,
        roster: &[NewRosterMember],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM team_members")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        for entry in roster {
            let member_id: DbId = sqlx::query_scalar(
                "INSERT INTO team_members (name, title, view_url)
                 VALUES ($1, $2, $3)
                 RETURNING id",
            )
            .bind(&entry.member.name)
            .bind(&entry.member.title)
            .bind(&entry.member.view_url)
            .fetch_one(&mut *tx)
            .await?;

            for image in &entry.images {
                sqlx::query(
                    "INSERT INTO member_images (team_member_id, image_file, sort_order)
                     VALUES ($1, $2, $3)",
                )
                .bind(member_id)
                .bind(&image.image_file)
                .bind(image.sort_order)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(removed)
    }
}
