//! Team member models and DTOs.
//!
//! Covers two related tables:
//! - `team_members` -- profile shown on a card
//! - `member_images` -- ordered gallery images owned by a member

use lookbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// TeamMember
// ---------------------------------------------------------------------------

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub view_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub title: String,
    pub view_url: String,
}

/// A member and its gallery, written together by [`TeamMemberRepo::replace_all`].
///
/// [`TeamMemberRepo::replace_all`]: crate::repositories::TeamMemberRepo::replace_all
#[derive(Debug, Clone)]
pub struct NewRosterMember {
    pub member: CreateTeamMember,
    pub images: Vec<NewRosterImage>,
}

/// A legacy gallery file and its display position.
#[derive(Debug, Clone)]
pub struct NewRosterImage {
    pub image_file: String,
    pub sort_order: i32,
}

// ---------------------------------------------------------------------------
// MemberImage
// ---------------------------------------------------------------------------

/// A row from the `member_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberImage {
    pub id: DbId,
    pub team_member_id: DbId,
    /// Object-storage URL, set once the image has been migrated.
    pub image_url: Option<String>,
    /// Legacy file reference relative to the media root.
    pub image_file: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gallery image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberImage {
    pub team_member_id: DbId,
    pub image_url: Option<String>,
    pub image_file: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// A gallery image joined with its owner's name, as walked by the
/// migration job.
#[derive(Debug, Clone, FromRow)]
pub struct MemberImageWithOwner {
    pub id: DbId,
    pub team_member_id: DbId,
    pub member_name: String,
    pub image_url: Option<String>,
    pub image_file: Option<String>,
    pub sort_order: i32,
}
