//! Handlers for the `/team-members` resource and its card-data projection.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use lookbook_core::error::CoreError;
use lookbook_core::types::DbId;
use lookbook_db::models::team_member::{MemberImage, TeamMember};
use lookbook_db::repositories::{MemberImageRepo, TeamMemberRepo};

use crate::error::{AppError, AppResult};
use crate::origin::RequestOrigin;
use crate::state::AppState;
use crate::views::{self, CardData, TeamMemberView};

/// Load every member together with its gallery, in listing order.
async fn load_members_with_images(
    state: &AppState,
) -> AppResult<Vec<(TeamMember, Vec<MemberImage>)>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = members.iter().map(|m| m.id).collect();

    let mut galleries: HashMap<DbId, Vec<MemberImage>> = HashMap::new();
    for image in MemberImageRepo::list_for_members(&state.pool, &ids).await? {
        galleries.entry(image.team_member_id).or_default().push(image);
    }

    Ok(members
        .into_iter()
        .map(|member| {
            let images = galleries.remove(&member.id).unwrap_or_default();
            (member, images)
        })
        .collect())
}

/// GET /api/team-members
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> AppResult<Json<Vec<TeamMemberView>>> {
    let members = load_members_with_images(&state).await?;
    let views = members
        .into_iter()
        .map(|(member, images)| views::team_member_view(member, &images, origin.as_deref()))
        .collect();
    Ok(Json(views))
}

/// GET /api/team-members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    origin: RequestOrigin,
) -> AppResult<Json<TeamMemberView>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;
    let images = MemberImageRepo::list_by_member(&state.pool, id).await?;
    Ok(Json(views::team_member_view(member, &images, origin.as_deref())))
}

/// GET /api/team-members/card-data (also mounted at /api/card-data)
pub async fn card_data(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> AppResult<Json<Vec<CardData>>> {
    let members = load_members_with_images(&state).await?;
    let cards = members
        .into_iter()
        .map(|(member, images)| views::card_data(member, &images, origin.as_deref()))
        .collect();
    Ok(Json(cards))
}
