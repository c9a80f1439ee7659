//! Handlers for the `/media-files` resource.

use axum::extract::{Path, State};
use axum::Json;
use lookbook_core::error::CoreError;
use lookbook_core::types::DbId;
use lookbook_db::repositories::MediaFileRepo;

use crate::error::{AppError, AppResult};
use crate::origin::RequestOrigin;
use crate::state::AppState;
use crate::views::{self, MediaFileView, MediaListEntry};

/// GET /api/media-files
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> AppResult<Json<Vec<MediaFileView>>> {
    let files = MediaFileRepo::list(&state.pool).await?;
    Ok(Json(
        files
            .into_iter()
            .map(|file| views::media_file_view(file, origin.as_deref()))
            .collect(),
    ))
}

/// GET /api/media-files/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    origin: RequestOrigin,
) -> AppResult<Json<MediaFileView>> {
    let file = MediaFileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MediaFile",
            id,
        }))?;
    Ok(Json(views::media_file_view(file, origin.as_deref())))
}

/// GET /api/media-files/media-list
pub async fn media_list(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> AppResult<Json<Vec<MediaListEntry>>> {
    let files = MediaFileRepo::list(&state.pool).await?;
    Ok(Json(
        files
            .into_iter()
            .map(|file| views::media_list_entry(file, origin.as_deref()))
            .collect(),
    ))
}
