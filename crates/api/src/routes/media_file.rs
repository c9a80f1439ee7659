//! Route definitions for the `/media-files` resource.
//!
//! Trailing-slash and `media_list` forms are aliases kept for the front-end.

use axum::routing::get;
use axum::Router;

use crate::handlers::media_file;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media-files", get(media_file::list))
        .route("/media-files/", get(media_file::list))
        .route("/media-files/media-list", get(media_file::media_list))
        .route("/media-files/media-list/", get(media_file::media_list))
        .route("/media-files/media_list", get(media_file::media_list))
        .route("/media-files/media_list/", get(media_file::media_list))
        .route("/media-files/{id}", get(media_file::get_by_id))
        .route("/media-files/{id}/", get(media_file::get_by_id))
}
