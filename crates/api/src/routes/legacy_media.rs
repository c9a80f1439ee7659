//! Legacy file routes, mounted at the root (not under `/api`).

use axum::routing::get;
use axum::Router;

use crate::handlers::legacy_media;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media/{category}/{filename}", get(legacy_media::serve_media))
        .route("/images/{filename}", get(legacy_media::serve_image))
}
