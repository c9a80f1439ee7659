pub mod health;
pub mod legacy_media;
pub mod media_file;
pub mod team_member;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /team-members                     list with galleries
/// /team-members/card-data           card-data projection
/// /team-members/{id}                get
///
/// /card-data                        card-data projection (alias)
///
/// /media-files                      list
/// /media-files/media-list           compact list
/// /media-files/{id}                 get
/// ```
///
/// Every path also answers with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(team_member::router())
        .route("/card-data", get(handlers::team_member::card_data))
        .route("/card-data/", get(handlers::team_member::card_data))
        .merge(media_file::router())
}
