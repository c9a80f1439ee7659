//! Route definitions for the `/team-members` resource.
//!
//! ```text
//! GET /team-members               list
//! GET /team-members/card-data     card_data
//! GET /team-members/{id}          get_by_id
//! ```
//!
//! Each path is also mounted with a trailing slash, and card data under
//! `card_data`, which are the URLs the existing front-end requests.

use axum::routing::get;
use axum::Router;

use crate::handlers::team_member;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/team-members", get(team_member::list))
        .route("/team-members/", get(team_member::list))
        .route("/team-members/card-data", get(team_member::card_data))
        .route("/team-members/card-data/", get(team_member::card_data))
        .route("/team-members/card_data", get(team_member::card_data))
        .route("/team-members/card_data/", get(team_member::card_data))
        .route("/team-members/{id}", get(team_member::get_by_id))
        .route("/team-members/{id}/", get(team_member::get_by_id))
}
