#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lookbook_core::types::DbId;
use lookbook_db::models::media_file::{CreateMediaFile, MediaFile};
use lookbook_db::models::team_member::{CreateMemberImage, CreateTeamMember, TeamMember};
use lookbook_db::repositories::{MediaFileRepo, MemberImageRepo, TeamMemberRepo};
use lookbook_storage::StorageGateway;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use lookbook_api::config::ServerConfig;
use lookbook_api::routes;
use lookbook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        media_root: media_root.to_path_buf(),
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs`. Storage is disabled:
/// the read API never uploads.
pub fn build_test_app_with_root(pool: PgPool, media_root: &Path) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config(media_root)),
        storage: Arc::new(StorageGateway::disabled()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::legacy_media::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Router with a media root that does not exist.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_root(pool, &PathBuf::from("/nonexistent-media-root"))
}

/// Send a GET request without a `Host` header.
pub async fn get(app: Router, uri: &str) -> Response {
    get_with_headers(app, uri, &[]).await
}

pub async fn get_with_headers(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_member(pool: &PgPool, name: &str) -> TeamMember {
    TeamMemberRepo::create(
        pool,
        &CreateTeamMember {
            name: name.to_string(),
            title: "Creative Designer".to_string(),
            view_url: format!("/designer/{}", name.to_lowercase().replace(' ', "-")),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_image(
    pool: &PgPool,
    team_member_id: DbId,
    image_url: Option<&str>,
    image_file: Option<&str>,
    sort_order: i32,
) -> DbId {
    MemberImageRepo::create(
        pool,
        &CreateMemberImage {
            team_member_id,
            image_url: image_url.map(String::from),
            image_file: image_file.map(String::from),
            sort_order: Some(sort_order),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_media(
    pool: &PgPool,
    name: &str,
    media_type: &str,
    file_url: Option<&str>,
    file_path: Option<&str>,
) -> MediaFile {
    MediaFileRepo::create_if_absent(
        pool,
        &CreateMediaFile {
            name: name.to_string(),
            media_type: media_type.to_string(),
            file_url: file_url.map(String::from),
            file_path: file_path.map(String::from),
            description: Some(format!("{media_type} {name}")),
        },
    )
    .await
    .unwrap()
    .unwrap()
}
