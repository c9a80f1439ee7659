//! Serving of legacy files from the local media root.
//!
//! Records that were never migrated to object storage still point at files
//! under `MEDIA_ROOT`. These handlers stream them with long-lived caching.

use std::path::PathBuf;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{self, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use lookbook_core::media::{extension_lowercase, GALLERY_DIR};
use lookbook_core::paths::is_safe_segment;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Legacy files never change in place.
const CACHE_CONTROL_VALUE: &str = "public, max-age=31536000";

/// Content type served for a legacy file name.
pub fn content_type_for_extension(file_name: &str) -> &'static str {
    match extension_lowercase(file_name).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// `<media_root>/<category>/<filename>`, or `None` if either segment could
/// leave its directory.
fn legacy_path(state: &AppState, category: &str, filename: &str) -> Option<PathBuf> {
    if !is_safe_segment(category) || !is_safe_segment(filename) {
        return None;
    }
    Some(state.config.media_root.join(category).join(filename))
}

async fn stream_file(path: Option<PathBuf>, filename: &str) -> AppResult<Response> {
    let not_found = || AppError::NotFound(format!("File '{filename}' not found"));
    let path = path.ok_or_else(not_found)?;

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(AppError::InternalError(e.to_string())),
    };
    let metadata = file
        .metadata()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    tracing::debug!(path = %path.display(), size = metadata.len(), "Serving legacy file");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for_extension(filename))
        .header(header::CONTENT_LENGTH, metadata.len())
        .header(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE))
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// GET /media/{category}/{filename}
pub async fn serve_media(
    State(state): State<AppState>,
    Path((category, filename)): Path<(String, String)>,
) -> AppResult<Response> {
    let path = legacy_path(&state, &category, &filename);
    stream_file(path, &filename).await
}

/// GET /images/{filename}
pub async fn serve_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let path = legacy_path(&state, GALLERY_DIR, &filename);
    stream_file(path, &filename).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_follow_extension() {
        assert_eq!(content_type_for_extension("1.JPG"), "image/jpeg");
        assert_eq!(content_type_for_extension("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for_extension("logo.png"), "image/png");
        assert_eq!(content_type_for_extension("anim.gif"), "image/gif");
        assert_eq!(content_type_for_extension("intro.mp4"), "video/mp4");
        assert_eq!(content_type_for_extension("clip.mov"), "application/octet-stream");
        assert_eq!(content_type_for_extension("README"), "application/octet-stream");
    }
}
