//! Clean-up rules for stored local file references.
//!
//! Older rows carry paths written by buggy uploads (`media/media/...`, or
//! gallery images stored under arbitrary directories). These helpers turn a
//! stored reference into the path that is actually looked up under the media
//! root. They are idempotent on well-formed references.

use crate::media::GALLERY_DIR;

/// Final path component of a stored reference, or `None` if it is empty.
pub fn file_name(stored: &str) -> Option<&str> {
    stored
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Gallery images always live directly under `images/`, whatever directory
/// the stored reference mentions.
pub fn normalize_gallery_path(stored: &str) -> Option<String> {
    file_name(stored).map(|name| format!("{GALLERY_DIR}/{name}"))
}

/// Strip a duplicated `media/` prefix from a media file reference.
pub fn normalize_media_path(stored: &str) -> String {
    let trimmed = stored.trim_start_matches('/');
    trimmed
        .strip_prefix("media/media/")
        .or_else(|| trimmed.strip_prefix("media/"))
        .unwrap_or(trimmed)
        .to_string()
}

/// Whether `segment` is a single path component that cannot escape its
/// parent directory.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
