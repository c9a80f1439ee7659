//! Object keys, content types and public-URL parsing.

use std::path::Path;

/// Path segment that separates the service endpoint from
/// `<bucket>/<key>` in a public object URL.
pub const PUBLIC_PATH_MARKER: &str = "/storage/v1/object/public/";

/// Content type sent with uploads whose extension is not recognised.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type for an upload, keyed on the file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "pdf" => "application/pdf",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// Fresh object key inside `folder`: a random UUID plus the original
/// file's extension, so equal source names never collide.
pub fn object_key(folder: &str, file_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    let folder = folder.trim_matches('/');
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{folder}/{id}.{ext}"),
        None => format!("{folder}/{id}"),
    }
}

/// Public URL of `key` in `bucket`.
pub fn public_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}{PUBLIC_PATH_MARKER}{bucket}/{key}",
        endpoint.trim_end_matches('/')
    )
}

/// Object key (without bucket) embedded in a public URL.
///
/// Returns `None` when the marker is missing or nothing follows the bucket.
pub fn extract_object_key(url: &str) -> Option<String> {
    let (_, after_marker) = url.split_once(PUBLIC_PATH_MARKER)?;
    let without_query = after_marker.split(['?', '#']).next().unwrap_or_default();
    let (_bucket, key) = without_query.split_once('/')?;
    let key = key.trim_matches('/');
    (!key.is_empty()).then(|| key.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_follow_extension() {
        assert_eq!(content_type_for("1.jpg"), "image/jpeg");
        assert_eq!(content_type_for("2.JPG"), "image/jpeg");
        assert_eq!(content_type_for("logo.png"), "image/png");
        assert_eq!(content_type_for("intro.MOV"), "video/quicktime");
        assert_eq!(content_type_for("brief.pdf"), "application/pdf");
        assert_eq!(content_type_for("archive.zip"), FALLBACK_CONTENT_TYPE);
        assert_eq!(content_type_for("noext"), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn keys_keep_folder_and_extension() {
        let key = object_key("fashion-images", "1.JPG");
        let (folder, name) = key.split_once('/').unwrap();
        assert_eq!(folder, "fashion-images");
        assert!(name.ends_with(".JPG"));
        assert_eq!(name.len(), 36 + 4);
    }

    #[test]
    fn keys_never_collide_for_equal_names() {
        assert_ne!(object_key("media-images", "1.jpg"), object_key("media-images", "1.jpg"));
    }

    #[test]
    fn key_without_extension_is_bare_uuid() {
        let key = object_key("/media-logos/", "LOGO");
        assert!(key.starts_with("media-logos/"));
        assert_eq!(key.len(), "media-logos/".len() + 36);
    }

    #[test]
    fn public_url_round_trips_through_extraction() {
        let url = public_url("https://s.example.co/", "fashion-images", "media-videos/a.mp4");
        assert_eq!(
            url,
            "https://s.example.co/storage/v1/object/public/fashion-images/media-videos/a.mp4"
        );
        assert_eq!(extract_object_key(&url).as_deref(), Some("media-videos/a.mp4"));
    }

    #[test]
    fn extraction_ignores_query_string() {
        let url = "https://s/storage/v1/object/public/b/fashion-images/x.jpg?";
        assert_eq!(extract_object_key(url).as_deref(), Some("fashion-images/x.jpg"));
    }

    #[test]
    fn extraction_fails_without_marker_or_key() {
        assert_eq!(extract_object_key("https://cdn.example.com/b/x.jpg"), None);
        assert_eq!(extract_object_key("https://s/storage/v1/object/public/bucket"), None);
        assert_eq!(extract_object_key("https://s/storage/v1/object/public/bucket/"), None);
    }
}
