//! Public URL resolution for gallery images and media files.
//!
//! A record may carry a remote (object-storage) URL, a legacy local file
//! reference, both, or neither. [`resolve`] turns those two optional fields
//! into a single [`ResolvedUrl`]: the remote URL always wins; otherwise the
//! local file is exposed through the legacy file-serving routes.

use serde::{Serialize, Serializer};

use crate::media::{MediaType, GALLERY_DIR};
use crate::paths;

/// Outcome of resolving a record's public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedUrl {
    /// A URL the client can fetch.
    Resolved(String),
    /// Neither a remote URL nor a usable local file is recorded.
    Unresolved,
}

impl ResolvedUrl {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Resolved(url) => Some(url),
            Self::Unresolved => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Resolved(url) => Some(url),
            Self::Unresolved => None,
        }
    }
}

/// Serializes as the URL string, or `null` when unresolved.
impl Serialize for ResolvedUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Resolved(url) => serializer.serialize_str(url),
            Self::Unresolved => serializer.serialize_none(),
        }
    }
}

/// Which legacy route serves a record's local file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalRoute {
    /// Team-member gallery images: `/media/images/<file>`.
    Gallery,
    /// Media files: `/media/<category dir>/<file>`.
    Media(MediaType),
}

impl LocalRoute {
    fn directory(self) -> &'static str {
        match self {
            Self::Gallery => GALLERY_DIR,
            Self::Media(media_type) => media_type.directory(),
        }
    }
}

/// Legacy route path for a stored local reference, without any origin.
///
/// The file name is percent-encoded as a single path segment.
pub fn local_path(route: LocalRoute, local_ref: &str) -> Option<String> {
    paths::file_name(local_ref).map(|name| {
        format!("/media/{}/{}", route.directory(), urlencoding::encode(name))
    })
}

/// Resolve the public URL for a record.
///
/// `origin` is the request's `<scheme>://<host>`; when given, local-fallback
/// paths are made absolute with it.
pub fn resolve(
    remote: Option<&str>,
    local: Option<&str>,
    route: LocalRoute,
    origin: Option<&str>,
) -> ResolvedUrl {
    if let Some(url) = remote.map(str::trim).filter(|url| !url.is_empty()) {
        return ResolvedUrl::Resolved(url.to_string());
    }

    match local.and_then(|local_ref| local_path(route, local_ref)) {
        Some(path) => match origin {
            Some(origin) => ResolvedUrl::Resolved(format!("{}{path}", origin.trim_end_matches('/'))),
            None => ResolvedUrl::Resolved(path),
        },
        None => ResolvedUrl::Unresolved,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
