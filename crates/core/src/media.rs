//! Media categories for auxiliary media files.
//!
//! Provides the fixed `image | video | logo` category enum together with the
//! per-category directory names, upload folders and seed allow-lists.

use std::path::Path;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Remote folder that gallery images are uploaded into.
pub const GALLERY_UPLOAD_FOLDER: &str = "fashion-images";

/// Local directory (under the media root) holding gallery images.
pub const GALLERY_DIR: &str = "images";

/// Valid `media_type` column values.
pub const VALID_MEDIA_TYPES: &[&str] = &["image", "video", "logo"];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];
const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

/// Category of a media file, matching the `media_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Image,
    Video,
    Logo,
}

impl MediaType {
    /// Categories in the order seed jobs scan them.
    pub const SEED_ORDER: [MediaType; 3] = [Self::Logo, Self::Video, Self::Image];

    /// Parse from the database `media_type` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "logo" => Ok(Self::Logo),
            other => Err(CoreError::Validation(format!(
                "Unknown media type '{other}'. Must be one of: {VALID_MEDIA_TYPES:?}"
            ))),
        }
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Logo => "logo",
        }
    }

    /// Directory under the media root that holds files of this category.
    pub fn directory(self) -> &'static str {
        match self {
            Self::Image => GALLERY_DIR,
            Self::Video => "videos",
            Self::Logo => "logos",
        }
    }

    /// Remote folder for uploads, e.g. `media-videos`.
    pub fn upload_folder(self) -> &'static str {
        match self {
            Self::Image => "media-images",
            Self::Video => "media-videos",
            Self::Logo => "media-logos",
        }
    }

    /// Lower-case file extensions the seed job picks up for this category.
    pub fn seed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Video => VIDEO_EXTENSIONS,
            Self::Logo => LOGO_EXTENSIONS,
        }
    }

    /// Whether `file_name` carries one of this category's seed extensions.
    pub fn accepts(self, file_name: &str) -> bool {
        extension_lowercase(file_name)
            .is_some_and(|ext| self.seed_extensions().contains(&ext.as_str()))
    }

    /// Description stored on rows created by the seed job.
    pub fn seed_description(self, file_name: &str) -> String {
        match self {
            Self::Image => format!("Fashion image: {file_name}"),
            Self::Video => format!("Video file: {file_name}"),
            Self::Logo => format!("Logo file: {file_name}"),
        }
    }

    /// Whether files of this category are candidates for recompression.
    pub fn is_compressible(self) -> bool {
        matches!(self, Self::Image)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-cased extension of `file_name` without the dot.
pub fn extension_lowercase(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
