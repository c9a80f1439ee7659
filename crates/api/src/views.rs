//! JSON projections returned by the read API.
//!
//! Every projection takes the request origin explicitly so that local
//! fallback URLs can be made absolute without any request-global state.

use lookbook_core::media::MediaType;
use lookbook_core::types::DbId;
use lookbook_core::urls::{self, LocalRoute, ResolvedUrl};
use lookbook_db::models::media_file::MediaFile;
use lookbook_db::models::team_member::{MemberImage, TeamMember};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Team members
// ---------------------------------------------------------------------------

/// One gallery image with its resolved public URL.
#[derive(Debug, Serialize)]
pub struct GalleryImageView {
    pub id: DbId,
    pub image_url: ResolvedUrl,
    pub sort_order: i32,
}

/// A team member with its gallery in display order.
#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub view_url: String,
    pub images: Vec<GalleryImageView>,
}

/// Compact shape consumed by the front-end card carousel.
#[derive(Debug, Serialize)]
pub struct CardData {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub images: Vec<String>,
    #[serde(rename = "viewUrl")]
    pub view_url: String,
}

pub fn gallery_image_view(image: &MemberImage, origin: Option<&str>) -> GalleryImageView {
    GalleryImageView {
        id: image.id,
        image_url: urls::resolve(
            image.image_url.as_deref(),
            image.image_file.as_deref(),
            LocalRoute::Gallery,
            origin,
        ),
        sort_order: image.sort_order,
    }
}

/// `images` must already be in gallery order.
pub fn team_member_view(
    member: TeamMember,
    images: &[MemberImage],
    origin: Option<&str>,
) -> TeamMemberView {
    TeamMemberView {
        id: member.id,
        name: member.name,
        title: member.title,
        view_url: member.view_url,
        images: images
            .iter()
            .map(|image| gallery_image_view(image, origin))
            .collect(),
    }
}

/// Unresolved images are left out of the flat URL list.
pub fn card_data(
    member: TeamMember,
    images: &[MemberImage],
    origin: Option<&str>,
) -> CardData {
    CardData {
        id: member.id,
        name: member.name,
        title: member.title,
        images: images
            .iter()
            .filter_map(|image| gallery_image_view(image, origin).image_url.into_option())
            .collect(),
        view_url: member.view_url,
    }
}

// ---------------------------------------------------------------------------
// Media files
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MediaFileView {
    pub id: DbId,
    pub name: String,
    pub media_type: String,
    pub file_url: ResolvedUrl,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct MediaListEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: ResolvedUrl,
    pub description: String,
}

/// Resolve a media file's URL. A row whose category cannot be parsed has no
/// legacy route, so only its remote URL can be used.
pub fn media_file_url(file: &MediaFile, origin: Option<&str>) -> ResolvedUrl {
    match file.media_type() {
        Ok(media_type) => resolve_media(file, media_type, origin),
        Err(e) => {
            tracing::warn!(
                media_file_id = file.id,
                media_type = %file.media_type,
                error = %e,
                "Media file has an unknown category",
            );
            match file.file_url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() => ResolvedUrl::Resolved(url.to_string()),
                _ => ResolvedUrl::Unresolved,
            }
        }
    }
}

fn resolve_media(file: &MediaFile, media_type: MediaType, origin: Option<&str>) -> ResolvedUrl {
    urls::resolve(
        file.file_url.as_deref(),
        file.file_path.as_deref(),
        LocalRoute::Media(media_type),
        origin,
    )
}

pub fn media_file_view(file: MediaFile, origin: Option<&str>) -> MediaFileView {
    let file_url = media_file_url(&file, origin);
    MediaFileView {
        id: file.id,
        name: file.name,
        media_type: file.media_type,
        file_url,
        description: file.description,
    }
}

pub fn media_list_entry(file: MediaFile, origin: Option<&str>) -> MediaListEntry {
    let url = media_file_url(&file, origin);
    MediaListEntry {
        name: file.name,
        media_type: file.media_type,
        url,
        description: file.description,
    }
}
