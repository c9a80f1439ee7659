//! Seed jobs that populate the catalog from files under the media root.

use std::io::Write;
use std::path::Path;

use lookbook_core::media::{MediaType, GALLERY_DIR};
use lookbook_db::models::media_file::CreateMediaFile;
use lookbook_db::models::team_member::{CreateTeamMember, NewRosterImage, NewRosterMember};
use lookbook_db::repositories::{MediaFileRepo, TeamMemberRepo};
use lookbook_db::DbPool;

use crate::roster::RosterEntry;
use crate::JobError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedMediaReport {
    pub created: usize,
    /// Already present with the same name and category.
    pub existing: usize,
    /// Name already used by a different category.
    pub conflicts: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedMembersReport {
    pub removed: u64,
    pub members: usize,
    pub images: usize,
    pub missing_images: usize,
}

/// Sorted names of regular files in `dir` accepted by `media_type`.
///
/// A missing directory yields an empty list.
async fn seedable_files(dir: &Path, media_type: MediaType) -> Result<Vec<String>, JobError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        // Non-UTF-8 names cannot be stored.
        if let Ok(name) = entry.file_name().into_string() {
            if media_type.accepts(&name) {
                names.push(name);
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Create a media file row for every seedable file not yet recorded.
///
/// Categories are scanned logos first, then videos, then images.
pub async fn seed_media(
    pool: &DbPool,
    media_root: &Path,
    out: &mut impl Write,
) -> Result<SeedMediaReport, JobError> {
    let mut report = SeedMediaReport::default();

    for media_type in MediaType::SEED_ORDER {
        let dir_name = media_type.directory();
        for name in seedable_files(&media_root.join(dir_name), media_type).await? {
            if MediaFileRepo::exists_by_name_and_type(pool, &name, media_type.name()).await? {
                report.existing += 1;
                continue;
            }

            let input = CreateMediaFile {
                name: name.clone(),
                media_type: media_type.name().to_string(),
                file_url: None,
                file_path: Some(format!("{dir_name}/{name}")),
                description: Some(media_type.seed_description(&name)),
            };
            match MediaFileRepo::create_if_absent(pool, &input).await? {
                Some(_) => {
                    report.created += 1;
                    writeln!(out, "Created {media_type}: {name}")?;
                }
                None => {
                    report.conflicts += 1;
                    tracing::warn!(%name, %media_type, "Media file name already used by another category");
                    writeln!(out, "Skipped {media_type} {name}: name already used by another category")?;
                }
            }
        }
    }

    writeln!(
        out,
        "Seeded media files: {} created, {} already present, {} conflicts",
        report.created, report.existing, report.conflicts
    )?;
    Ok(report)
}

/// Replace every team member with the roster.
///
/// Images whose file is missing from the gallery directory are skipped; the
/// remaining ones keep their roster position as sort order. The reset and
/// every insert commit together, so a failed insert leaves the previous
/// members in place.
pub async fn seed_members(
    pool: &DbPool,
    media_root: &Path,
    roster: &[RosterEntry],
    out: &mut impl Write,
) -> Result<SeedMembersReport, JobError> {
    let gallery_dir = media_root.join(GALLERY_DIR);
    let mut report = SeedMembersReport::default();
    let mut members = Vec::with_capacity(roster.len());

    for entry in roster {
        let mut images = Vec::with_capacity(entry.images.len());
        for (position, image_name) in entry.images.iter().enumerate() {
            let found = tokio::fs::metadata(gallery_dir.join(image_name))
                .await
                .is_ok_and(|meta| meta.is_file());
            if !found {
                report.missing_images += 1;
                tracing::warn!(member = %entry.name, image = %image_name, "Roster image not found");
                writeln!(out, "Warning: image {image_name} for {} not found", entry.name)?;
                continue;
            }

            let sort_order = i32::try_from(position)
                .map_err(|_| JobError::Roster(format!("too many images for '{}'", entry.name)))?;
            images.push(NewRosterImage {
                image_file: format!("{GALLERY_DIR}/{image_name}"),
                sort_order,
            });
        }

        members.push(NewRosterMember {
            member: CreateTeamMember {
                name: entry.name.clone(),
                title: entry.title.clone(),
                view_url: entry.view_url.clone(),
            },
            images,
        });
    }

    report.removed = TeamMemberRepo::replace_all(pool, &members).await?;
    tracing::info!(removed = report.removed, "Replaced team members");

    for member in &members {
        report.members += 1;
        for image in &member.images {
            report.images += 1;
            writeln!(out, "Created image {} for {}", image.image_file, member.member.name)?;
        }
    }

    writeln!(
        out,
        "Seeded {} team members with {} images ({} missing)",
        report.members, report.images, report.missing_images
    )?;
    Ok(report)
}
