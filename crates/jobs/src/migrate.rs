//! Migration of legacy local files into object storage.
//!
//! Records are processed one at a time. A record that already has a remote
//! URL is skipped unless forced; otherwise its local file is located under
//! the media root, optionally recompressed, uploaded, and the returned URL is
//! written back. Per-record failures are printed and counted, never fatal.

use std::io::Write;
use std::path::Path;

use lookbook_core::compression::{self, BYTES_PER_MB, DEFAULT_MAX_SIZE_MB};
use lookbook_core::media::GALLERY_UPLOAD_FOLDER;
use lookbook_core::migration::{
    format_megabytes, should_skip, MigrationOutcome, MigrationSummary,
};
use lookbook_core::paths;
use lookbook_core::types::DbId;
use lookbook_db::models::media_file::MediaFile;
use lookbook_db::models::team_member::MemberImageWithOwner;
use lookbook_db::repositories::{MediaFileRepo, MemberImageRepo};
use lookbook_db::DbPool;
use lookbook_storage::ObjectStore;

use crate::JobError;

/// Flags of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationOptions {
    pub dry_run: bool,
    pub force: bool,
    pub compress: bool,
    /// Compression threshold and target size.
    pub max_bytes: u64,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            force: false,
            compress: false,
            max_bytes: DEFAULT_MAX_SIZE_MB * BYTES_PER_MB,
        }
    }
}

/// Which record kinds a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationScope {
    All,
    GalleryImages,
    MediaFiles,
}

impl MigrationScope {
    fn includes_gallery(self) -> bool {
        matches!(self, Self::All | Self::GalleryImages)
    }

    fn includes_media(self) -> bool {
        matches!(self, Self::All | Self::MediaFiles)
    }
}

/// Per-section summaries of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub gallery_images: MigrationSummary,
    pub media_files: MigrationSummary,
}

impl MigrationReport {
    pub fn total(&self) -> MigrationSummary {
        let mut total = self.gallery_images;
        total.merge(self.media_files);
        total
    }
}

/// A record ready for the shared locate/compress/upload steps.
struct Candidate {
    label: String,
    /// Relative to the media root, already normalized.
    local: Option<String>,
    /// Name the upload is keyed on.
    upload_name: Option<String>,
    folder: &'static str,
    compressible: bool,
}

/// Either a final outcome or an uploaded URL that still has to be persisted.
enum UploadStep {
    Done(MigrationOutcome),
    Uploaded { url: String, size_bytes: u64 },
}

/// Runs migrations against one database and one object store.
pub struct Migrator<'a> {
    pool: &'a DbPool,
    store: &'a dyn ObjectStore,
    media_root: &'a Path,
    options: MigrationOptions,
}

impl std::fmt::Debug for Migrator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migrator")
            .field("media_root", &self.media_root)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> Migrator<'a> {
    /// Fails with [`JobError::StorageDisabled`] when the store cannot upload,
    /// before any record has been read.
    pub fn new(
        pool: &'a DbPool,
        store: &'a dyn ObjectStore,
        media_root: &'a Path,
        options: MigrationOptions,
    ) -> Result<Self, JobError> {
        if !store.is_enabled() {
            return Err(JobError::StorageDisabled);
        }
        Ok(Self {
            pool,
            store,
            media_root,
            options,
        })
    }

    /// Migrate the sections selected by `scope` and print the combined totals.
    pub async fn run(
        &self,
        scope: MigrationScope,
        out: &mut impl Write,
    ) -> Result<MigrationReport, JobError> {
        if self.options.dry_run {
            writeln!(out, "DRY RUN MODE - no files will be uploaded")?;
        }

        let mut report = MigrationReport::default();
        if scope.includes_gallery() {
            report.gallery_images = self.migrate_gallery_images(out).await?;
        }
        if scope.includes_media() {
            report.media_files = self.migrate_media_files(out).await?;
        }

        writeln!(out, "Migration completed: {}", report.total())?;
        tracing::info!(
            migrated = report.total().migrated,
            skipped = report.total().skipped,
            errors = report.total().errors,
            "Migration run finished",
        );
        Ok(report)
    }

    pub async fn migrate_gallery_images(
        &self,
        out: &mut impl Write,
    ) -> Result<MigrationSummary, JobError> {
        writeln!(out, "Migrating gallery images...")?;
        let images = MemberImageRepo::list_with_owners(self.pool).await?;

        let mut summary = MigrationSummary::default();
        for image in &images {
            let outcome = self.migrate_gallery_image(image).await;
            let label = format!(
                "{} - Image {} (#{})",
                image.member_name, image.sort_order, image.id
            );
            report_outcome(out, &label, &outcome)?;
            summary.record(&outcome);
        }

        writeln!(out, "Gallery image migration summary: {summary}")?;
        Ok(summary)
    }

    pub async fn migrate_media_files(
        &self,
        out: &mut impl Write,
    ) -> Result<MigrationSummary, JobError> {
        writeln!(out, "Migrating media files...")?;
        let files = MediaFileRepo::list(self.pool).await?;

        let mut summary = MigrationSummary::default();
        for file in &files {
            let outcome = self.migrate_media_file(file).await;
            let label = format!("{} (#{})", file.name, file.id);
            report_outcome(out, &label, &outcome)?;
            summary.record(&outcome);
        }

        writeln!(out, "Media file migration summary: {summary}")?;
        Ok(summary)
    }

    async fn migrate_gallery_image(&self, image: &MemberImageWithOwner) -> MigrationOutcome {
        if should_skip(image.image_url.as_deref(), self.options.force) {
            return MigrationOutcome::Skipped;
        }

        let local = image.image_file.as_deref().and_then(paths::normalize_gallery_path);
        let candidate = Candidate {
            label: image.member_name.clone(),
            upload_name: local.as_deref().and_then(paths::file_name).map(String::from),
            local,
            folder: GALLERY_UPLOAD_FOLDER,
            compressible: true,
        };

        match self.upload(&candidate).await {
            UploadStep::Done(outcome) => outcome,
            UploadStep::Uploaded { url, size_bytes } => {
                let persisted = MemberImageRepo::set_image_url(self.pool, image.id, &url)
                    .await
                    .map(|row| row.is_some());
                persisted_outcome(persisted, "MemberImage", image.id, url, size_bytes)
            }
        }
    }

    async fn migrate_media_file(&self, file: &MediaFile) -> MigrationOutcome {
        if should_skip(file.file_url.as_deref(), self.options.force) {
            return MigrationOutcome::Skipped;
        }

        let media_type = match file.media_type() {
            Ok(media_type) => media_type,
            Err(e) => {
                return MigrationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let stored = file
            .file_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        let candidate = Candidate {
            label: file.name.clone(),
            local: stored.map(paths::normalize_media_path),
            upload_name: stored.and_then(paths::file_name).map(String::from),
            folder: media_type.upload_folder(),
            compressible: media_type.is_compressible(),
        };

        match self.upload(&candidate).await {
            UploadStep::Done(outcome) => outcome,
            UploadStep::Uploaded { url, size_bytes } => {
                let persisted = MediaFileRepo::set_file_url(self.pool, file.id, &url)
                    .await
                    .map(|row| row.is_some());
                persisted_outcome(persisted, "MediaFile", file.id, url, size_bytes)
            }
        }
    }

    /// Locate, optionally compress, and upload a candidate's local file.
    async fn upload(&self, candidate: &Candidate) -> UploadStep {
        let (Some(local), Some(upload_name)) = (&candidate.local, &candidate.upload_name) else {
            return UploadStep::Done(MigrationOutcome::MissingSource {
                reason: "has no local file".into(),
            });
        };

        let path = self.media_root.join(local);
        let size_bytes = match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => {
                return UploadStep::Done(MigrationOutcome::MissingSource {
                    reason: format!("local file not found: {}", path.display()),
                })
            }
        };

        if self.options.dry_run {
            return UploadStep::Done(MigrationOutcome::WouldMigrate { size_bytes });
        }

        let compress = self.options.compress
            && candidate.compressible
            && compression::needs_compression(size_bytes, self.options.max_bytes);

        let uploaded = if compress {
            match self.compress(&path).await {
                Ok(bytes) => {
                    self.store
                        .upload(bytes, &jpeg_name(upload_name), candidate.folder)
                        .await
                }
                Err(reason) => {
                    tracing::warn!(record = %candidate.label, %reason, "Compression failed");
                    return UploadStep::Done(MigrationOutcome::Failed { reason });
                }
            }
        } else {
            self.store
                .upload_path(&path, upload_name, candidate.folder)
                .await
        };

        match uploaded {
            Ok(url) => UploadStep::Uploaded { url, size_bytes },
            Err(e) => {
                tracing::warn!(record = %candidate.label, error = %e, "Upload failed");
                UploadStep::Done(MigrationOutcome::Failed {
                    reason: format!("upload failed: {e}"),
                })
            }
        }
    }

    /// Read and recompress a file off the async runtime.
    async fn compress(&self, path: &Path) -> Result<Vec<u8>, String> {
        let source = tokio::fs::read(path)
            .await
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let max_bytes = self.options.max_bytes;

        let compressed =
            tokio::task::spawn_blocking(move || compression::compress_to_budget(&source, max_bytes))
                .await
                .map_err(|e| format!("compression task failed: {e}"))?
                .map_err(|e| format!("failed to compress: {e}"))?;

        tracing::debug!(
            path = %path.display(),
            quality = compressed.quality,
            size = compressed.len(),
            "Compressed image",
        );
        Ok(compressed.bytes)
    }
}

/// Compressed output is always JPEG; keep the stem, replace the extension.
fn jpeg_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    format!("{stem}.jpg")
}

fn persisted_outcome(
    persisted: Result<bool, sqlx::Error>,
    entity: &str,
    id: DbId,
    url: String,
    size_bytes: u64,
) -> MigrationOutcome {
    match persisted {
        Ok(true) => MigrationOutcome::Migrated { url, size_bytes },
        Ok(false) => MigrationOutcome::Failed {
            reason: format!("{entity} {id} no longer exists"),
        },
        Err(e) => {
            tracing::error!(entity, id, error = %e, "Failed to persist uploaded URL");
            MigrationOutcome::Failed {
                reason: format!("failed to save URL: {e}"),
            }
        }
    }
}

fn report_outcome(
    out: &mut impl Write,
    label: &str,
    outcome: &MigrationOutcome,
) -> std::io::Result<()> {
    match outcome {
        MigrationOutcome::Skipped => {
            writeln!(out, "  Skipped {label} (already has remote URL)")
        }
        MigrationOutcome::MissingSource { reason } => {
            writeln!(out, "  Error: {label} {reason}")
        }
        MigrationOutcome::WouldMigrate { size_bytes } => {
            writeln!(out, "  Would migrate: {label} ({})", format_megabytes(*size_bytes))
        }
        MigrationOutcome::Migrated { size_bytes, .. } => {
            writeln!(out, "  Migrated: {label} ({})", format_megabytes(*size_bytes))
        }
        MigrationOutcome::Failed { reason } => {
            writeln!(out, "  Failed: {label}: {reason}")
        }
    }
}
