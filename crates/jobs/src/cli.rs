//! Command-line interface of the `lookbook-jobs` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lookbook_core::compression::{BYTES_PER_MB, DEFAULT_MAX_SIZE_MB};

use crate::migrate::{MigrationOptions, MigrationScope};

#[derive(Debug, Parser)]
#[command(name = "lookbook-jobs", about = "Lookbook catalog batch jobs")]
pub struct JobConfig {
    /// Directory holding the legacy `images/`, `videos/` and `logos/` folders
    #[arg(long, env = "MEDIA_ROOT", default_value = "media", global = true)]
    pub media_root: PathBuf,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload local gallery images and media files to object storage
    Migrate(MigrateArgs),
    /// Create media file rows for files found under the media root
    SeedMedia,
    /// Replace all team members with the roster
    SeedMembers {
        /// JSON roster file; defaults to the built-in roster
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// Delete an uploaded object by its public URL
    DeleteObject { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Images,
    Media,
}

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Report what would be migrated without uploading or writing
    #[arg(long)]
    pub dry_run: bool,
    /// Re-upload records that already have a remote URL
    #[arg(long)]
    pub force: bool,
    /// Recompress oversized images as JPEG before upload
    #[arg(long)]
    pub compress: bool,
    /// Compression threshold in MB [default: 5]; implies --compress
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_size: Option<u64>,
    /// Restrict the run to one record kind
    #[arg(long, value_enum)]
    pub only: Option<Section>,
}

impl MigrateArgs {
    pub fn options(&self) -> MigrationOptions {
        MigrationOptions {
            dry_run: self.dry_run,
            force: self.force,
            compress: self.compress || self.max_size.is_some(),
            max_bytes: self
                .max_size
                .unwrap_or(DEFAULT_MAX_SIZE_MB)
                .saturating_mul(BYTES_PER_MB),
        }
    }

    pub fn scope(&self) -> MigrationScope {
        match self.only {
            None => MigrationScope::All,
            Some(Section::Images) => MigrationScope::GalleryImages,
            Some(Section::Media) => MigrationScope::MediaFiles,
        }
    }
}
