//! Per-record outcomes of a local-to-remote migration pass.

use std::fmt;

/// What happened to a single record during a migration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// A remote URL already exists and no re-upload was forced.
    Skipped,
    /// No usable local reference, or the referenced file is not on disk.
    MissingSource { reason: String },
    /// Dry run: the record would have been migrated.
    WouldMigrate { size_bytes: u64 },
    /// Uploaded and the returned URL persisted.
    Migrated { url: String, size_bytes: u64 },
    /// Compression, upload or persistence failed; the record is unchanged.
    Failed { reason: String },
}

/// Column an outcome is counted under in the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    Migrated,
    Skipped,
    Error,
}

impl MigrationOutcome {
    pub fn class(&self) -> OutcomeClass {
        match self {
            Self::Skipped => OutcomeClass::Skipped,
            Self::WouldMigrate { .. } | Self::Migrated { .. } => OutcomeClass::Migrated,
            Self::MissingSource { .. } | Self::Failed { .. } => OutcomeClass::Error,
        }
    }
}

/// Whether a record with `remote_url` is left alone.
pub fn should_skip(remote_url: Option<&str>, force: bool) -> bool {
    !force && remote_url.is_some_and(|url| !url.trim().is_empty())
}

/// Running `{migrated, skipped, errors}` counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub migrated: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl MigrationSummary {
    pub fn record(&mut self, outcome: &MigrationOutcome) {
        match outcome.class() {
            OutcomeClass::Migrated => self.migrated += 1,
            OutcomeClass::Skipped => self.skipped += 1,
            OutcomeClass::Error => self.errors += 1,
        }
    }

    pub fn merge(&mut self, other: MigrationSummary) {
        self.migrated += other.migrated;
        self.skipped += other.skipped;
        self.errors += other.errors;
    }

    pub fn total(&self) -> usize {
        self.migrated + self.skipped + self.errors
    }
}

impl fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} migrated, {} skipped, {} errors",
            self.migrated, self.skipped, self.errors
        )
    }
}

/// Size in MiB with one decimal, as printed in per-record lines.
pub fn format_megabytes(size_bytes: u64) -> String {
    format!("{:.1}MB", size_bytes as f64 / (1024.0 * 1024.0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_requires_non_blank_url_and_no_force() {
        assert!(should_skip(Some("https://x/y.jpg"), false));
        assert!(!should_skip(Some("https://x/y.jpg"), true));
        assert!(!should_skip(Some(""), false));
        assert!(!should_skip(None, false));
    }

    #[test]
    fn dry_run_counts_as_migrated() {
        let mut summary = MigrationSummary::default();
        summary.record(&MigrationOutcome::WouldMigrate { size_bytes: 1 });
        summary.record(&MigrationOutcome::Skipped);
        summary.record(&MigrationOutcome::MissingSource {
            reason: "no local file".into(),
        });
        summary.record(&MigrationOutcome::Failed {
            reason: "upload failed".into(),
        });

        assert_eq!(
            summary,
            MigrationSummary {
                migrated: 1,
                skipped: 1,
                errors: 2
            }
        );
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.to_string(), "1 migrated, 1 skipped, 2 errors");
    }

    #[test]
    fn merge_adds_columns() {
        let mut left = MigrationSummary {
            migrated: 2,
            skipped: 0,
            errors: 1,
        };
        left.merge(MigrationSummary {
            migrated: 1,
            skipped: 3,
            errors: 0,
        });
        assert_eq!(left.to_string(), "3 migrated, 3 skipped, 1 errors");
    }

    #[test]
    fn megabytes_have_one_decimal() {
        assert_eq!(format_megabytes(0), "0.0MB");
        assert_eq!(format_megabytes(5 * 1024 * 1024 + 512 * 1024), "5.5MB");
    }
}
