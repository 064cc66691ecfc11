//! Reports returned by successful operations.

use serde::{Deserialize, Serialize};

use crate::error::PruneWarning;

/// Outcome of a successful copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    /// Directories created or confirmed at the destination, root included.
    pub dirs_created: u64,
    /// Regular files copied.
    pub files_copied: u64,
    /// Bytes written across all copied files.
    pub bytes_copied: u64,
    /// Source entries that were neither files nor directories.
    pub skipped: u64,
}

/// Outcome of a successful prune.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Stale files deleted.
    pub files_removed: u64,
    /// Empty directories deleted.
    pub dirs_removed: u64,
    /// Directories that could not be listed or removed.
    pub warnings: Vec<PruneWarning>,
    /// Destination entries that were neither files nor directories.
    pub skipped: u64,
}

impl PruneReport {
    /// Check if any directory was left behind.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Outcome of a successful copy followed by a prune.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub copy: CopyReport,
    pub prune: PruneReport,
}

/// Report of whichever operation ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum OperationReport {
    Copy(CopyReport),
    Delete(PruneReport),
    Sync(SyncReport),
}

impl OperationReport {
    /// Bytes written to the destination, if anything was copied.
    pub fn bytes_copied(&self) -> u64 {
        match self {
            Self::Copy(copy) | Self::Sync(SyncReport { copy, .. }) => copy.bytes_copied,
            Self::Delete(_) => 0,
        }
    }

    /// Tolerated failures, if the operation pruned.
    pub fn warnings(&self) -> &[PruneWarning] {
        match self {
            Self::Delete(prune) | Self::Sync(SyncReport { prune, .. }) => &prune.warnings,
            Self::Copy(_) => &[],
        }
    }

    /// Get a human-readable summary of the operation.
    pub fn summary(&self) -> String {
        let mut summary = match self {
            Self::Copy(copy) => copy_summary(copy),
            Self::Delete(prune) => prune_summary(prune),
            Self::Sync(sync) => format!(
                "{}; {}",
                copy_summary(&sync.copy),
                prune_summary(&sync.prune)
            ),
        };

        let warnings = self.warnings().len();
        if warnings > 0 {
            summary.push_str(&format!(", {warnings} warning(s)"));
        }
        summary
    }
}

fn copy_summary(copy: &CopyReport) -> String {
    let mut summary = format!(
        "Copied {} files into {} directories",
        copy.files_copied, copy.dirs_created
    );
    if copy.skipped > 0 {
        summary.push_str(&format!(" ({} special entries skipped)", copy.skipped));
    }
    summary
}

fn prune_summary(prune: &PruneReport) -> String {
    format!(
        "Deleted {} stale files and {} empty directories",
        prune.files_removed, prune.dirs_removed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WarningKind;

    #[test]
    fn test_copy_summary() {
        let report = OperationReport::Copy(CopyReport {
            dirs_created: 2,
            files_copied: 3,
            bytes_copied: 42,
            skipped: 1,
        });
        assert_eq!(
            report.summary(),
            "Copied 3 files into 2 directories (1 special entries skipped)"
        );
        assert_eq!(report.bytes_copied(), 42);
    }

    #[test]
    fn test_sync_summary_counts_warnings() {
        let report = OperationReport::Sync(SyncReport {
            copy: CopyReport::default(),
            prune: PruneReport {
                files_removed: 1,
                dirs_removed: 0,
                warnings: vec![PruneWarning::new("/d", "busy", WarningKind::RemoveFailed)],
                skipped: 0,
            },
        });
        assert!(report.summary().ends_with("1 warning(s)"));
        assert_eq!(report.warnings().len(), 1);
    }

    #[test]
    fn test_report_json_is_tagged() {
        let report = OperationReport::Delete(PruneReport::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["operation"], "delete");
        assert_eq!(json["files_removed"], 0);
    }
}
