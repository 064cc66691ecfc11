//! Tree pruner: removes destination entries that have no source counterpart.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use syncbuddy_core::{
    FileSet, PruneReport, PruneWarning, RootRole, SyncConfig, SyncError, TreeListing, WarningKind,
};
use syncbuddy_scan::TreeScanner;

/// Delete destination files absent from the source, then every empty
/// destination directory, deepest first.
///
/// Failing to delete a stale file is fatal. Failing to list or remove a
/// candidate directory is not: it is logged, recorded as a warning and the
/// pass moves on.
pub fn prune_tree(config: &SyncConfig) -> Result<PruneReport, SyncError> {
    let scanner = TreeScanner::new();
    let source = scanner
        .scan(&config.source)
        .map_err(|e| SyncError::scan(RootRole::Source, e))?;
    let dest = scanner
        .scan(&config.destination)
        .map_err(|e| SyncError::scan(RootRole::Destination, e))?;

    let mut report = PruneReport {
        skipped: dest.skipped,
        ..PruneReport::default()
    };

    remove_stale_files(&source.files, &dest, &mut report)?;
    remove_empty_dirs(&scanner, &dest.root, &mut report)?;

    info!(
        files = report.files_removed,
        dirs = report.dirs_removed,
        warnings = report.warnings.len(),
        "prune complete"
    );
    Ok(report)
}

/// Phase 1: every destination file without a source counterpart goes.
fn remove_stale_files(
    source_files: &FileSet,
    dest: &TreeListing,
    report: &mut PruneReport,
) -> Result<(), SyncError> {
    for relative in dest.files.difference(source_files) {
        let path = relative.resolve(&dest.root);
        info!("Deleting {}", path.display());
        fs::remove_file(&path).map_err(|source| SyncError::RemoveFile {
            path: path.clone(),
            source,
        })?;
        report.files_removed += 1;
    }
    Ok(())
}

/// Phase 2: rescan the destination and remove empty directories, children
/// before parents so a parent emptied by its child goes in the same pass.
fn remove_empty_dirs(
    scanner: &TreeScanner,
    root: &Path,
    report: &mut PruneReport,
) -> Result<(), SyncError> {
    let mut dirs = scanner
        .dirs(root)
        .map_err(|e| SyncError::scan(RootRole::Destination, e))?;
    dirs.sort_deepest_first();

    for relative in dirs {
        let path = relative.resolve(root);

        let is_empty = match fs::read_dir(&path) {
            Ok(mut entries) => entries.next().is_none(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "directory already gone");
                continue;
            }
            Err(err) => {
                warn!("failed to read directory {}: {}", path.display(), err);
                report.warnings.push(PruneWarning::new(
                    &path,
                    format!("failed to read directory {}: {err}", path.display()),
                    WarningKind::ListFailed,
                ));
                continue;
            }
        };

        if !is_empty {
            continue;
        }

        info!("Deleting empty directory: {}", path.display());
        match fs::remove_dir(&path) {
            Ok(()) => report.dirs_removed += 1,
            Err(err) => {
                warn!("failed to delete directory {}: {}", path.display(), err);
                report.warnings.push(PruneWarning::remove_failed(&path, &err));
            }
        }
    }
    Ok(())
}
