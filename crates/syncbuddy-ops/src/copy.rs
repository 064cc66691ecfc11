//! Directory copier: reproduces a source tree at a destination.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::{debug, info};

use syncbuddy_core::{CopyAction, CopyReport, RootRole, SyncConfig, SyncError};
use syncbuddy_scan::{EntryKind, TreeWalker};

/// Copy every directory and regular file under the source into the destination.
///
/// The walk is top-down, so the destination root and each directory exist
/// before anything is written into them. Existing destination files are
/// truncated and overwritten. The first failure aborts the walk; whatever was
/// already written stays in place.
pub fn copy_tree(config: &SyncConfig) -> Result<CopyReport, SyncError> {
    let walker = TreeWalker::new(&config.source).map_err(|e| SyncError::scan(RootRole::Source, e))?;
    let mut report = CopyReport::default();

    info!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        "copying tree"
    );

    for entry in walker {
        let entry = entry.map_err(|e| SyncError::scan(RootRole::Source, e))?;
        let dest_path = entry.relative.resolve(&config.destination);

        match entry.kind {
            EntryKind::Directory => {
                create_dir(&entry.path, &dest_path)?;
                report.dirs_created += 1;
            }
            EntryKind::File => {
                let bytes = copy_file(&entry.path, &dest_path)?;
                debug!(path = %entry.relative, bytes, "copied file");
                report.files_copied += 1;
                report.bytes_copied += bytes;
            }
            EntryKind::Other => {
                debug!(path = %entry.path.display(), "skipping special entry");
                report.skipped += 1;
            }
        }
    }

    info!(
        files = report.files_copied,
        dirs = report.dirs_created,
        bytes = report.bytes_copied,
        skipped = report.skipped,
        "copy complete"
    );
    Ok(report)
}

/// Create `dest` and any missing parents. Already existing is fine.
fn create_dir(source: &Path, dest: &Path) -> Result<(), SyncError> {
    let metadata =
        fs::metadata(source).map_err(|e| SyncError::copy(CopyAction::ReadMetadata, source, e))?;

    dir_builder(&metadata)
        .create(dest)
        .map_err(|e| SyncError::copy(CopyAction::CreateDirectory, dest, e))
}

/// Copy one regular file and apply the source's permissions.
fn copy_file(source: &Path, dest: &Path) -> Result<u64, SyncError> {
    let permissions = fs::metadata(source)
        .map_err(|e| SyncError::copy(CopyAction::ReadMetadata, source, e))?
        .permissions();

    let bytes = {
        let mut reader =
            File::open(source).map_err(|e| SyncError::copy(CopyAction::OpenSource, source, e))?;
        let mut writer = create_destination(dest)?;
        io::copy(&mut reader, &mut writer).map_err(|e| SyncError::copy(CopyAction::Write, dest, e))?
    };

    fs::set_permissions(dest, permissions)
        .map_err(|e| SyncError::copy(CopyAction::SetPermissions, dest, e))?;

    Ok(bytes)
}

/// Open `dest` for writing, truncating it.
///
/// A read-only file left by an earlier copy is removed and created again;
/// the source mode is reapplied afterwards by the caller.
fn create_destination(dest: &Path) -> Result<File, SyncError> {
    let err = match File::create(dest) {
        Ok(file) => return Ok(file),
        Err(err) => err,
    };

    let is_file = fs::symlink_metadata(dest).is_ok_and(|m| m.is_file());
    if err.kind() != io::ErrorKind::PermissionDenied || !is_file {
        return Err(SyncError::copy(CopyAction::CreateDestination, dest, err));
    }

    debug!(path = %dest.display(), "replacing read-only destination file");
    if fs::remove_file(dest).is_err() {
        return Err(SyncError::copy(CopyAction::CreateDestination, dest, err));
    }
    File::create(dest).map_err(|e| SyncError::copy(CopyAction::CreateDestination, dest, e))
}

/// Recursive builder carrying the source directory's mode (Unix).
#[cfg(unix)]
fn dir_builder(metadata: &fs::Metadata) -> fs::DirBuilder {
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true).mode(metadata.permissions().mode());
    builder
}

#[cfg(not(unix))]
fn dir_builder(_metadata: &fs::Metadata) -> fs::DirBuilder {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    builder
}
