//! Copy followed by prune: a full one-way mirror.

use tracing::info;

use syncbuddy_core::{SyncConfig, SyncError, SyncReport};

use crate::copy::copy_tree;
use crate::prune::prune_tree;

/// Make the destination mirror the source.
///
/// If the copy fails the prune is never attempted. If the prune fails the
/// destination keeps everything the copy wrote.
pub fn sync_tree(config: &SyncConfig) -> Result<SyncReport, SyncError> {
    let copy = copy_tree(config)?;

    let prune = prune_tree(config)?;

    info!(
        copied = copy.files_copied,
        removed = prune.files_removed + prune.dirs_removed,
        "sync complete"
    );
    Ok(SyncReport { copy, prune })
}
