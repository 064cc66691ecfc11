//! Operation dispatch and the path-based entry points.

use std::path::Path;

use strum::{Display, EnumIter, EnumString};

use syncbuddy_core::{CopyReport, OperationReport, PruneReport, SyncConfig, SyncError, SyncReport};

use crate::copy::copy_tree;
use crate::prune::prune_tree;
use crate::reconcile::sync_tree;

/// The operations the engine can run against a source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// Copy the source tree onto the destination.
    Copy,
    /// Remove destination entries absent from the source.
    Delete,
    /// Copy, then delete.
    Sync,
}

impl Operation {
    /// Run this operation to completion on the calling thread.
    pub fn run(self, config: &SyncConfig) -> Result<OperationReport, SyncError> {
        match self {
            Self::Copy => copy_tree(config).map(OperationReport::Copy),
            Self::Delete => prune_tree(config).map(OperationReport::Delete),
            Self::Sync => sync_tree(config).map(OperationReport::Sync),
        }
    }

    /// Present participle used in status lines ("Copying", ...).
    pub fn verb(self) -> &'static str {
        match self {
            Self::Copy => "Copying",
            Self::Delete => "Deleting",
            Self::Sync => "Syncing",
        }
    }
}

/// Copy `source` onto `destination`.
pub fn copy(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<CopyReport, SyncError> {
    copy_tree(&config(source, destination))
}

/// Remove everything under `destination` that is not in `source`.
pub fn delete(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<PruneReport, SyncError> {
    prune_tree(&config(source, destination))
}

/// Mirror `source` onto `destination`.
pub fn sync(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<SyncReport, SyncError> {
    sync_tree(&config(source, destination))
}

fn config(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> SyncConfig {
    SyncConfig::new(source.as_ref(), destination.as_ref())
}
