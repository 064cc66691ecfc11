//! Builds file sets and directory lists for a root.

use std::path::Path;

use tracing::debug;

use syncbuddy_core::{DirList, FileSet, ScanError, TreeListing};

use crate::walker::{EntryKind, TreeWalker};

/// Enumerates the regular files and directories under a root.
///
/// Only regular files and directories are recorded. Symlinks and special
/// files are counted in [`TreeListing::skipped`] and otherwise ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeScanner;

impl TreeScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scan `root`, failing on the first traversal error.
    pub fn scan(&self, root: &Path) -> Result<TreeListing, ScanError> {
        let walker = TreeWalker::new(root)?;
        let mut listing = TreeListing::new(walker.root());

        for entry in walker {
            let entry = entry?;
            match entry.kind {
                EntryKind::Directory => listing.dirs.push(entry.relative),
                EntryKind::File => {
                    listing.files.insert(entry.relative);
                }
                EntryKind::Other => {
                    debug!(path = %entry.path.display(), "skipping special entry");
                    listing.skipped += 1;
                }
            }
        }

        debug!(
            root = %listing.root.display(),
            files = listing.files.len(),
            dirs = listing.dirs.len(),
            skipped = listing.skipped,
            "scan complete"
        );
        Ok(listing)
    }

    /// All regular files under `root`.
    pub fn files(&self, root: &Path) -> Result<FileSet, ScanError> {
        self.scan(root).map(|listing| listing.files)
    }

    /// All directories under `root`, root excluded, in discovery order.
    pub fn dirs(&self, root: &Path) -> Result<DirList, ScanError> {
        self.scan(root).map(|listing| listing.dirs)
    }
}
