//! Directory tree scanning for syncbuddy.
//!
//! The scanner walks a root serially with jwalk and records every regular
//! file and directory as a [`RelativePath`], so that two trees rooted at
//! different locations can be compared by key.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use syncbuddy_scan::TreeScanner;
//!
//! let listing = TreeScanner::new().scan(Path::new("/path/to/scan")).unwrap();
//!
//! println!("{} files, {} directories", listing.files.len(), listing.dirs.len());
//! ```
//!
//! [`TreeWalker`] is the lower-level iterator the scanner is built on; the
//! copier uses it directly to reproduce a tree top-down.

mod scanner;
mod walker;

pub use scanner::TreeScanner;
pub use walker::{EntryKind, TreeWalker, WalkEntry};

// Re-export core types for convenience
pub use syncbuddy_core::{DirList, FileSet, RelativePath, ScanError, TreeListing};
