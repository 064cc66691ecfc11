//! Core types for syncbuddy.
//!
//! This crate provides the data structures shared by the scanner and the
//! copy/prune engine: separator-normalized relative paths, file sets,
//! directory lists, the sync configuration, reports and error types.

mod config;
mod error;
mod path;
mod report;
mod tree;

pub use config::{SyncConfig, SyncConfigBuilder, SyncConfigBuilderError};
pub use error::{CopyAction, PruneWarning, RootRole, ScanError, SyncError, WarningKind};
pub use path::{RelativePath, SEPARATOR};
pub use report::{CopyReport, OperationReport, PruneReport, SyncReport};
pub use tree::{DirList, FileSet, TreeListing};
