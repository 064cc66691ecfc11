//! Copy, prune and sync engine for syncbuddy.
//!
//! Everything here is synchronous and runs on the calling thread:
//!
//! - [`copy_tree`] reproduces the source tree at the destination, carrying
//!   permission bits across.
//! - [`prune_tree`] deletes destination files absent from the source, then
//!   every empty destination directory, deepest first.
//! - [`sync_tree`] runs the two in order.
//!
//! ```rust,no_run
//! use syncbuddy_core::SyncConfig;
//! use syncbuddy_ops::Operation;
//!
//! let config = SyncConfig::new("/data/photos", "/mnt/backup/photos");
//! let report = Operation::Sync.run(&config).unwrap();
//! println!("{}", report.summary());
//! ```

mod copy;
mod operation;
mod prune;
mod reconcile;

pub use copy::copy_tree;
pub use operation::{Operation, copy, delete, sync};
pub use prune::prune_tree;
pub use reconcile::sync_tree;

pub use syncbuddy_core::{
    CopyReport, OperationReport, PruneReport, PruneWarning, SyncConfig, SyncError, SyncReport,
};
