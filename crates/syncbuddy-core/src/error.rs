//! Error types for scanning and sync operations.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while scanning a tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A walked path could not be expressed relative to its root.
    #[error("Path is not below the scan root: {path}")]
    InvalidPath { path: PathBuf },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::NotADirectory { path }
            | Self::InvalidPath { path } => path,
        }
    }
}

/// Which side of an operation a root belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootRole {
    Source,
    Destination,
}

impl fmt::Display for RootRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// The step of a copy that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyAction {
    ReadMetadata,
    CreateDirectory,
    OpenSource,
    CreateDestination,
    Write,
    SetPermissions,
}

impl fmt::Display for CopyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadMetadata => write!(f, "read metadata of"),
            Self::CreateDirectory => write!(f, "create directory"),
            Self::OpenSource => write!(f, "open source file"),
            Self::CreateDestination => write!(f, "create destination file"),
            Self::Write => write!(f, "write"),
            Self::SetPermissions => write!(f, "set permissions on"),
        }
    }
}

/// Fatal errors from copy, delete and sync operations.
///
/// Every variant carries the path that caused it. Tolerated failures during
/// empty-directory cleanup are reported as [`PruneWarning`]s instead.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A root could not be accessed.
    #[error("error accessing {role} '{path}': {source}")]
    RootAccess {
        role: RootRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A root exists but is not a directory.
    #[error("{role} '{path}' is not a directory")]
    NotADirectory { role: RootRole, path: PathBuf },

    /// Scanning one of the roots failed.
    #[error("error getting entries from {root}: {source}")]
    Scan {
        root: RootRole,
        #[source]
        source: ScanError,
    },

    /// A step of copying an entry failed.
    #[error("failed to {action} {path}: {source}")]
    Copy {
        action: CopyAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stale destination file could not be removed.
    #[error("error deleting {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Wrap a scan failure on the given root.
    pub fn scan(root: RootRole, source: ScanError) -> Self {
        Self::Scan { root, source }
    }

    /// Wrap a failed copy step.
    pub fn copy(action: CopyAction, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Kind of tolerated prune failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A candidate directory could not be listed.
    ListFailed,
    /// An empty directory could not be removed.
    RemoveFailed,
}

/// Non-fatal failure encountered while removing empty directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneWarning {
    /// Directory the warning refers to.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl PruneWarning {
    /// Create a new prune warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for a directory that could not be removed.
    pub fn remove_failed(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("failed to delete directory {}: {error}", path.display()),
            path,
            kind: WarningKind::RemoveFailed,
        }
    }
}
