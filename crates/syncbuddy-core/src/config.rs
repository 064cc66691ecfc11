//! Sync configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{RootRole, SyncError};

/// The pair of roots one copy, delete or sync operation works on.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SyncConfig {
    /// Tree to read from. Never modified.
    pub source: PathBuf,

    /// Tree to write to and prune.
    pub destination: PathBuf,
}

impl SyncConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.source {
            Some(ref source) if source.as_os_str().is_empty() => {
                return Err("Source path cannot be empty".to_string());
            }
            None => return Err("Source path is required".to_string()),
            _ => {}
        }
        match self.destination {
            Some(ref destination) if destination.as_os_str().is_empty() => {
                Err("Destination path cannot be empty".to_string())
            }
            None => Err("Destination path is required".to_string()),
            _ => Ok(()),
        }
    }
}

impl SyncConfig {
    /// Create a new sync config builder.
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::default()
    }

    /// Create a config for a source and destination pair.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Check that the source exists and is a directory.
    pub fn validate_source(&self) -> Result<(), SyncError> {
        let metadata = std::fs::metadata(&self.source).map_err(|source| SyncError::RootAccess {
            role: RootRole::Source,
            path: self.source.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(SyncError::NotADirectory {
                role: RootRole::Source,
                path: self.source.clone(),
            });
        }
        Ok(())
    }
}
