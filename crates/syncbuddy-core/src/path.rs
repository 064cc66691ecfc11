//! Separator-normalized paths relative to a root.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Separator used in every [`RelativePath`], regardless of host platform.
pub const SEPARATOR: char = '/';

/// A path relative to a tree root.
///
/// Components are always joined with [`SEPARATOR`], so two trees rooted at
/// different locations can be compared key-for-key. Names are kept as raw
/// OS strings, so names that are not valid UTF-8 survive unchanged. The root
/// itself is the empty relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativePath(OsString);

impl RelativePath {
    /// The relative path of the root itself.
    pub fn root() -> Self {
        Self(OsString::new())
    }

    /// Express `path` relative to `root`.
    ///
    /// Fails with [`ScanError::InvalidPath`] if `path` is not below `root`.
    pub fn from_root(root: &Path, path: &Path) -> Result<Self, ScanError> {
        let invalid = || ScanError::InvalidPath {
            path: path.to_path_buf(),
        };
        let stripped = path.strip_prefix(root).map_err(|_| invalid())?;

        let mut key = Self::root();
        for component in stripped.components() {
            match component {
                Component::Normal(name) => key.push(name),
                Component::CurDir => {}
                _ => return Err(invalid()),
            }
        }
        Ok(key)
    }

    fn push(&mut self, name: &OsStr) {
        if !self.0.is_empty() {
            self.0.push("/");
        }
        self.0.push(name);
    }

    /// Whether this is the root's own relative path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of components below the root.
    pub fn depth(&self) -> usize {
        Path::new(&self.0).components().count()
    }

    /// Length of the normalized key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty (same as [`is_root`](Self::is_root)).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw normalized key.
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// The normalized key, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        self.0.to_str()
    }

    /// Rebuild the host path of this entry under `root`.
    ///
    /// `/` is a separator on every supported host, so the key joins as is.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        if self.is_root() {
            root.to_path_buf()
        } else {
            root.join(&self.0)
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.0.to_string_lossy())
        }
    }
}

impl From<&str> for RelativePath {
    /// Build from a string, normalizing `\` to `/` and dropping empty components.
    fn from(value: &str) -> Self {
        let mut key = Self::root();
        for component in value.split(['/', '\\']).filter(|c| !c.is_empty() && *c != ".") {
            key.push(OsStr::new(component));
        }
        key
    }
}
