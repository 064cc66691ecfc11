//! File sets and directory lists produced by a tree scan.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::path::RelativePath;

/// All regular files under a root, as relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    paths: HashSet<RelativePath>,
}

impl FileSet {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Returns false if it was already present.
    pub fn insert(&mut self, path: RelativePath) -> bool {
        self.paths.insert(path)
    }

    /// Check membership.
    pub fn contains(&self, path: &RelativePath) -> bool {
        self.paths.contains(path)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RelativePath> {
        self.paths.iter()
    }

    /// Paths in `self` that are absent from `other`, sorted.
    pub fn difference<'a>(&'a self, other: &FileSet) -> Vec<&'a RelativePath> {
        let mut stale: Vec<_> = self.paths.iter().filter(|p| !other.contains(p)).collect();
        stale.sort();
        stale
    }
}

impl FromIterator<RelativePath> for FileSet {
    fn from_iter<I: IntoIterator<Item = RelativePath>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

/// All directories under a root (root excluded), in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirList {
    paths: Vec<RelativePath>,
}

impl DirList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory. The root itself is ignored.
    pub fn push(&mut self, path: RelativePath) {
        if !path.is_root() {
            self.paths.push(path);
        }
    }

    /// Number of directories.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate in current order.
    pub fn iter(&self) -> impl Iterator<Item = &RelativePath> {
        self.paths.iter()
    }

    /// Reorder so every directory comes before its ancestors.
    ///
    /// Deeper paths first, then longer paths; equal keys keep discovery order.
    pub fn sort_deepest_first(&mut self) {
        self.paths.sort_by(|a, b| {
            b.depth()
                .cmp(&a.depth())
                .then_with(|| b.len().cmp(&a.len()))
        });
    }
}

impl FromIterator<RelativePath> for DirList {
    fn from_iter<I: IntoIterator<Item = RelativePath>>(iter: I) -> Self {
        let mut list = Self::new();
        for path in iter {
            list.push(path);
        }
        list
    }
}

impl IntoIterator for DirList {
    type Item = RelativePath;
    type IntoIter = std::vec::IntoIter<RelativePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

/// Everything a scan found under one root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeListing {
    /// Root that was scanned.
    pub root: PathBuf,
    /// Regular files.
    pub files: FileSet,
    /// Directories, root excluded.
    pub dirs: DirList,
    /// Entries that were neither regular files nor directories.
    pub skipped: u64,
}

impl TreeListing {
    /// Create an empty listing for a root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: FileSet::new(),
            dirs: DirList::new(),
            skipped: 0,
        }
    }
}
