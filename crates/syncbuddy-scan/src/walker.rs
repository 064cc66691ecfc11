//! Serial top-down tree walk.

use std::path::{Path, PathBuf};

use jwalk::{DirEntryIter, Parallelism, WalkDir};

use syncbuddy_core::{RelativePath, ScanError};

/// Kind of a walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory (the root included).
    Directory,
    /// A regular file.
    File,
    /// Anything else: symlinks, devices, sockets, fifos.
    Other,
}

/// One entry produced by [`TreeWalker`].
#[derive(Debug, Clone)]
pub struct WalkEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Path relative to the walk root.
    pub relative: RelativePath,
    /// What the entry is. Symlinks are never followed.
    pub kind: EntryKind,
    /// Depth below the root (root = 0).
    pub depth: usize,
}

/// Iterator over every entry under a root, parents before children.
///
/// Runs on the calling thread. The first traversal error is yielded as
/// `Err`; callers are expected to stop there.
pub struct TreeWalker {
    root: PathBuf,
    entries: DirEntryIter<((), ())>,
}

impl TreeWalker {
    /// Start walking `root`.
    ///
    /// Fails immediately if the root does not exist or is not a directory.
    pub fn new(root: &Path) -> Result<Self, ScanError> {
        let root = root.canonicalize().map_err(|e| ScanError::io(root, e))?;
        let metadata = std::fs::metadata(&root).map_err(|e| ScanError::io(&root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }

        let entries = WalkDir::new(&root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .min_depth(0)
            .into_iter();

        Ok(Self { root, entries })
    }

    /// The canonical root being walked.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn convert(&self, mut entry: jwalk::DirEntry<((), ())>) -> Result<WalkEntry, ScanError> {
        let path = entry.path();

        // jwalk yields an unreadable directory as Ok and parks the error here.
        if let Some(err) = entry.read_children_error.take() {
            return Err(walk_error(&path, err));
        }

        let relative = RelativePath::from_root(&self.root, &path)?;
        let file_type = entry.file_type();

        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        Ok(WalkEntry {
            path,
            relative,
            kind,
            depth: entry.depth(),
        })
    }
}

impl Iterator for TreeWalker {
    type Item = Result<WalkEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.entries.next()? {
            Ok(entry) => self.convert(entry),
            Err(err) => Err(walk_error(&self.root, err)),
        };
        Some(item)
    }
}

/// Convert a jwalk error into a scan error naming the failing path.
///
/// `fallback` is used when the error itself carries no path.
fn walk_error(fallback: &Path, err: jwalk::Error) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    ScanError::io(path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parents_before_children() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        fs::write(temp.path().join("a/b/c/f.txt"), "x").unwrap();

        let entries: Vec<_> = TreeWalker::new(temp.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let order: Vec<_> = entries.iter().map(|e| e.relative.to_string()).collect();
        assert_eq!(order, vec![".", "a", "a/b", "a/b/c", "a/b/c/f.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[4].kind, EntryKind::File);
        assert_eq!(entries[4].depth, 4);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let result = TreeWalker::new(&temp.path().join("missing"));
        assert!(matches!(result, Err(ScanError::NotFound { .. })));
    }

    #[test]
    fn test_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            TreeWalker::new(&file),
            Err(ScanError::NotADirectory { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_reported_as_other() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let entries: Vec<_> = TreeWalker::new(temp.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        let link = entries
            .iter()
            .find(|e| e.relative.to_str() == Some("link"))
            .unwrap();
        assert_eq!(link.kind, EntryKind::Other);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            eprintln!("skipping test_unreadable_directory_is_an_error: permission bits not enforced (running as root?)");
            return;
        }

        let result: Result<Vec<_>, _> = TreeWalker::new(temp.path()).unwrap().collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, ScanError::PermissionDenied { .. }), "{err:?}");
        assert!(err.path().ends_with("locked"));
    }
}
