use std::path::{Path, PathBuf};

use syncbuddy_core::{
    CopyReport, DirList, FileSet, OperationReport, PruneReport, RelativePath, SyncConfig,
    SyncReport,
};

#[test]
fn test_relative_paths_compare_across_roots() {
    let src_root = Path::new("/srv/source");
    let dst_root = Path::new("/mnt/mirror/target");

    let src_files: FileSet = ["a.txt", "sub/b.txt"]
        .iter()
        .map(|name| RelativePath::from_root(src_root, &src_root.join(name)).unwrap())
        .collect();
    let dst_files: FileSet = ["a.txt", "sub/b.txt", "sub/c.txt"]
        .iter()
        .map(|name| RelativePath::from_root(dst_root, &dst_root.join(name)).unwrap())
        .collect();

    let stale: Vec<_> = dst_files.difference(&src_files).into_iter().cloned().collect();
    assert_eq!(stale, vec![RelativePath::from("sub/c.txt")]);
    assert!(src_files.difference(&dst_files).is_empty());
}

#[test]
fn test_stale_path_resolves_under_destination() {
    let rel = RelativePath::from("sub/c.txt");
    let resolved = rel.resolve(Path::new("/mnt/mirror/target"));
    assert_eq!(
        resolved,
        PathBuf::from("/mnt/mirror/target").join("sub").join("c.txt")
    );
}

#[test]
fn test_dir_list_deepest_first_is_stable_for_ties() {
    let mut dirs: DirList = ["x/aa", "y/bb", "z"]
        .into_iter()
        .map(RelativePath::from)
        .collect();
    dirs.sort_deepest_first();

    let order: Vec<_> = dirs.iter().map(RelativePath::to_string).collect();
    assert_eq!(order, vec!["x/aa", "y/bb", "z"]);
}

#[test]
fn test_config_builder_and_new_agree() {
    let built = SyncConfig::builder()
        .source("/src")
        .destination("/dst")
        .build()
        .unwrap();
    assert_eq!(built, SyncConfig::new("/src", "/dst"));
}

#[test]
fn test_sync_report_summary() {
    let report = OperationReport::Sync(SyncReport {
        copy: CopyReport {
            dirs_created: 1,
            files_copied: 2,
            bytes_copied: 10,
            skipped: 0,
        },
        prune: PruneReport {
            files_removed: 3,
            dirs_removed: 4,
            warnings: Vec::new(),
            skipped: 0,
        },
    });

    assert_eq!(
        report.summary(),
        "Copied 2 files into 1 directories; Deleted 3 stale files and 4 empty directories"
    );
    assert_eq!(report.bytes_copied(), 10);
    assert!(report.warnings().is_empty());
}
