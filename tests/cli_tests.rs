use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn syncbuddy() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_syncbuddy"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_default_command_mirrors() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(dst.path().join("stale.txt"), "x").unwrap();

    let output = syncbuddy()
        .arg("-s")
        .arg(src.path())
        .arg("-d")
        .arg(dst.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dst.path().join("a.txt").is_file());
    assert!(!dst.path().join("stale.txt").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Synchronization complete!"));
}

#[test]
fn test_copy_subcommand_leaves_stale_files() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(dst.path().join("stale.txt"), "x").unwrap();

    let status = syncbuddy()
        .arg("--source")
        .arg(src.path())
        .arg("--destination")
        .arg(dst.path())
        .arg("--quiet")
        .arg("copy")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(dst.path().join("a.txt").is_file());
    assert!(dst.path().join("stale.txt").is_file());
}

#[test]
fn test_source_must_be_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not_a_dir.txt");
    fs::write(&file, "x").unwrap();

    let output = syncbuddy()
        .arg("-s")
        .arg(&file)
        .arg("-d")
        .arg(temp.path().join("out"))
        .arg("copy")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a directory"));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_json_report() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("a.txt"), "abc").unwrap();

    let output = syncbuddy()
        .arg("-s")
        .arg(src.path())
        .arg("-d")
        .arg(dst.path())
        .args(["--format", "json", "copy"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["operation"], "copy");
    assert_eq!(report["files_copied"], 1);
    assert_eq!(report["bytes_copied"], 3);
}

#[test]
fn test_flags_after_subcommand() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(dst.path().join("stale.txt"), "x").unwrap();

    let output = syncbuddy()
        .arg("copy")
        .arg("-s")
        .arg(src.path())
        .arg("-d")
        .arg(dst.path())
        .arg("-q")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dst.path().join("a.txt").is_file());
    assert!(dst.path().join("stale.txt").is_file());
}

#[test]
fn test_flags_split_around_subcommand() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(dst.path().join("stale.txt"), "x").unwrap();

    let status = syncbuddy()
        .arg("-s")
        .arg(src.path())
        .arg("delete")
        .arg("-d")
        .arg(dst.path())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!dst.path().join("stale.txt").exists());
    assert!(!dst.path().join("a.txt").exists());
}

#[test]
fn test_missing_flags_rejected() {
    let output = syncbuddy().arg("sync").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--source"));

    let src = TempDir::new().unwrap();
    let output = syncbuddy().arg("copy").arg("-s").arg(src.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--destination"));
}
