//! Integration tests exercising cleanup operations on real directory trees.

use cleanfs::{ErrorKind, fsync, remove_tree, remove_trees};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn touch(path: &Path) {
    File::create(path).unwrap().write_all(b"data").unwrap();
}

/// Permission-based obstruction tests are meaningless as root, which
/// bypasses file permissions entirely.
#[cfg(unix)]
fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[test]
fn test_remove_trees_round_trip() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a");
    fs::create_dir(&a).unwrap();
    touch(&a.join("b.txt"));
    fs::create_dir(a.join("c")).unwrap();

    remove_trees(vec![Some(&a)]).unwrap();

    assert!(!a.exists());
    assert!(!a.join("b.txt").exists());
    assert!(!a.join("c").exists());
}

#[test]
fn test_remove_trees_mixed_locations() {
    let temp = tempdir().unwrap();
    let tree = temp.path().join("tree");
    let file = temp.path().join("loose.txt");
    let missing = temp.path().join("missing");
    fs::create_dir_all(tree.join("inner")).unwrap();
    touch(&tree.join("inner/deep.txt"));
    touch(&file);

    let locations: Vec<Option<PathBuf>> = vec![
        Some(tree.clone()),
        None,
        Some(file.clone()),
        Some(missing),
    ];
    remove_trees(locations).unwrap();

    assert!(!tree.exists());
    assert!(!file.exists());
}

#[cfg(unix)]
#[test]
fn test_remove_trees_reports_every_undeletable_path_in_attempt_order() {
    use std::os::unix::fs::PermissionsExt;

    if running_as_root() {
        eprintln!("skipping: running as root, permissions are not enforced");
        return;
    }

    let temp = tempdir().unwrap();
    let base = temp.path().join("base");
    let locked = base.join("locked");
    let free = base.join("free");
    fs::create_dir_all(&locked).unwrap();
    fs::create_dir_all(&free).unwrap();
    touch(&locked.join("stuck.txt"));
    touch(&free.join("ok.txt"));

    // Read-only directory: its children cannot be unlinked.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let err = remove_tree(&base).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Delete(_)));

    let report = err.to_string();
    assert!(report.contains("could not remove the following files (in the order of attempts):"));

    // Everything deletable was still deleted.
    assert!(!free.exists());

    // Exactly the obstructed paths are reported, children before parents.
    let stuck = locked.join("stuck.txt");
    for path in [&stuck, &locked, &base] {
        assert!(
            report.contains(&format!("{}:", path.display())),
            "missing {} in report:\n{report}",
            path.display()
        );
    }
    assert!(!report.contains("ok.txt"));
    let pos = |p: &Path| report.find(&format!("{}:", p.display())).unwrap();
    assert!(pos(&stuck) < pos(&locked));
    assert!(pos(&locked) < pos(&base));

    // Removing the obstruction makes a second call succeed.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    remove_tree(&base).unwrap();
    assert!(!base.exists());
}

#[test]
fn test_remove_trees_is_idempotent() {
    let temp = tempdir().unwrap();
    let tree = temp.path().join("tree");
    fs::create_dir(&tree).unwrap();
    touch(&tree.join("file.txt"));

    remove_tree(&tree).unwrap();
    remove_tree(&tree).unwrap();
    let locations: Vec<Option<PathBuf>> = vec![None, None];
    remove_trees(locations).unwrap();
}

#[test]
fn test_fsync_file_then_parent_directory() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("durable.bin");
    let mut file = File::create(&path).unwrap();
    file.write_all(b"must survive").unwrap();
    drop(file);

    fsync(&path, false).unwrap();
    fsync(temp.path(), true).unwrap();
}

#[test]
fn test_fsync_missing_regular_file_fails() {
    let temp = tempdir().unwrap();
    let err = fsync(&temp.path().join("nope.bin"), false).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
