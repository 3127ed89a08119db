#![cfg(test)]

use sharewatch::FolderHandle;
use tempfile::TempDir;

#[test]
fn a_handle_resolves_fresh_while_nothing_moves() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("inbox");
    std::fs::create_dir(&dir).unwrap();

    let handle = FolderHandle::capture(&dir).unwrap();
    let resolved = handle.resolve();
    assert!(!resolved.stale);
    assert_eq!(resolved.path, handle.stored_path());
}

#[test]
#[cfg(unix)]
fn a_renamed_folder_is_found_again_and_flagged_stale() {
    let temp = TempDir::new().unwrap();
    let original = temp.path().join("inbox");
    std::fs::create_dir(&original).unwrap();
    std::fs::write(original.join("doc.txt"), "x").unwrap();

    let handle = FolderHandle::capture(&original).unwrap();

    let renamed = temp.path().join("inbox-2026");
    std::fs::rename(&original, &renamed).unwrap();

    let resolved = handle.resolve();
    assert!(resolved.stale, "rename must be reported");
    assert_eq!(resolved.path, renamed.canonicalize().unwrap());
    assert!(resolved.path.join("doc.txt").exists());
}

#[test]
#[cfg(unix)]
fn a_persisted_handle_still_follows_a_rename() {
    let temp = TempDir::new().unwrap();
    let original = temp.path().join("inbox");
    std::fs::create_dir(&original).unwrap();

    let handle = FolderHandle::capture(&original).unwrap();
    let json = serde_json::to_string(&handle).unwrap();

    let renamed = temp.path().join("renamed");
    std::fs::rename(&original, &renamed).unwrap();

    let restored: FolderHandle = serde_json::from_str(&json).unwrap();
    let resolved = restored.resolve();
    assert!(resolved.stale);
    assert_eq!(resolved.path, renamed.canonicalize().unwrap());
}

#[test]
fn a_vanished_folder_keeps_the_handle_usable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("inbox");
    std::fs::create_dir(&dir).unwrap();
    let handle = FolderHandle::capture(&dir).unwrap();
    let stored = handle.stored_path().to_path_buf();

    std::fs::remove_dir(&dir).unwrap();
    let resolved = handle.resolve();
    assert!(resolved.stale);
    assert_eq!(resolved.path, stored);

    // A recreated folder at the same path is a different directory;
    // enumeration still proceeds against it best-effort.
    std::fs::create_dir(&dir).unwrap();
    let resolved = handle.resolve();
    assert_eq!(resolved.path, stored);
}
