//! Tests for the invocation journal

use super::*;
use tempfile::TempDir;

#[test]
fn test_create_dir_all_tracks_new_dirs_only() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("modules");
    fs::create_dir_all(&existing).unwrap();

    let mut transaction = Transaction::new();
    let target = existing.join("enemies/sprites");
    transaction.create_dir_all(&target).unwrap();

    assert!(target.is_dir());
    assert_eq!(
        transaction.created_dirs,
        vec![existing.join("enemies"), existing.join("enemies/sprites")]
    );
    transaction.commit();
}

#[test]
fn test_commit_keeps_everything() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("out");
    let file = dir.join("module");

    let mut transaction = Transaction::new();
    transaction.create_dir_all(&dir).unwrap();
    fs::write(&file, "<module/>").unwrap();
    transaction.track_file_created(&file);
    transaction.commit();

    assert!(file.exists());
}

#[test]
fn test_drop_removes_created_files_and_empty_dirs() {
    let temp = TempDir::new().unwrap();
    let module_dir = temp.path().join("modules/enemies");
    let file = module_dir.join("module");

    {
        let mut transaction = Transaction::new();
        transaction
            .create_dir_all(&module_dir.join("sprites"))
            .unwrap();
        fs::write(&file, "<module/>").unwrap();
        transaction.track_file_created(&file);
    }

    assert!(!file.exists());
    assert!(!temp.path().join("modules").exists());
}

#[test]
fn test_drop_after_moves_leaves_files_in_place() {
    let temp = TempDir::new().unwrap();
    let module_dir = temp.path().join("modules/enemies");
    let file = module_dir.join("module");
    let moved = module_dir.join("sprites/spr_grunt.sprite.gmx");

    {
        let mut transaction = Transaction::new();
        transaction
            .create_dir_all(&module_dir.join("sprites"))
            .unwrap();
        transaction
            .create_dir_all(&module_dir.join("rooms"))
            .unwrap();
        fs::write(&file, "<module/>").unwrap();
        transaction.track_file_created(&file);
        fs::write(&moved, "sprite").unwrap();
        transaction.track_move(temp.path().join("sprites/spr_grunt.sprite.gmx"), &moved);
        assert_eq!(transaction.applied_moves().len(), 1);
    }

    assert!(file.exists());
    assert!(moved.exists());
    // empty directories are still cleaned up
    assert!(!module_dir.join("rooms").exists());
}

#[test]
fn test_existing_dirs_are_never_removed() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("sprites");
    fs::create_dir_all(&existing).unwrap();

    {
        let mut transaction = Transaction::new();
        transaction.create_dir_all(&existing).unwrap();
    }

    assert!(existing.is_dir());
}
