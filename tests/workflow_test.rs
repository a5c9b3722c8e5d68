use std::collections::BTreeSet;
use std::fs::{self, File, create_dir_all};
use std::path::Path;

use pictures_range::discovery::SelectionCriteria;
use pictures_range::workflow::{RunOptions, RunState, process_files};
use tempfile::tempdir;

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

fn no_subdirectories(dir: &Path) -> bool {
    fs::read_dir(dir)
        .unwrap()
        .all(|e| !e.unwrap().file_type().unwrap().is_dir())
}

#[test]
fn test_nested_file_lands_in_destination_root() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("destination");
    create_dir_all(source.join("first/second")).unwrap();
    File::create(source.join("first/second/IMG_7.jpg")).unwrap();

    let options = RunOptions {
        source: source.clone(),
        destination: destination.clone(),
        criteria: SelectionCriteria::new("IMG_", Some("JPG"), 1, 10),
        dry_run: false,
    };
    let context = process_files(&options).expect("Run should succeed");

    assert_eq!(context.state, RunState::Done);
    assert!(destination.join("IMG_7.jpg").is_file());
    assert!(!destination.join("first").exists());
    assert!(!destination.join("first/second").exists());
    assert_eq!(context.stats.files_moved, 1);
    assert_eq!(context.stats.directories_removed, 2);
    // the source is left untouched
    assert!(source.join("first/second/IMG_7.jpg").is_file());
}

#[test]
fn test_rerun_skips_existing_files() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("destination");
    create_dir_all(&source).unwrap();
    create_dir_all(&destination).unwrap();
    fs::write(source.join("IMG_1.jpg"), "fresh").unwrap();
    fs::write(source.join("IMG_2.jpg"), "fresh").unwrap();
    fs::write(destination.join("IMG_1.jpg"), "kept").unwrap();
    fs::write(destination.join("unrelated.txt"), "kept").unwrap();

    let options = RunOptions {
        source,
        destination: destination.clone(),
        criteria: SelectionCriteria::new("IMG_", None, 0, 5),
        dry_run: false,
    };

    let first = process_files(&options).expect("First run should succeed");
    assert_eq!(first.state, RunState::Done);
    assert_eq!(first.stats.files_copied, 1);
    assert_eq!(first.stats.files_skipped, 1);
    assert_eq!(fs::read_to_string(destination.join("IMG_1.jpg")).unwrap(), "kept");

    let second = process_files(&options).expect("Second run should succeed");
    assert_eq!(second.state, RunState::Done);
    assert_eq!(second.stats.files_copied, 0);
    assert_eq!(second.stats.files_skipped, 2);

    assert_eq!(
        file_names(&destination),
        BTreeSet::from([
            "IMG_1.jpg".to_string(),
            "IMG_2.jpg".to_string(),
            "unrelated.txt".to_string()
        ])
    );
}

#[test]
fn test_destination_only_holds_selected_basenames() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("destination");
    create_dir_all(source.join("a/b/c")).unwrap();
    create_dir_all(source.join("d")).unwrap();
    create_dir_all(source.join("empty")).unwrap();
    for (dir, name) in [
        ("", "IMG_0.jpg"),
        ("a", "IMG_1.jpg"),
        ("a/b", "IMG_2.jpg"),
        ("a/b/c", "IMG_3.jpg"),
        ("d", "IMG_40.jpg"),
        ("d", "IMG_four.jpg"),
        ("d", "notes.txt"),
    ] {
        File::create(source.join(dir).join(name)).unwrap();
    }

    let options = RunOptions {
        source,
        destination: destination.clone(),
        criteria: SelectionCriteria::new("IMG_", None, 0, 3),
        dry_run: false,
    };
    let context = process_files(&options).expect("Run should succeed");

    assert!(no_subdirectories(&destination));
    assert_eq!(
        file_names(&destination),
        BTreeSet::from([
            "IMG_0.jpg".to_string(),
            "IMG_1.jpg".to_string(),
            "IMG_2.jpg".to_string(),
            "IMG_3.jpg".to_string(),
        ])
    );
    assert_eq!(context.stats.files_scanned, 7);
    assert_eq!(context.stats.files_matched, 4);
    assert_eq!(context.stats.progressive_warnings, 1);
}

#[test]
fn test_copy_failure_ends_in_failed_state() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("destination");
    create_dir_all(source.join("locked")).unwrap();
    File::create(source.join("locked/IMG_1.jpg")).unwrap();
    create_dir_all(&destination).unwrap();
    // a file where the mirrored directory should go
    File::create(destination.join("locked")).unwrap();

    let options = RunOptions {
        source,
        destination: destination.clone(),
        criteria: SelectionCriteria::new("IMG_", None, 0, 5),
        dry_run: false,
    };
    let context = process_files(&options).expect("Copy failures are reported in the context");

    assert_eq!(context.state, RunState::Failed);
    assert!(context.failure.is_some());
    // flattening never ran
    assert!(destination.join("locked").is_file());
}

#[cfg(unix)]
#[test]
fn test_dangling_link_is_copied_as_a_link() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("destination");
    create_dir_all(source.join("day")).unwrap();
    File::create(source.join("IMG_1.jpg")).unwrap();
    std::os::unix::fs::symlink(source.join("gone.jpg"), source.join("day/IMG_2.jpg")).unwrap();
    File::create(source.join("IMG_3.jpg")).unwrap();

    let options = RunOptions {
        source: source.clone(),
        destination: destination.clone(),
        criteria: SelectionCriteria::new("IMG_", None, 0, 5),
        dry_run: false,
    };
    let context = process_files(&options).expect("Run should succeed");

    assert_eq!(context.state, RunState::Done);
    assert_eq!(context.stats.files_copied, 3);
    assert!(no_subdirectories(&destination));
    assert_eq!(
        fs::read_link(destination.join("IMG_2.jpg")).unwrap(),
        source.join("gone.jpg")
    );
}
