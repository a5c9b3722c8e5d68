//! Destination flattening
//!
//! Moves every file found below the destination root up into the root and
//! removes the directories left behind.

use std::fs::{read_dir, remove_dir, rename, symlink_metadata};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{Result, file_operation_error};
use crate::utils::file_name;

use super::context::WorkflowStats;

/// Flattens the tree below `root` so that every file sits directly in it
///
/// Files already in `root` stay where they are. A nested file whose name is
/// already taken in `root` replaces it; a warning is logged for each such
/// collision.
///
/// # Errors
/// Returns an error if a listing, move or directory removal fails
pub fn flatten(root: &Path, stats: &mut WorkflowStats) -> Result<()> {
    flatten_into(root, root, stats)
}

fn flatten_into(directory: &Path, root: &Path, stats: &mut WorkflowStats) -> Result<()> {
    let mut entries: Vec<PathBuf> = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?;
    entries.sort();

    for path in entries {
        let metadata = symlink_metadata(&path)
            .map_err(|e| file_operation_error(e, path.clone(), "inspect"))?;

        if metadata.is_dir() {
            flatten_into(&path, root, stats)?;
            // post-order: the recursion above emptied it
            remove_dir(&path)
                .map_err(|e| file_operation_error(e, path.clone(), "remove directory"))?;
            debug!("Removed directory {}", path.display());
            stats.directories_removed += 1;
        } else if directory != root {
            let target = root.join(file_name(&path)?);
            if symlink_metadata(&target).is_ok() {
                warn!(
                    "{} replaces a file of the same name in {}",
                    path.display(),
                    root.display()
                );
                stats.collisions += 1;
            }
            rename(&path, &target).map_err(|e| file_operation_error(e, path.clone(), "move"))?;
            debug!("Moved {} -> {}", path.display(), target.display());
            stats.files_moved += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File, create_dir_all};
    use tempfile::tempdir;

    #[test]
    fn test_flatten_nested_tree() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        create_dir_all(root.join("a/b")).unwrap();
        create_dir_all(root.join("c")).unwrap();
        File::create(root.join("IMG_1.jpg")).unwrap();
        File::create(root.join("a/IMG_2.jpg")).unwrap();
        File::create(root.join("a/b/IMG_7.jpg")).unwrap();

        let mut stats = WorkflowStats::default();
        flatten(root, &mut stats).unwrap();

        let mut names: Vec<String> = fs::read_dir(root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["IMG_1.jpg", "IMG_2.jpg", "IMG_7.jpg"]);
        assert!(!root.join("a").exists());
        assert!(!root.join("c").exists());
        assert_eq!(stats.files_moved, 2);
        assert_eq!(stats.directories_removed, 3);
        assert_eq!(stats.collisions, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_flatten_collision_replaces_and_counts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        create_dir_all(root.join("x")).unwrap();
        fs::write(root.join("IMG_1.jpg"), "root").unwrap();
        fs::write(root.join("x/IMG_1.jpg"), "nested").unwrap();

        let mut stats = WorkflowStats::default();
        flatten(root, &mut stats).unwrap();

        assert_eq!(fs::read_to_string(root.join("IMG_1.jpg")).unwrap(), "nested");
        assert_eq!(stats.collisions, 1);
        assert!(!root.join("x").exists());
    }
}
