use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error, invalid_filename_error, path_operation_error};

/// Gets the final component of a path as a string
pub fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .ok_or_else(|| path_operation_error(path.to_path_buf(), "get filename"))
        .and_then(|os_str| {
            os_str
                .to_str()
                .ok_or_else(|| invalid_filename_error(path.to_path_buf()))
        })
}

/// Checks whether `inner` is `outer` or lies somewhere below it
///
/// Both paths are canonicalised when possible so that relative and
/// absolute spellings of the same directory compare equal. A path that
/// does not exist yet is resolved through its closest existing ancestor.
pub fn is_within(inner: &Path, outer: &Path) -> bool {
    let outer = outer
        .canonicalize()
        .unwrap_or_else(|_| outer.to_path_buf());
    resolve_existing(inner).starts_with(outer)
}

fn resolve_existing(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            resolve_existing(parent).join(name)
        }
        _ => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// Gets the platform directories of the application without creating them
pub(crate) fn project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

/// Gets the platform directories of the application, creating the
/// configuration directory when missing
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = project_folder()?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}
