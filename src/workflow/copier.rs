//! Selective copy
//!
//! Copies the selected files to the mirrored location under the destination,
//! never replacing a file that is already there.

use std::fs::{create_dir_all, symlink_metadata};
use std::io;
use std::path::Path;

use fs_extra::error::{Error as CopyError, ErrorKind as CopyErrorKind};
use fs_extra::file::{CopyOptions, copy};
use log::debug;

use crate::discovery::FileInfo;
use crate::errors::{Result, file_operation_error};

use super::context::WorkflowStats;

/// Copies every selected file below `destination`, keeping its relative path
///
/// A file already present at the target path is skipped without error.
/// Symbolic links are recreated as links, never followed.
///
/// # Errors
/// Returns an error on the first directory that cannot be created or file
/// that cannot be copied. Files copied before the failure stay in place.
pub fn copy_selected(
    files: &[FileInfo],
    destination: &Path,
    stats: &mut WorkflowStats,
) -> Result<()> {
    let options = CopyOptions::new().skip_exist(true);

    for file in files {
        let target = destination.join(&file.relative);

        if symlink_metadata(&target).is_ok() {
            debug!("Skipping {}: already present", target.display());
            stats.files_skipped += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir_all(parent)
                .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
        }

        if file.is_symlink {
            if copy_link(&file.path, &target)? {
                stats.files_copied += 1;
            }
            continue;
        }

        debug!(
            "Copying file: {} -> {}",
            file.path.display(),
            target.display()
        );
        copy(&file.path, &target, &options)
            .map_err(|e| file_operation_error(into_io_error(e), file.path.clone(), "copy"))?;
        stats.files_copied += 1;
    }

    Ok(())
}

#[cfg(unix)]
fn copy_link(source: &Path, target: &Path) -> Result<bool> {
    let link = std::fs::read_link(source)
        .map_err(|e| file_operation_error(e, source.to_path_buf(), "read link"))?;
    debug!(
        "Copying link: {} -> {} ({})",
        source.display(),
        target.display(),
        link.display()
    );
    std::os::unix::fs::symlink(&link, target)
        .map_err(|e| file_operation_error(e, target.to_path_buf(), "create link"))?;
    Ok(true)
}

#[cfg(not(unix))]
fn copy_link(source: &Path, _target: &Path) -> Result<bool> {
    log::warn!("Skipping symbolic link {}", source.display());
    Ok(false)
}

/// Recovers the I/O error kind from a copy error
fn into_io_error(err: CopyError) -> io::Error {
    let message = err.to_string();
    match err.kind {
        CopyErrorKind::Io(e) => e,
        CopyErrorKind::NotFound => io::Error::new(io::ErrorKind::NotFound, message),
        CopyErrorKind::PermissionDenied => {
            io::Error::new(io::ErrorKind::PermissionDenied, message)
        }
        CopyErrorKind::AlreadyExists => io::Error::new(io::ErrorKind::AlreadyExists, message),
        CopyErrorKind::Interrupted => io::Error::new(io::ErrorKind::Interrupted, message),
        _ => io::Error::other(message),
    }
}
