//! Directory scanning functionality
//!
//! This module walks the source tree and collects the files selected by the
//! criteria. Directories are always descended into.

use std::fs::{read_dir, symlink_metadata};
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::{Result, file_operation_error};
use crate::utils::file_name;

use super::criteria::SelectionCriteria;
use super::matcher::{Verdict, classify};

/// A file picked up by the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path of the file in the source tree
    pub path: PathBuf,
    /// Path relative to the source root
    pub relative: PathBuf,
    /// The filename of the file
    pub filename: String,
    /// Progressive number read from the filename
    pub progressive: i64,
    /// Whether the entry is a symbolic link, copied as a link rather than followed
    pub is_symlink: bool,
}

/// Everything a scan found
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Selected files, in directory-walk order
    pub selected: Vec<FileInfo>,
    /// Number of files looked at
    pub files_scanned: usize,
    /// Number of files matching prefix and suffix without a readable progressive
    pub unparseable: usize,
}

/// Scans a directory tree for files matching the criteria
///
/// Entries are visited in name order. Symbolic links are judged by their own
/// name and never followed into.
///
/// # Errors
/// Returns an error if a directory cannot be listed or an entry cannot be
/// inspected
pub fn scan_directory(source: &Path, criteria: &SelectionCriteria) -> Result<ScanReport> {
    debug!("Scanning directory: {}", source.display());

    let mut report = ScanReport::default();
    visit(source, source, criteria, &mut report)?;

    debug!(
        "Found {} matching files out of {}",
        report.selected.len(),
        report.files_scanned
    );

    Ok(report)
}

fn visit(
    root: &Path,
    directory: &Path,
    criteria: &SelectionCriteria,
    report: &mut ScanReport,
) -> Result<()> {
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
            visit(root, &path, criteria, report)?;
            continue;
        }

        report.files_scanned += 1;
        let filename = file_name(&path)?;
        match classify(filename, criteria) {
            Verdict::Selected(progressive) => {
                trace!("Selected {} (progressive {progressive})", path.display());
                let relative = path
                    .strip_prefix(root)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| PathBuf::from(filename));
                report.selected.push(FileInfo {
                    filename: filename.to_string(),
                    relative,
                    progressive,
                    is_symlink: metadata.file_type().is_symlink(),
                    path,
                });
            }
            Verdict::Unparseable => report.unparseable += 1,
            Verdict::Rejected => {}
        }
    }

    Ok(())
}
