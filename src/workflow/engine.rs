//! Workflow engine
//!
//! This module contains the engine that takes a run from the source checks
//! through the selective copy to the flattened destination.

use std::collections::HashSet;
use std::fs::{create_dir_all, symlink_metadata};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, error, info};

use crate::discovery::{SelectionCriteria, scan_directory};
use crate::errors::{self, not_a_directory_error, source_not_found_error};
use crate::utils::is_within;

use super::context::{PlannedOperation, RunState, WorkflowContext};
use super::copier::copy_selected;
use super::flattener::flatten;

/// Options for a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory tree the pictures are taken from
    pub source: PathBuf,
    /// Directory the pictures end up in
    pub destination: PathBuf,
    /// Which files to take
    pub criteria: SelectionCriteria,
    /// Whether to only report what would be copied
    pub dry_run: bool,
}

/// Checks that the source exists and is a directory
///
/// # Errors
/// Returns [`errors::Error::SourceNotFound`] or
/// [`errors::Error::NotADirectory`]
pub fn check_source(source: &Path) -> errors::Result<()> {
    if !source.exists() {
        return Err(source_not_found_error(source.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(not_a_directory_error(source.to_path_buf()));
    }
    Ok(())
}

/// Copies the selected pictures and flattens the destination
///
/// This function orchestrates the workflow steps:
/// 1. Check the source and create the destination
/// 2. Scan the source tree and copy the selected files, keeping their
///    relative paths and leaving existing files alone
/// 3. Move every nested file up into the destination root and remove the
///    emptied directories
///
/// In dry-run mode only the scan runs and the planned copies are recorded.
///
/// # Returns
/// * `Result<WorkflowContext>` - The context with statistics. A destination
///   inside the source, or an I/O failure during steps 2 and 3, is logged and
///   leaves the context in [`RunState::Failed`] rather than returning an
///   error.
///
/// # Errors
/// * Returns an error if the source is unusable or the destination cannot be
///   created
pub fn process_files(options: &RunOptions) -> Result<WorkflowContext> {
    check_source(&options.source)?;

    let mut context = WorkflowContext::new(options.dry_run);

    if is_within(&options.destination, &options.source) {
        let reason = format!(
            "Cannot copy \"{}\" into its own subdirectory \"{}\"",
            options.source.display(),
            options.destination.display()
        );
        error!("{reason}");
        context.fail(reason);
        return Ok(context);
    }

    info!(
        "Looking for files to copy from source directory \"{}\"",
        options.source.display()
    );

    if options.dry_run {
        plan(options, &mut context)?;
        return Ok(context);
    }

    create_dir_all(&options.destination).with_context(|| {
        format!(
            "Failed to create destination directory \"{}\"",
            options.destination.display()
        )
    })?;
    info!("Targeting directory \"{}\"", options.destination.display());
    info!("{}", options.criteria);

    let start_time = Instant::now();

    context.enter(RunState::Copying);
    if let Err(e) = copy_phase(options, &mut context) {
        error!(
            "An error occurred while copying the files from \"{}\" to \"{}\": {e}",
            options.source.display(),
            options.destination.display()
        );
        context.fail(e.to_string());
        context.elapsed = start_time.elapsed();
        return Ok(context);
    }

    context.enter(RunState::Flattening);
    if let Err(e) = flatten(&options.destination, &mut context.stats) {
        error!(
            "An error occurred while flattening \"{}\": {e}",
            options.destination.display()
        );
        context.fail(e.to_string());
        context.elapsed = start_time.elapsed();
        return Ok(context);
    }

    context.elapsed = start_time.elapsed();
    context.enter(RunState::Done);
    debug!("{:?}", context.stats);
    info!(
        "Copy finished! {} copied, {} already present. Elapsed: {} s",
        context.stats.files_copied,
        context.stats.files_skipped,
        context.elapsed.as_secs_f64()
    );

    Ok(context)
}

fn copy_phase(options: &RunOptions, context: &mut WorkflowContext) -> errors::Result<()> {
    let report = scan_directory(&options.source, &options.criteria)?;
    context.stats.files_scanned = report.files_scanned;
    context.stats.files_matched = report.selected.len();
    context.stats.progressive_warnings = report.unparseable;

    copy_selected(&report.selected, &options.destination, &mut context.stats)
}

fn plan(options: &RunOptions, context: &mut WorkflowContext) -> Result<()> {
    info!("{} (dry run)", options.criteria);

    let report = scan_directory(&options.source, &options.criteria)?;
    context.stats.files_scanned = report.files_scanned;
    context.stats.files_matched = report.selected.len();
    context.stats.progressive_warnings = report.unparseable;

    let mut planned_names = HashSet::new();
    for file in report.selected {
        let destination = options.destination.join(&file.filename);
        // the copier checks the mirrored path, flattening checks the root
        let already_present = symlink_metadata(options.destination.join(&file.relative)).is_ok();
        let nested = file.relative.parent().is_some_and(|p| !p.as_os_str().is_empty());
        let replaces_existing = !already_present
            && nested
            && (symlink_metadata(&destination).is_ok()
                || planned_names.contains(&file.filename));
        if !already_present {
            planned_names.insert(file.filename.clone());
        }
        context.add_planned_operation(PlannedOperation {
            already_present,
            replaces_existing,
            source: file.path,
            destination,
        });
    }
    context.enter(RunState::Done);

    if context.planned_operations.is_empty() {
        info!("No pictures match the given range");
        return Ok(());
    }

    println!("\nPictures to be copied:");
    println!("----------------------");
    for op in &context.planned_operations {
        println!("  From: {}", op.source.display());
        if op.already_present {
            println!("  To:   {} (already present, skipped)", op.destination.display());
        } else if op.replaces_existing {
            println!(
                "  To:   {} (replaces a file of the same name)",
                op.destination.display()
            );
        } else {
            println!("  To:   {}", op.destination.display());
        }
    }
    println!("\nSummary:");
    println!("--------");
    println!("  Files scanned:  {}", context.stats.files_scanned);
    println!("  Files matched:  {}", context.stats.files_matched);
    println!("\nRun without --dry flag to copy these pictures.");

    Ok(())
}
