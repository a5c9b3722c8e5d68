//! Workflow context
//!
//! This module defines the state carried through a run.

use std::path::PathBuf;
use std::time::Duration;

/// Stage a run has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Copying,
    Flattening,
    Done,
    /// An I/O error stopped the run; the destination may hold a partial tree
    Failed,
}

/// Represents a planned copy for dry-run mode
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOperation {
    /// The source path of the file
    pub source: PathBuf,
    /// Where the file ends up once the destination is flattened
    pub destination: PathBuf,
    /// Whether a file already sits at the mirrored path and would be left alone
    pub already_present: bool,
    /// Whether flattening would move this file over one of the same name
    pub replaces_existing: bool,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowStats {
    /// Number of files looked at in the source tree
    pub files_scanned: usize,
    /// Number of files selected by the criteria
    pub files_matched: usize,
    /// Number of files copied
    pub files_copied: usize,
    /// Number of files skipped because the target already existed
    pub files_skipped: usize,
    /// Number of files moved up into the destination root
    pub files_moved: usize,
    /// Number of directories removed while flattening
    pub directories_removed: usize,
    /// Number of files whose progressive number could not be read
    pub progressive_warnings: usize,
    /// Number of moves that replaced a file of the same name
    pub collisions: usize,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Whether file operations are only simulated
    pub dry_run: bool,
    /// Current stage of the run
    pub state: RunState,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
    /// Reason the run failed, if it did
    pub failure: Option<String>,
    /// Time spent copying and flattening
    pub elapsed: Duration,
}

impl WorkflowContext {
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            state: RunState::Idle,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
            failure: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Moves the run to the next stage
    pub fn enter(&mut self, state: RunState) {
        log::trace!("Run state: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Marks the run as failed
    pub fn fail(&mut self, reason: String) {
        self.failure = Some(reason);
        self.enter(RunState::Failed);
    }

    pub fn is_failed(&self) -> bool {
        self.state == RunState::Failed
    }
}
