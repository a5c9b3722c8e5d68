//! Workflow module
//!
//! This module contains components for orchestrating the copy and the
//! flattening of the destination.

mod context;
mod copier;
mod engine;
mod flattener;

pub use context::{PlannedOperation, RunState, WorkflowContext, WorkflowStats};
pub use copier::copy_selected;
pub use engine::{RunOptions, check_source, process_files};
pub use flattener::flatten;
