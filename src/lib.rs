//! Copies a numbered range of pictures from a directory tree into one flat
//! directory.
//!
//! A file is picked when its name starts with the prefix, ends with the
//! optional suffix and carries a progressive number, right after the prefix,
//! that falls within the requested range. Selected files are copied with
//! their relative paths, existing files are never replaced, and the
//! destination is then flattened so that every picture sits in its root.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod utils;
pub mod workflow;

pub use errors::{Error, Result};

pub mod prelude {
    pub use crate::config::{Settings, read_or_default};
    pub use crate::discovery::{
        SelectionCriteria, extract_progressive, is_selected, matches_prefix, matches_suffix,
    };
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, invalid_argument_error,
        invalid_filename_error, missing_argument_error, not_a_directory_error,
        path_operation_error, source_not_found_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{RunOptions, RunState, WorkflowContext, process_files};
}
