//! File discovery module
//!
//! This module contains the selection criteria, the filename matcher and the
//! source tree scanner.

mod criteria;
mod matcher;
mod scanner;

pub use criteria::{SelectionCriteria, lower_bound, upper_bound};
pub use matcher::{
    Verdict, classify, extract_progressive, is_selected, matches_prefix, matches_suffix,
};
pub use scanner::{FileInfo, ScanReport, scan_directory};
