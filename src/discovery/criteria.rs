//! Selection criteria
//!
//! This module contains the immutable description of which pictures a run
//! should pick up, and the parsing of the range bounds given on the command
//! line.

use std::fmt;

use crate::errors::{Result, invalid_argument_error, missing_argument_error};

use super::matcher::parse_leading_integer;

/// Prefix, suffix and inclusive progressive range a file must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    prefix: String,
    suffix: Option<String>,
    range_from: i64,
    range_to: i64,
}

impl SelectionCriteria {
    /// Creates new criteria
    ///
    /// An empty suffix is the same as no suffix at all.
    pub fn new(prefix: &str, suffix: Option<&str>, range_from: i64, range_to: i64) -> Self {
        SelectionCriteria {
            prefix: prefix.to_string(),
            suffix: suffix.filter(|s| !s.is_empty()).map(str::to_string),
            range_from,
            range_to,
        }
    }

    /// Builds criteria from raw command-line values
    ///
    /// # Errors
    /// Returns an error if the upper bound is absent or not a positive integer
    pub fn from_arguments(
        prefix: &str,
        suffix: Option<&str>,
        range_from: Option<&str>,
        range_to: Option<&str>,
    ) -> Result<Self> {
        let range_to = upper_bound(range_to)?;
        let range_from = lower_bound(range_from);
        Ok(SelectionCriteria::new(prefix, suffix, range_from, range_to))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn range_from(&self) -> i64 {
        self.range_from
    }

    pub fn range_to(&self) -> i64 {
        self.range_to
    }

    /// Checks whether a progressive number lies within the inclusive range
    pub fn contains(&self, progressive: i64) -> bool {
        (self.range_from..=self.range_to).contains(&progressive)
    }
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ranging from {prefix}{from} to {prefix}{to}. Suffix: {suffix}",
            prefix = self.prefix,
            from = self.range_from,
            to = self.range_to,
            suffix = self
                .suffix
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| "any".to_string())
        )
    }
}

/// Parses the lower range bound, falling back to 0 when absent or not numeric
pub fn lower_bound(arg: Option<&str>) -> i64 {
    arg.and_then(parse_leading_integer).unwrap_or(0)
}

/// Parses the upper range bound
///
/// # Errors
/// Returns an error if the value is absent, not numeric, zero or negative
pub fn upper_bound(arg: Option<&str>) -> Result<i64> {
    let raw = arg.ok_or_else(|| missing_argument_error("upper bound"))?;
    match parse_leading_integer(raw) {
        Some(value) if value > 0 => Ok(value),
        _ => Err(invalid_argument_error("upper bound", raw)),
    }
}
