//! Configuration data structures
//!
//! This module contains the settings that supply the defaults for the
//! destination directory and the filename prefix.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{DEFAULT_DEST_PATH, DEFAULT_PICTURES_PREFIX};

use super::loader::{deserialize_from_array_to_pathbuf, expand_segment};

/// Settings read from the configuration file
///
/// Built once at startup and handed to the workflow by reference.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Destination used when none is given on the command line
    #[serde(default = "default_destination")]
    #[serde(deserialize_with = "deserialize_from_array_to_pathbuf")]
    pub destination: PathBuf,
    /// Prefix used when none is given on the command line
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            destination: default_destination(),
            prefix: default_prefix(),
        }
    }
}

impl Settings {
    /// Validates the settings
    ///
    /// # Errors
    /// Returns an error with a detailed message if the destination or the
    /// prefix is empty
    pub fn validate(&self) -> Result<()> {
        if self.destination.as_os_str().is_empty() {
            return Err(anyhow!(
                "No destination specified in configuration. Remove the key to use the default."
            ));
        }

        if self.prefix.is_empty() {
            return Err(anyhow!(
                "Empty prefix in configuration. Every picture name starts with a prefix, remove the key to use \"{DEFAULT_PICTURES_PREFIX}\"."
            ));
        }

        Ok(())
    }
}

fn default_destination() -> PathBuf {
    DEFAULT_DEST_PATH.iter().map(|s| expand_segment(s)).collect()
}

fn default_prefix() -> String {
    DEFAULT_PICTURES_PREFIX.to_string()
}
