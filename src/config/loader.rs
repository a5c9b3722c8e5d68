//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating the
//! settings file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;
use shellexpand::tilde;

use crate::errors::config_parsing_error;
use crate::utils::project_folder;

use super::model::Settings;

/// Loads the settings from a file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid YAML or fails
/// validation
pub fn load_settings(file: &Path) -> Result<Settings> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let settings = parse_settings(&content_str).with_context(|| {
        format!(
            "Failed to parse configuration file {}. Please check the YAML syntax",
            file.display()
        )
    })?;

    settings.validate()?;

    Ok(settings)
}

/// Parses settings from YAML text
///
/// An empty document yields the default settings.
///
/// # Errors
/// Returns [`crate::Error::ConfigParsing`] when the text is not a valid
/// settings document
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings = from_str(content)
        .map_err(|e| config_parsing_error(e, "the document does not describe valid settings"))?;
    Ok(settings)
}

/// Resolves the settings for a run
///
/// The given path is used when it exists, then the file of the same name in
/// the platform configuration directory. When neither exists the built-in
/// defaults apply.
///
/// # Errors
/// Returns an error if a settings file exists but cannot be loaded
pub fn read_or_default(config: &Path) -> Result<Settings> {
    match locate_config(config) {
        Some(path) => {
            info!("Reading settings from \"{}\"", path.display());
            load_settings(&path)
        }
        None => {
            debug!(
                "No configuration file found for \"{}\", using defaults",
                config.display()
            );
            Ok(Settings::default())
        }
    }
}

fn locate_config(config: &Path) -> Option<PathBuf> {
    if config.exists() {
        return Some(config.to_path_buf());
    }
    if config.is_absolute() {
        return None;
    }

    let folder = project_folder().ok()?;
    let candidate = folder.config_dir().join(config);
    candidate.exists().then_some(candidate)
}

/// Expands a leading `~` in a single path segment
pub(crate) fn expand_segment(segment: &str) -> String {
    let mut p = tilde(segment).to_string();
    if p.ends_with(':') {
        p += "\\";
    }
    p
}

/// Deserializes a value from an array of segments to a PathBuf
///
/// A plain string is accepted as well. Every segment has `~` expanded.
pub fn deserialize_from_array_to_pathbuf<'de, D>(
    deserializer: D,
) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PathBufVisitor;

    impl<'de> serde::de::Visitor<'de> for PathBufVisitor {
        type Value = PathBuf;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or an array of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(PathBuf::from(expand_segment(value)))
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut path = PathBuf::new();
            while let Some(segment) = seq.next_element::<String>()? {
                path.push(expand_segment(&segment));
            }
            Ok(path)
        }
    }

    deserializer.deserialize_any(PathBufVisitor)
}
