use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::constants::{EXIT_SOURCE_MISSING, EXIT_SOURCE_NOT_DIRECTORY, EXIT_USAGE};

/// Custom error type for the Pictures Range application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a required command-line argument is absent
    MissingArgument { name: String },
    /// Error when a command-line argument cannot be used
    InvalidArgument { name: String, value: String },
    /// Error when the source directory does not exist
    SourceNotFound { path: PathBuf },
    /// Error when the source path is not a directory
    NotADirectory { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    /// Process exit code reported for this error
    ///
    /// Usage errors map to 1, a missing source to 2 and a source that is not
    /// a directory to 3. Everything else is reported as a usage failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceNotFound { .. } => EXIT_SOURCE_MISSING,
            Error::NotADirectory { .. } => EXIT_SOURCE_NOT_DIRECTORY,
            _ => EXIT_USAGE,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::MissingArgument { name } => {
                write!(f, "Missing required argument: {name}")
            }
            Error::InvalidArgument { name, value } => {
                write!(f, "Invalid {name}: \"{value}\"")
            }
            Error::SourceNotFound { path } => {
                write!(
                    f,
                    "Source directory \"{}\" does not exist. Please correct it before retrying",
                    path.display()
                )
            }
            Error::NotADirectory { path } => {
                write!(
                    f,
                    "The provided source path \"{}\" is not a directory",
                    path.display()
                )
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the Pictures Range application
///
/// # Examples
/// ```
/// use pictures_range::prelude::{Result, generic_error};
///
/// fn example_function(ok: bool) -> Result<String> {
///     if ok {
///         Ok("success".to_string())
///     } else {
///         Err(generic_error("Something went wrong"))
///     }
/// }
///
/// assert!(example_function(true).is_ok());
/// assert!(example_function(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a missing argument error
pub fn missing_argument_error(name: &str) -> Error {
    Error::MissingArgument {
        name: name.to_string(),
    }
}

/// Helper function to create an invalid argument error
pub fn invalid_argument_error(name: &str, value: &str) -> Error {
    Error::InvalidArgument {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Helper function to create a missing source error
pub fn source_not_found_error(path: PathBuf) -> Error {
    Error::SourceNotFound { path }
}

/// Helper function to create a source-is-not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
