/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "pictures_range";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Destination used when neither the command line nor the configuration names one
pub const DEFAULT_DEST_PATH: [&str; 3] = ["~", "Pictures", "Imported"];

/// Prefix used when neither the command line nor the configuration names one
pub const DEFAULT_PICTURES_PREFIX: &str = "IMG_";

/// Exit code for a missing source or an invalid upper bound
pub const EXIT_USAGE: i32 = 1;

/// Exit code for a source directory that does not exist
pub const EXIT_SOURCE_MISSING: i32 = 2;

/// Exit code for a source path that is not a directory
pub const EXIT_SOURCE_NOT_DIRECTORY: i32 = 3;

pub const SOURCE_HELP: &str = "Directory tree to look for pictures in";
pub const DESTINATION_HELP: &str =
    "Directory the pictures are copied to (defaults to the configured destination)";
pub const FROM_HELP: &str = "Lowest progressive number to copy, inclusive (defaults to 0)";
pub const TO_HELP: &str = "Highest progressive number to copy, inclusive";
pub const SUFFIX_HELP: &str = "Only copy files ending with this suffix (case-insensitive)";
pub const PREFIX_HELP: &str = "Filename prefix preceding the progressive number";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "List the pictures that would be copied without copying them";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the current directory instead of the configuration directory";
