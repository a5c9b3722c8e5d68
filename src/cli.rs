use std::ffi::OsString;
use std::path::PathBuf;

use clap::{
    Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::config::Settings;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DESTINATION_HELP, DRY_RUN_HELP, FROM_HELP,
    LOCAL_LOGGING_HELP, LOG_FILE_HELP, PREFIX_HELP, SOURCE_HELP, SUFFIX_HELP, TO_HELP,
    VERBOSE_HELP,
};
use crate::discovery::SelectionCriteria;
use crate::errors::{Result, generic_error, missing_argument_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;
use crate::workflow::{RunOptions, check_source};

/// Builds the command-line interface
///
/// Defines the positional arguments, in order:
/// - `source`: Directory tree to copy the pictures from
/// - `destination`: Directory to copy the pictures to
/// - `from`: Lowest progressive number, inclusive
/// - `to`: Highest progressive number, inclusive
/// - `suffix`: Case-insensitive filename suffix
/// - `prefix`: Case-sensitive filename prefix
///
/// and the options `config`, `dry`, `verbose`, `log_file` and `log_locally`.
///
/// Every positional argument is optional to the parser. The required ones
/// are checked by [`resolve_run_options`] so that their absence is reported
/// with the documented exit code.
pub fn build_command() -> Command {
    let positional = |name: &'static str, help: &'static str| Arg::new(name).help(help);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .requires("log_file")
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .allow_negative_numbers(true)
        .arg(positional("source", SOURCE_HELP).value_hint(clap::ValueHint::DirPath))
        .arg(positional("destination", DESTINATION_HELP).value_hint(clap::ValueHint::DirPath))
        .arg(positional("from", FROM_HELP))
        .arg(positional("to", TO_HELP))
        .arg(positional("suffix", SUFFIX_HELP))
        .arg(positional("prefix", PREFIX_HELP))
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments
///
/// # Errors
/// Returns the parser's error, which also covers `--help` and `--version`
pub fn get_matches() -> std::result::Result<ArgMatches, clap::Error> {
    build_command().try_get_matches()
}

/// Parses the given arguments, the first one being the program name
///
/// # Errors
/// Returns the parser's error
pub fn get_matches_from<I, T>(args: I) -> std::result::Result<ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_command().try_get_matches_from(args)
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the path of the settings file
pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Gets the log file, if one was asked for
///
/// The file lives in the configuration directory unless `--log-locally`
/// is given.
///
/// # Errors
/// Returns an error if the configuration directory cannot be created
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };
    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}

/// Turns the positional arguments into the options of a run
///
/// Checks are made in this order, before anything is written:
/// 1. the source is given (exit code 1)
/// 2. the source exists (exit code 2) and is a directory (exit code 3)
/// 3. the upper bound is a positive integer (exit code 1)
///
/// Empty destination or prefix values fall back to the settings.
///
/// # Errors
/// Returns the first failed check
pub fn resolve_run_options(matches: &ArgMatches, settings: &Settings) -> Result<RunOptions> {
    let value = |name: &str| {
        matches
            .get_one::<String>(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    };

    let source = value("source")
        .map(PathBuf::from)
        .ok_or_else(|| missing_argument_error("source"))?;
    check_source(&source)?;

    let destination = value("destination")
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.destination.clone());
    let prefix = value("prefix").unwrap_or(settings.prefix.as_str());
    if prefix.is_empty() {
        return Err(generic_error("The filename prefix must not be empty"));
    }

    let criteria =
        SelectionCriteria::from_arguments(prefix, value("suffix"), value("from"), value("to"))?;

    Ok(RunOptions {
        source,
        destination,
        criteria,
        dry_run: matches.get_flag("dry"),
    })
}
