use std::process::exit;

use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;
use log::error;

use pictures_range::cli::{
    get_config_path, get_log_file, get_matches, get_verbosity, resolve_run_options,
};
use pictures_range::constants::EXIT_USAGE;
use pictures_range::prelude::*;

fn main() {
    setup_panic!();

    let matches = match get_matches() {
        Ok(matches) => matches,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            exit(EXIT_USAGE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("{e}");
            exit(EXIT_USAGE);
        }
    };
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
        exit(EXIT_USAGE);
    }

    if let Err(e) = run(&matches) {
        error!("{e:#}");
        let code = e
            .downcast_ref::<Error>()
            .map(Error::exit_code)
            .unwrap_or(EXIT_USAGE);
        exit(code);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let settings = read_or_default(&get_config_path(matches))?;
    let options = resolve_run_options(matches, &settings)?;

    let context = process_files(&options)?;

    // A failed copy has already been reported and, like a completed one,
    // ends with exit code 0.
    if !context.is_failed() && !context.dry_run {
        let message = format!("Pictures available in \"{}\"", options.destination.display());
        let colored_message = message.green().bold().to_string();
        log::info!("{}", format_message(&message, &colored_message));
    }

    Ok(())
}
