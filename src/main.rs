//! # path-size
//!
//! A small CLI tool that prints the size of a file or directory.
//!
//! ## Usage
//!
//! ```bash
//! # Size of the regular files directly inside a directory
//! path-size ~/Downloads
//!
//! # Whole tree, hidden entries included, in human-readable units
//! path-size -r -a -H ~/Projects
//! ```
//!
//! Output is a single line of the form `<size>\t<path>`.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use log::debug;
use path_size::{FileConfig, SizeCalculator, format_size};
use std::{path::PathBuf, process::exit};

/// Entry point for the path-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns the first filesystem error hit while calculating the size.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let (file_config, config_file) = load_config();

    init_logger(args.verbose(&file_config));

    if let Some(config_file) = config_file {
        debug!("loaded config from {}", config_file.display());
    }

    let policy = args.traversal_policy(&file_config);
    let human = args.human(&file_config);
    let path = args.path();

    let size = SizeCalculator::new(policy).calculate(path)?;

    println!("{}\t{}", format_size(size, human), path.display());

    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
///
/// Also returns the path of the file the values came from, if any, so it can
/// be logged once the logger is up.
fn load_config() -> (FileConfig, Option<PathBuf>) {
    let Some(path) = FileConfig::find() else {
        return (FileConfig::default(), None);
    };

    match FileConfig::load_from(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            (FileConfig::default(), None)
        }
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `verbose`.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
