//! Command-line interface definition and argument parsing.
//!
//! This module defines the command-line arguments using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults for flags that were not given.

use std::path::{Path, PathBuf};

use clap::Parser;

use path_size::{FileConfig, TraversalPolicy};

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "path-size")]
#[command(about = "Print the size of a file or directory")]
#[command(version)]
#[command(author)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// File or directory to measure
    path: PathBuf,

    /// Descend into subdirectories
    ///
    /// Without this flag only the regular files directly inside a directory
    /// are counted.
    #[arg(short = 'r', long, overrides_with = "no_recursive")]
    recursive: bool,

    /// Only count files directly inside the directory, even if the config
    /// file enables recursion
    #[arg(long, overrides_with = "recursive")]
    no_recursive: bool,

    /// Print sizes with auto-scaled binary units (KB, MB, GB, ...)
    #[arg(short = 'H', long, overrides_with = "no_human")]
    human: bool,

    /// Print raw byte counts, even if the config file enables --human
    #[arg(long, overrides_with = "human")]
    no_human: bool,

    /// Include files and directories whose name starts with '.'
    #[arg(short = 'a', long, overrides_with = "no_all")]
    all: bool,

    /// Skip hidden entries, even if the config file enables --all
    #[arg(long, overrides_with = "all")]
    no_all: bool,

    /// Log traversal details to stderr
    ///
    /// The `RUST_LOG` environment variable overrides the level set here.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// The path to measure, as given on the command line.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the traversal policy from CLI flags and config file defaults.
    #[must_use]
    pub fn traversal_policy(&self, config: &FileConfig) -> TraversalPolicy {
        TraversalPolicy::new(
            resolve_flag(self.recursive, self.no_recursive, config.recursive),
            resolve_flag(self.all, self.no_all, config.all),
        )
    }

    /// Whether sizes should be printed in human-readable units.
    #[must_use]
    pub fn human(&self, config: &FileConfig) -> bool {
        resolve_flag(self.human, self.no_human, config.human)
    }

    /// Whether debug logging is enabled.
    #[must_use]
    pub fn verbose(&self, config: &FileConfig) -> bool {
        self.verbose || config.verbose.unwrap_or(false)
    }
}

/// Merge a `--flag` / `--no-flag` pair with its config file default.
///
/// clap's `overrides_with` guarantees at most one of the pair is set.
const fn resolve_flag(on: bool, off: bool, config: Option<bool>) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        matches!(config, Some(true))
    }
}
