//! # path-size
//!
//! Report the size of a file or directory.
//!
//! A file is reported by its own size. A directory is reported as the sum of
//! the regular files inside it, optionally descending into subdirectories and
//! optionally counting hidden entries (names starting with `.`). Sizes can be
//! printed as raw byte counts or scaled into binary units.
//!
//! ## Modules
//!
//! - [`calculator`]: directory walking and size accumulation
//! - [`format`]: byte count rendering
//! - [`config`]: traversal policy and configuration file
//! - [`error`]: error taxonomy

pub mod calculator;
pub mod config;
pub mod error;
pub mod format;

use std::path::Path;

pub use calculator::{SizeCalculator, calculate_size};
pub use config::{FileConfig, TraversalPolicy};
pub use error::SizeError;
pub use format::{SizeUnit, format_size};

/// Calculate the size of `path` and render it in one step.
///
/// # Errors
///
/// Returns the first [`SizeError`] encountered while walking `path`.
pub fn get_path_size(
    path: &Path,
    policy: TraversalPolicy,
    human: bool,
) -> error::Result<String> {
    let bytes = calculate_size(path, policy)?;
    Ok(format_size(bytes, human))
}
