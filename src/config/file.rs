//! Configuration file support for persistent defaults.
//!
//! Settings are read from a TOML file located at
//! `~/.config/path-size/config.toml` (or the platform-specific equivalent).
//! Values in the file act as defaults for the command-line flags.
//!
//! # Layering
//!
//! The precedence order is: **CLI flag > config file > hardcoded default**.
//! A `true` in the file is switched back off with the matching `--no-*`
//! flag (`--no-recursive`, `--no-human`, `--no-all`).
//!
//! # Example config
//!
//! ```toml
//! recursive = true
//! human = true
//! all = false
//! verbose = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can tell which keys are present in the
/// file and fall back to the hardcoded defaults for the rest.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Descend into subdirectories by default
    pub recursive: Option<bool>,

    /// Print sizes with auto-scaled units by default
    pub human: Option<bool>,

    /// Include hidden entries by default
    pub all: Option<bool>,

    /// Enable debug logging by default
    pub verbose: Option<bool>,
}

impl FileConfig {
    /// Return the path to the configuration file.
    ///
    /// The file lives at `<config_dir>/path-size/config.toml`, where
    /// `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("path-size").join("config.toml"))
    }

    /// Return the configuration file path if the file exists.
    #[must_use]
    pub fn find() -> Option<PathBuf> {
        Self::config_path().filter(|path| path.is_file())
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
