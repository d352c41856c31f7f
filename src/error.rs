//! Error types for size calculation.
//!
//! Every failure carries the path that caused it. Raw [`std::io::Error`]s and
//! [`walkdir::Error`]s are classified by their [`ErrorKind`] so callers can
//! tell a missing path from a permission problem without inspecting the
//! underlying OS error.

use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that can abort a size calculation.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The path (or an entry reached while walking it) does not exist.
    #[error("'{}': no such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// Reading metadata or listing a directory was denied.
    #[error("'{}': permission denied", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure.
    #[error("'{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SizeError {
    /// Classify an I/O error raised while accessing `path`.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();

        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Classify an error yielded by a directory walk rooted at `root`.
    ///
    /// `walkdir` attaches the failing path to most errors; when it does not,
    /// the walk root is reported instead.
    #[must_use]
    pub fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);

        match err.into_io_error() {
            Some(source) => Self::from_io(path, source),
            // Only produced when following symlinks, which the walk never does.
            None => Self::Io {
                path,
                source: io::Error::other("filesystem loop detected"),
            },
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Result alias for size calculation.
pub type Result<T> = std::result::Result<T, SizeError>;
