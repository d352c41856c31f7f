//! Size calculation for files and directory trees.
//!
//! The [`SizeCalculator`] walks a path with `walkdir` under a
//! [`TraversalPolicy`] and sums the sizes of the regular files it is allowed
//! to see. Symbolic links are never followed, so a link is counted by its own
//! size when it is the root and ignored when found inside a directory.
//!
//! The walk is fail-fast: the first metadata or listing error aborts the
//! calculation and no partial total is returned.

use std::{fs, io, path::Path};

use log::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::TraversalPolicy,
    error::{Result, SizeError},
};

/// Calculates the size of a path under a fixed traversal policy.
///
/// The calculator holds no state besides its policy, so a single instance can
/// be reused for any number of paths.
#[derive(Clone, Debug, Default)]
pub struct SizeCalculator {
    /// Policy applied to every entry below the root
    policy: TraversalPolicy,
}

impl SizeCalculator {
    /// Create a new calculator with the given policy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use path_size::{SizeCalculator, TraversalPolicy};
    /// let calculator = SizeCalculator::new(TraversalPolicy::new(true, false));
    /// let bytes = calculator.calculate(std::path::Path::new("src"))?;
    /// # Ok::<(), path_size::SizeError>(())
    /// ```
    #[must_use]
    pub const fn new(policy: TraversalPolicy) -> Self {
        Self { policy }
    }

    /// The policy this calculator applies.
    #[must_use]
    pub const fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    /// Calculate the size of `path` in bytes.
    ///
    /// If `path` is not a directory its own size is returned. Otherwise the
    /// sizes of the regular files below it that pass the policy are summed.
    /// The root itself is never subject to the hidden-entry filter.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::NotFound`], [`SizeError::PermissionDenied`] or
    /// [`SizeError::Io`] for the first path whose metadata or listing cannot
    /// be read. Nothing is returned for the entries visited before it.
    pub fn calculate(&self, path: &Path) -> Result<u64> {
        let metadata = fs::symlink_metadata(path).map_err(|e| SizeError::from_io(path, e))?;

        if !metadata.is_dir() {
            debug!("{} is not a directory: {} bytes", path.display(), metadata.len());
            return Ok(metadata.len());
        }

        debug!(
            "walking {} (recursive: {}, hidden: {})",
            path.display(),
            self.policy.recursive,
            self.policy.include_hidden
        );

        let walker = WalkDir::new(path)
            .follow_links(false)
            .follow_root_links(false)
            .min_depth(1)
            .max_depth(self.policy.max_depth())
            .into_iter()
            .filter_entry(|entry| self.should_visit(entry));

        let mut total = 0u64;

        for entry in walker {
            let entry = entry.map_err(|e| SizeError::from_walk(path, e))?;
            total = accumulate(total, Self::entry_size(&entry)?, entry.path())?;
        }

        debug!("{} totals {total} bytes", path.display());

        Ok(total)
    }

    /// Decide whether an entry (and, for directories, its subtree) is walked.
    fn should_visit(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || self.policy.include_hidden || !is_hidden(entry) {
            return true;
        }

        trace!("skipping hidden entry {}", entry.path().display());
        false
    }

    /// Bytes contributed by a single walked entry.
    ///
    /// Only regular files count. Directories contribute through their
    /// children; links and special files contribute nothing.
    fn entry_size(entry: &DirEntry) -> Result<u64> {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            return Ok(0);
        }

        if !file_type.is_file() {
            trace!("skipping non-regular entry {}", entry.path().display());
            return Ok(0);
        }

        let metadata = entry
            .metadata()
            .map_err(|e| SizeError::from_walk(entry.path(), e))?;

        Ok(metadata.len())
    }
}

/// Calculate the size of `path` under `policy`.
///
/// Shorthand for `SizeCalculator::new(policy).calculate(path)`.
///
/// # Errors
///
/// See [`SizeCalculator::calculate`].
pub fn calculate_size(path: &Path, policy: TraversalPolicy) -> Result<u64> {
    SizeCalculator::new(policy).calculate(path)
}

/// Add `bytes` contributed by `path` to the running total.
fn accumulate(total: u64, bytes: u64, path: &Path) -> Result<u64> {
    total.checked_add(bytes).ok_or_else(|| SizeError::Io {
        path: path.to_path_buf(),
        source: io::Error::other("total size overflows u64"),
    })
}

/// Check whether an entry's name marks it as hidden.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}
