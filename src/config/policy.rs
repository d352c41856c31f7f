//! Traversal policy for size calculation.
//!
//! A [`TraversalPolicy`] decides which entries below a directory contribute to
//! its size. It is fixed for the duration of one calculation.

/// How a directory is walked when its size is calculated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalPolicy {
    /// Descend into subdirectories. When `false`, only regular files directly
    /// inside the root directory are counted.
    pub recursive: bool,

    /// Count entries whose name starts with `.`. A skipped hidden directory
    /// takes its whole subtree with it.
    pub include_hidden: bool,
}

impl TraversalPolicy {
    #[must_use]
    pub const fn new(recursive: bool, include_hidden: bool) -> Self {
        Self {
            recursive,
            include_hidden,
        }
    }

    /// Maximum walk depth below the root for this policy.
    #[must_use]
    pub const fn max_depth(self) -> usize {
        if self.recursive { usize::MAX } else { 1 }
    }
}
