//! Configuration types.
//!
//! This module holds the traversal policy that drives size calculation and
//! the optional configuration file that supplies flag defaults.

pub mod file;
pub mod policy;

pub use file::FileConfig;
pub use policy::TraversalPolicy;
