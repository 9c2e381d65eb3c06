//! Build errors.
//!
//! Construction is deterministic and runs to completion or fails outright;
//! partial trees are never returned. Recoverable numerical oddities are not
//! errors - they are counted in
//! [`BuildStats`](crate::octree::BuildStats) and logged.

use thiserror::Error;

/// Errors that abort octree construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
  /// The configuration cannot drive a terminating recursion.
  #[error("invalid config: min_node_size must be positive and routing_epsilon non-negative")]
  InvalidConfig,

  /// The input object list was empty; the tree has no meaningful root.
  #[error("scene is empty: at least one object is required to compute root bounds")]
  EmptyScene,

  /// An object exposed no bounding box and cannot be tested against any
  /// region. Fatal for the whole build.
  #[error("object {object} has no bounding box")]
  MissingBounds {
    /// Zero-based position of the object in the input list.
    object: usize,
  },
}
