//! Build statistics and diagnostics counters.

/// Counters recorded during octree construction.
///
/// `degenerate_routing` is a correctness canary: it counts insertions where
/// the termination test did not fire yet no octant accepted the object.
/// Under correct epsilon tuning it stays at zero; a non-zero value indicates
/// epsilon or bounds-computation drift and is also logged as a warning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Total nodes materialized, root included.
  pub nodes_created: u32,
  /// Deepest node materialized (root = depth 0).
  pub max_depth: u32,
  /// Insertions that selected no octant without terminating.
  pub degenerate_routing: u32,
}

impl BuildStats {
  /// True if construction hit the degenerate-routing branch.
  #[inline]
  pub fn has_degenerate_routing(&self) -> bool {
    self.degenerate_routing > 0
  }
}
