//! OctreeConfig - subdivision limits and routing heuristics.

/// Configuration for octree construction.
///
/// The two heuristic constants started life as hard-coded literals tuned on
/// real scenes; they are configurable so boundary-heavy geometry can adjust
/// them without forking the build code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Minimum node side length. A node at or below this size never
  /// subdivides; it terminates as a voxel-sized leaf.
  pub min_node_size: f32,

  /// Scale applied to an object's extents for the termination test only.
  /// A node fully swallowed by the inflated box stops subdividing one
  /// level earlier, trading tree size for leaf coarseness.
  pub termination_inflation: f32,

  /// Per-axis shrink applied to an object's box before octant routing.
  /// Guards against an object sharing an exact boundary plane with an
  /// octant and being routed into a neighbor it only grazes.
  pub routing_epsilon: f32,
}

impl OctreeConfig {
  /// Create a config with the given minimum node size and default
  /// heuristics.
  pub fn new(min_node_size: f32) -> Self {
    Self {
      min_node_size,
      termination_inflation: 2.0,
      routing_epsilon: 0.001,
    }
  }

  pub fn with_termination_inflation(mut self, scale: f32) -> Self {
    self.termination_inflation = scale;
    self
  }

  pub fn with_routing_epsilon(mut self, epsilon: f32) -> Self {
    self.routing_epsilon = epsilon;
    self
  }

  /// Check that the config can drive a terminating recursion.
  #[inline]
  pub fn is_valid(&self) -> bool {
    self.min_node_size > 0.0 && self.termination_inflation > 0.0 && self.routing_epsilon >= 0.0
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
