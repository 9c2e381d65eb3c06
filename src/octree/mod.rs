//! Octree construction, traversal, and serialization.
//!
//! Data flows one way: object list → root bounds → recursive insertion →
//! tree of nodes → breadth-first index list. There is no feedback loop and
//! no incremental re-insertion; the tree is immutable once built.
//!
//! # Module structure
//!
//! - [`config`]: `OctreeConfig` - minimum node size and routing heuristics
//! - [`bounds`]: root cube computation (union + power-of-two rounding)
//! - [`node`]: `OctreeNode` - recursive insertion and termination
//! - [`stats`]: `BuildStats` - construction counters and the routing canary
//! - [`tree`]: `Octree` - build orchestration
//! - [`traverse`]: breadth-first iterator, pre-order walk
//! - [`dump`]: plain-text snapshot formats

pub mod bounds;
pub mod config;
pub mod dump;
pub mod node;
pub mod stats;
pub mod traverse;
pub mod tree;

#[cfg(test)]
pub mod test_utils;

// Re-exports
pub use bounds::root_bounds;
pub use config::OctreeConfig;
pub use dump::{dump_breadth_first_to_file, write_breadth_first, write_pre_order};
pub use node::OctreeNode;
pub use stats::BuildStats;
pub use traverse::BreadthFirst;
pub use tree::Octree;
