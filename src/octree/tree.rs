//! Octree - top-level orchestrator.
//!
//! `Octree::build` is the whole lifecycle: compute root bounds, create the
//! root node, insert every object in list order, record stats. The tree is
//! immutable afterwards; there is no deletion, update, or re-balancing API.

use tracing::debug;

use crate::error::BuildError;
use crate::scene::SceneObject;

use super::bounds::root_bounds;
use super::config::OctreeConfig;
use super::node::{InsertCursor, InsertObject, OctreeNode};
use super::stats::BuildStats;
use super::traverse::{visit_pre_order, BreadthFirst};

/// Sparse material-tagged octree over a fixed set of scene objects.
#[derive(Debug)]
pub struct Octree {
  root: OctreeNode,
  config: OctreeConfig,
  stats: BuildStats,
}

impl Octree {
  /// Build a tree over `objects`, subdividing occupied space until nodes
  /// reach `config.min_node_size`.
  ///
  /// Objects are inserted once, in list order, sharing one index counter:
  /// every materialized node gets a globally unique creation-order index,
  /// root = 0. Fails fast on an empty list or an object without bounds;
  /// partial trees are never returned.
  pub fn build<O: SceneObject>(objects: &[O], config: OctreeConfig) -> Result<Self, BuildError> {
    if !config.is_valid() {
      return Err(BuildError::InvalidConfig);
    }
    if objects.is_empty() {
      return Err(BuildError::EmptyScene);
    }

    let boxes = objects
      .iter()
      .enumerate()
      .map(|(i, obj)| {
        obj
          .bounding_box()
          .ok_or(BuildError::MissingBounds { object: i })
      })
      .collect::<Result<Vec<_>, _>>()?;

    let bounds = root_bounds(&boxes).ok_or(BuildError::EmptyScene)?;
    debug!(
      side = bounds.side_len(),
      objects = objects.len(),
      "root bounds computed"
    );

    let mut root = OctreeNode::new(bounds, 0);
    let mut cursor = InsertCursor {
      next_index: 1,
      stats: BuildStats {
        nodes_created: 1,
        ..Default::default()
      },
    };

    for (i, (obj, obj_bounds)) in objects.iter().zip(boxes).enumerate() {
      let item = InsertObject::new(obj_bounds, obj.material(), i, &config);
      root.insert(&item, &config, 0, &mut cursor);
    }

    debug!(
      nodes = cursor.stats.nodes_created,
      max_depth = cursor.stats.max_depth,
      degenerate_routing = cursor.stats.degenerate_routing,
      "octree built"
    );

    Ok(Self {
      root,
      config,
      stats: cursor.stats,
    })
  }

  /// Root node covering the whole scene.
  #[inline]
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  /// Configuration the tree was built with.
  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Counters recorded during construction.
  #[inline]
  pub fn stats(&self) -> BuildStats {
    self.stats
  }

  /// Lazy breadth-first enumeration of all nodes.
  ///
  /// Restartable: each call produces a fresh iterator over the same
  /// immutable tree, yielding an identical sequence.
  pub fn iter_breadth_first(&self) -> BreadthFirst<'_> {
    BreadthFirst::new(&self.root)
  }

  /// Depth-first pre-order walk with depth, root at depth 0.
  pub fn visit_pre_order<F>(&self, mut f: F)
  where
    F: FnMut(&OctreeNode, u32),
  {
    visit_pre_order(&self.root, &mut f);
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
