//! OctreeNode - one cubical region and its recursive insertion logic.
//!
//! Insertion of an object into a node either terminates the branch (node is
//! voxel-sized, or swallowed by the object's fattened box) or routes the
//! object into the octants it overlaps, materializing children on first use.
//!
//! # Child materialization
//!
//! All eight octant routing tests are evaluated *before* anything is
//! allocated. When at least one octant accepts the object, all eight
//! children are materialized together with consecutive creation indices in
//! octant order - unoccupied siblings are meaningful "air" leaves in the
//! serialized output. When no octant accepts and termination did not fire,
//! nothing is allocated and the degenerate-routing canary is recorded.

use smallvec::SmallVec;
use tracing::warn;

use crate::aabb::Aabb;
use crate::scene::MaterialRef;

use super::config::OctreeConfig;
use super::stats::BuildStats;

/// Shared insertion state threaded explicitly through the recursion.
///
/// `next_index` is the only mutable state shared across the whole
/// construction: it is advanced exactly once per materialized node, in
/// materialization order. The root takes index 0, so the counter starts
/// at 1.
pub(crate) struct InsertCursor {
  pub next_index: u32,
  pub stats: BuildStats,
}

/// One input object, with the derived boxes insertion needs precomputed.
pub(crate) struct InsertObject {
  /// Actual bounding box; used for routing and material assignment.
  pub bounds: Aabb,
  /// Inflated copy; used only by the termination test.
  pub fat: Aabb,
  /// Epsilon-shrunk copy; boundary-graze guard for octant routing.
  pub lean: Aabb,
  /// Material carried by the object, if any.
  pub material: Option<MaterialRef>,
  /// Position in the input list, for diagnostics.
  pub object: usize,
}

impl InsertObject {
  pub fn new(
    bounds: Aabb,
    material: Option<MaterialRef>,
    object: usize,
    config: &OctreeConfig,
  ) -> Self {
    Self {
      bounds,
      fat: bounds.inflated(config.termination_inflation),
      lean: bounds.shrunk(config.routing_epsilon),
      material,
      object,
    }
  }
}

/// One cubical region of the octree.
///
/// Nodes exclusively own their children; the structure is a strict tree.
/// Bounds are exact cubes at every depth (`size.x == size.y == size.z`).
#[derive(Debug)]
pub struct OctreeNode {
  bounds: Aabb,
  index: u32,
  material: Option<MaterialRef>,
  unresolved_material: bool,
  children: Option<Box<[OctreeNode; 8]>>,
}

impl OctreeNode {
  pub(crate) fn new(bounds: Aabb, index: u32) -> Self {
    Self {
      bounds,
      index,
      material: None,
      unresolved_material: false,
      children: None,
    }
  }

  /// This node's cubical region.
  #[inline]
  pub fn bounds(&self) -> Aabb {
    self.bounds
  }

  /// Creation-order index, unique across the tree.
  #[inline]
  pub fn index(&self) -> u32 {
    self.index
  }

  /// Material assigned when this node terminated as an occupied leaf.
  #[inline]
  pub fn material(&self) -> Option<&MaterialRef> {
    self.material.as_ref()
  }

  /// True if this leaf intersected an object that carried no material;
  /// a default should be assigned during later processing.
  #[inline]
  pub fn has_unresolved_material(&self) -> bool {
    self.unresolved_material
  }

  /// True if this node subdivided during construction.
  #[inline]
  pub fn is_subdivided(&self) -> bool {
    self.children.is_some()
  }

  /// Children in octant order, if this node subdivided.
  #[inline]
  pub fn children(&self) -> Option<&[OctreeNode; 8]> {
    self.children.as_deref()
  }

  /// Insert one object into this node, subdividing as needed.
  pub(crate) fn insert(
    &mut self,
    obj: &InsertObject,
    config: &OctreeConfig,
    depth: u32,
    cursor: &mut InsertCursor,
  ) {
    if self.bounds.side_len() <= config.min_node_size || self.swallowed_by(&obj.fat) {
      // Leaf for this object. Material only if the *actual* box overlaps;
      // a non-intersecting node stays untouched (it may be empty air).
      if self.bounds.intersects(&obj.bounds) {
        self.resolve_material(obj);
      }
      return;
    }

    let octants = self.bounds.octants();
    let selected: SmallVec<[usize; 8]> = (0..8)
      .filter(|&i| octants[i].intersects(&obj.bounds) && octants[i].intersects(&obj.lean))
      .collect();

    if selected.is_empty() {
      // Termination should have fired before we got here. Leave the node
      // untouched and surface the drift instead of allocating children
      // that would immediately be discarded.
      cursor.stats.degenerate_routing += 1;
      warn!(
        node_index = self.index,
        object = obj.object,
        "no octant accepted object below a non-terminal node; epsilon drift?"
      );
      return;
    }

    let children = self.children.get_or_insert_with(|| {
      cursor.stats.nodes_created += 8;
      cursor.stats.max_depth = cursor.stats.max_depth.max(depth + 1);
      let base = cursor.next_index;
      cursor.next_index += 8;
      Box::new(core::array::from_fn(|i| {
        OctreeNode::new(octants[i], base + i as u32)
      }))
    });

    for i in selected {
      children[i].insert(obj, config, depth + 1, cursor);
    }
  }

  /// A node is swallowed when both its corners lie inside the box.
  #[inline]
  fn swallowed_by(&self, fat: &Aabb) -> bool {
    fat.contains_point(self.bounds.min()) && fat.contains_point(self.bounds.max())
  }

  /// First intersecting object wins; later objects never overwrite an
  /// already-resolved leaf, including one flagged unresolved.
  fn resolve_material(&mut self, obj: &InsertObject) {
    if self.material.is_some() || self.unresolved_material {
      return;
    }
    match &obj.material {
      Some(material) => self.material = Some(material.clone()),
      None => self.unresolved_material = true,
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
