//! voxel_octree - engine-independent octree voxelization of AABB scenes.
//!
//! Builds a sparse, axis-aligned octree over a set of 3D objects described
//! by bounding boxes, subdividing occupied space until each region is small
//! enough to be treated as a single material-tagged voxel. The result is a
//! compact traversable tree with deterministic creation-order node indices,
//! suitable for voxel export, collision acceleration, or LOD generation.
//!
//! The crate never talks to an engine: objects come in through the
//! [`SceneObject`] adapter trait, and output goes out as an in-memory tree
//! plus newline-delimited text dumps.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use voxel_octree::{Aabb, MaterialRef, Octree, OctreeConfig, SceneObject};
//!
//! struct Prop {
//!   bounds: Aabb,
//!   material: Option<MaterialRef>,
//! }
//!
//! impl SceneObject for Prop {
//!   fn bounding_box(&self) -> Option<Aabb> {
//!     Some(self.bounds)
//!   }
//!   fn material(&self) -> Option<MaterialRef> {
//!     self.material.clone()
//!   }
//! }
//!
//! let props = [Prop {
//!   bounds: Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0)),
//!   material: Some(MaterialRef::new("stone")),
//! }];
//!
//! let tree = Octree::build(&props, OctreeConfig::new(4.0)).unwrap();
//! assert_eq!(tree.root().material().unwrap().name(), "stone");
//! ```

pub mod aabb;
pub mod error;
pub mod octree;
pub mod scene;

pub use aabb::Aabb;
pub use error::BuildError;
pub use octree::{
  dump_breadth_first_to_file, write_breadth_first, write_pre_order, BreadthFirst, BuildStats,
  Octree, OctreeConfig, OctreeNode,
};
pub use scene::{MaterialRef, SceneObject};
