//! Scene adapter seam - the boundary between this crate and the host scene.
//!
//! The octree never talks to an engine directly. Each input object implements
//! [`SceneObject`], exposing a world-space bounding box and an optional
//! surface material. Engine bridges (or tests) provide the implementations.

use std::sync::Arc;

use crate::aabb::Aabb;

/// Cheap clonable reference to a surface material, identified by name.
///
/// The name is what the text dumps print; equality is by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialRef {
  name: Arc<str>,
}

impl MaterialRef {
  /// Create a material reference with the given display name.
  pub fn new(name: impl Into<Arc<str>>) -> Self {
    Self { name: name.into() }
  }

  /// Display name of the material.
  #[inline]
  pub fn name(&self) -> &str {
    &self.name
  }
}

/// One input object of the scene being voxelized.
///
/// An object with no material is a valid, meaningful state: "geometry here,
/// no assigned material" - distinct from empty space. An object with no
/// bounding box cannot be placed and aborts the build
/// ([`BuildError::MissingBounds`](crate::error::BuildError::MissingBounds)).
pub trait SceneObject {
  /// World-space axis-aligned bounding box, if the object has one.
  fn bounding_box(&self) -> Option<Aabb>;

  /// Surface material, if one is assigned.
  fn material(&self) -> Option<MaterialRef>;
}
