//! Test fixtures shared by the octree test modules.

use glam::Vec3;

use crate::aabb::Aabb;
use crate::scene::{MaterialRef, SceneObject};

/// Minimal scene object backed by plain fields.
pub struct TestProp {
  pub bounds: Option<Aabb>,
  pub material: Option<MaterialRef>,
}

impl SceneObject for TestProp {
  fn bounding_box(&self) -> Option<Aabb> {
    self.bounds
  }

  fn material(&self) -> Option<MaterialRef> {
    self.material.clone()
  }
}

/// Cube-shaped prop at `center` with the given side and material name.
pub fn prop(center: Vec3, side: f32, material: Option<&str>) -> TestProp {
  TestProp {
    bounds: Some(Aabb::from_center_size(center, Vec3::splat(side))),
    material: material.map(MaterialRef::new),
  }
}

/// Prop that reports no bounding box at all.
pub fn boundless_prop() -> TestProp {
  TestProp {
    bounds: None,
    material: Some(MaterialRef::new("ghost")),
  }
}
