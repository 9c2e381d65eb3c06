//! Axis-aligned bounding box stored as center + full extents.
//!
//! Matches the convention of the scene adapters this crate consumes: physics
//! colliders report bounds as a center and a full size, with min/max corners
//! derived. All containment and overlap tests are inclusive - boxes touching
//! at a boundary plane count as intersecting.

use glam::Vec3;

/// Axis-aligned bounding box (center + full extents, not half-extents).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  /// Center of the box.
  pub center: Vec3,
  /// Full extents on each axis.
  pub size: Vec3,
}

impl Aabb {
  /// Create a box from its center and full extents.
  ///
  /// # Panics
  /// Debug-asserts that extents are non-negative on all axes.
  pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
    debug_assert!(
      size.x >= 0.0 && size.y >= 0.0 && size.z >= 0.0,
      "AABB extents must be non-negative"
    );
    Self { center, size }
  }

  /// Create a box from its min and max corners.
  pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
    Self {
      center: (min + max) * 0.5,
      size: max - min,
    }
  }

  /// Minimum corner (center - size/2).
  #[inline]
  pub fn min(&self) -> Vec3 {
    self.center - self.size * 0.5
  }

  /// Maximum corner (center + size/2).
  #[inline]
  pub fn max(&self) -> Vec3 {
    self.center + self.size * 0.5
  }

  /// Side length of a cubical box.
  ///
  /// Octree nodes are exact cubes, so any axis would do; the Y extent is
  /// used consistently.
  #[inline]
  pub fn side_len(&self) -> f32 {
    self.size.y
  }

  /// Check if this box overlaps another.
  ///
  /// Intervals must overlap on all three axes; touching at a boundary
  /// counts as intersecting.
  #[inline]
  pub fn intersects(&self, other: &Aabb) -> bool {
    let (amin, amax) = (self.min(), self.max());
    let (bmin, bmax) = (other.min(), other.max());
    amin.x <= bmax.x
      && amax.x >= bmin.x
      && amin.y <= bmax.y
      && amax.y >= bmin.y
      && amin.z <= bmax.z
      && amax.z >= bmin.z
  }

  /// Check if this box contains a point (boundary inclusive).
  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    let (min, max) = (self.min(), self.max());
    point.x >= min.x
      && point.x <= max.x
      && point.y >= min.y
      && point.y <= max.y
      && point.z >= min.z
      && point.z <= max.z
  }

  /// Smallest box enclosing both boxes.
  pub fn union(&self, other: &Aabb) -> Aabb {
    Aabb::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
  }

  /// Box with extents scaled about its own center.
  #[inline]
  pub fn inflated(&self, scale: f32) -> Aabb {
    Aabb {
      center: self.center,
      size: self.size * scale,
    }
  }

  /// Box with extents reduced by `epsilon` per axis, clamped at zero.
  #[inline]
  pub fn shrunk(&self, epsilon: f32) -> Aabb {
    Aabb {
      center: self.center,
      size: (self.size - Vec3::splat(epsilon)).max(Vec3::ZERO),
    }
  }

  /// The eight equal sub-cubes formed by splitting at the center.
  ///
  /// Octant index bits select the positive half per axis:
  /// - bit 0: +X offset
  /// - bit 1: +Y offset
  /// - bit 2: +Z offset
  ///
  /// The same ordering is used everywhere a child node is materialized or
  /// traversed, so it is stable across the whole tree.
  pub fn octants(&self) -> [Aabb; 8] {
    let quarter = self.size / 4.0;
    let child_size = self.size / 2.0;
    core::array::from_fn(|i| {
      let dir = Vec3::new(
        if i & 1 != 0 { 1.0 } else { -1.0 },
        if i & 2 != 0 { 1.0 } else { -1.0 },
        if i & 4 != 0 { 1.0 } else { -1.0 },
      );
      Aabb {
        center: self.center + dir * quarter,
        size: child_size,
      }
    })
  }
}

#[cfg(test)]
#[path = "aabb_test.rs"]
mod aabb_test;
