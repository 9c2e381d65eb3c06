//! Root bounds calculation - the cube every node descends from.
//!
//! The root volume is the union of all object boxes, re-shaped into a cube
//! whose side is the next power of two. Every node at depth `d` then has an
//! exact side length of `root_side / 2^d`, which keeps the octant split
//! producing equal cubes all the way down.

use glam::Vec3;

use crate::aabb::Aabb;

/// Compute the cubical root volume enclosing every box in `boxes`.
///
/// Returns `None` for an empty input; the orchestrator maps that to
/// [`BuildError::EmptyScene`](crate::error::BuildError::EmptyScene).
pub fn root_bounds(boxes: &[Aabb]) -> Option<Aabb> {
  let (first, rest) = boxes.split_first()?;
  let union = rest.iter().fold(*first, |acc, b| acc.union(b));

  // Degenerate scenes (a single point-sized object) still get a positive
  // cube; the root then terminates immediately as a leaf.
  let max_axis = union.size.max_element().max(f32::MIN_POSITIVE);
  let side = next_power_of_two(max_axis);

  Some(Aabb::from_center_size(union.center, Vec3::splat(side)))
}

/// Smallest power of two >= `x`, for positive finite `x`.
///
/// `log2`/`ceil` on an exact power of two can land a hair above the integer
/// and round one step too far; the half-step check undoes that, so 8.0 maps
/// to 8.0 and not 16.0.
fn next_power_of_two(x: f32) -> f32 {
  let pow = x.log2().ceil().exp2();
  if pow * 0.5 >= x {
    pow * 0.5
  } else {
    pow
  }
}

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;
