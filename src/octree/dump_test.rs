use glam::Vec3;

use super::{dump_breadth_first_to_file, write_breadth_first, write_pre_order};
use crate::octree::test_utils::*;
use crate::octree::{Octree, OctreeConfig};

fn dump(tree: &Octree) -> String {
  let mut out = Vec::new();
  write_breadth_first(tree, &mut out).unwrap();
  String::from_utf8(out).unwrap()
}

#[test]
fn single_leaf_line_format() {
  let objects = [prop(Vec3::ZERO, 2.0, Some("stone"))];
  let tree = Octree::build(&objects, OctreeConfig::new(4.0)).unwrap();

  assert_eq!(dump(&tree), "Node 0: Material ID = stone, MID1 = false\n");
}

#[test]
fn unresolved_material_prints_mid1_true() {
  let objects = [prop(Vec3::ZERO, 2.0, None)];
  let tree = Octree::build(&objects, OctreeConfig::new(4.0)).unwrap();

  assert_eq!(dump(&tree), "Node 0: Material ID = None, MID1 = true\n");
}

#[test]
fn subdivided_nodes_print_first_child_index() {
  let objects = [
    prop(Vec3::splat(-3.0), 1.0, Some("stone")),
    prop(Vec3::splat(3.0), 1.0, Some("dirt")),
  ];
  let tree = Octree::build(&objects, OctreeConfig::new(2.0)).unwrap();

  let text = dump(&tree);
  let mut lines = text.lines();
  assert_eq!(
    lines.next().unwrap(),
    "Node 0: Material ID = None, MID1 = false, First Child Index = 1"
  );
  // All eight children follow in breadth-first order; unoccupied ones are
  // air lines without a child annotation.
  assert_eq!(text.lines().count() as u32, tree.stats().nodes_created);
  assert!(text.lines().any(|l| l.ends_with("Material ID = stone, MID1 = false")));
}

#[test]
fn dumps_are_byte_identical_across_runs() {
  let objects = [
    prop(Vec3::splat(-3.0), 1.0, Some("stone")),
    prop(Vec3::splat(3.0), 1.0, None),
  ];
  let tree = Octree::build(&objects, OctreeConfig::new(1.0)).unwrap();

  assert_eq!(dump(&tree), dump(&tree));

  let mut first = Vec::new();
  let mut second = Vec::new();
  write_pre_order(&tree, &mut first).unwrap();
  write_pre_order(&tree, &mut second).unwrap();
  assert_eq!(first, second);
}

#[test]
fn pre_order_dump_indents_by_depth() {
  let objects = [
    prop(Vec3::splat(-3.0), 1.0, Some("stone")),
    prop(Vec3::splat(3.0), 1.0, Some("dirt")),
  ];
  let tree = Octree::build(&objects, OctreeConfig::new(2.0)).unwrap();

  let mut out = Vec::new();
  write_pre_order(&tree, &mut out).unwrap();
  let text = String::from_utf8(out).unwrap();
  let mut lines = text.lines();

  let root_line = lines.next().unwrap();
  assert!(root_line.starts_with("Node 0: "));
  assert!(root_line.contains("Subdivided = true"));

  let child_line = lines.next().unwrap();
  assert!(child_line.starts_with("  Node 1: "), "children indent two spaces: {child_line}");
  assert_eq!(text.lines().count() as u32, tree.stats().nodes_created);
}

#[test]
fn file_dump_matches_in_memory_dump() {
  let objects = [prop(Vec3::ZERO, 2.0, Some("stone"))];
  let tree = Octree::build(&objects, OctreeConfig::new(4.0)).unwrap();

  let path = std::env::temp_dir().join(format!("voxel_octree_dump_{}.txt", std::process::id()));
  dump_breadth_first_to_file(&tree, &path).unwrap();
  let from_file = std::fs::read_to_string(&path).unwrap();
  std::fs::remove_file(&path).unwrap();

  assert_eq!(from_file, dump(&tree));
}
