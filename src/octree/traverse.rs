//! Read-only traversals over a built tree.
//!
//! Traversal never mutates the tree: iterators borrow it, can be restarted
//! by calling the constructor again, and repeated runs yield identical
//! sequences.

use std::collections::VecDeque;

use super::node::OctreeNode;

/// Breadth-first iterator over a subtree.
///
/// Visits all nodes at depth `d` before any node at depth `d + 1`; children
/// of a node are visited in octant order.
pub struct BreadthFirst<'a> {
  queue: VecDeque<&'a OctreeNode>,
}

impl<'a> BreadthFirst<'a> {
  pub(crate) fn new(root: &'a OctreeNode) -> Self {
    let mut queue = VecDeque::new();
    queue.push_back(root);
    Self { queue }
  }
}

impl<'a> Iterator for BreadthFirst<'a> {
  type Item = &'a OctreeNode;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.queue.pop_front()?;
    if let Some(children) = node.children() {
      self.queue.extend(children.iter());
    }
    Some(node)
  }
}

/// Depth-first pre-order walk, calling `f(node, depth)` with the root at
/// depth 0. Children are visited in octant order.
pub fn visit_pre_order<'a, F>(root: &'a OctreeNode, f: &mut F)
where
  F: FnMut(&'a OctreeNode, u32),
{
  fn walk<'a, F>(node: &'a OctreeNode, depth: u32, f: &mut F)
  where
    F: FnMut(&'a OctreeNode, u32),
  {
    f(node, depth);
    if let Some(children) = node.children() {
      for child in children {
        walk(child, depth + 1, f);
      }
    }
  }
  walk(root, 0, f);
}

#[cfg(test)]
#[path = "traverse_test.rs"]
mod traverse_test;
