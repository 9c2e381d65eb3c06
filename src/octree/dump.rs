//! Plain-text snapshot formats.
//!
//! Two newline-delimited formats consumed by downstream tooling. Both are
//! deterministic: re-running a dump on an unchanged tree is byte-identical.
//!
//! Breadth-first format, one line per node:
//!
//! ```text
//! Node 0: Material ID = None, MID1 = false, First Child Index = 1
//! Node 1: Material ID = stone, MID1 = false
//! ```
//!
//! `MID1` marks a leaf whose object carried no material reference; the
//! parser assigns a default material to such leaves. `First Child Index`
//! appears only on subdivided nodes and lets the parser rebuild the child
//! ranges (sibling indices are consecutive in octant order).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::traverse::visit_pre_order;
use super::tree::Octree;

/// Write the breadth-first node list to `out`.
pub fn write_breadth_first<W: Write>(tree: &Octree, out: &mut W) -> io::Result<()> {
  for node in tree.iter_breadth_first() {
    let material = node.material().map_or("None", |m| m.name());
    write!(
      out,
      "Node {}: Material ID = {}, MID1 = {}",
      node.index(),
      material,
      node.has_unresolved_material()
    )?;
    if let Some(children) = node.children() {
      write!(out, ", First Child Index = {}", children[0].index())?;
    }
    writeln!(out)?;
  }
  Ok(())
}

/// Write the depth-indented pre-order listing to `out`.
///
/// Verbose companion format for eyeballing a tree: bounds, material,
/// unresolved flag, and subdivision flag per node, two spaces of indent per
/// depth level.
pub fn write_pre_order<W: Write>(tree: &Octree, out: &mut W) -> io::Result<()> {
  let mut result = Ok(());
  visit_pre_order(tree.root(), &mut |node, depth| {
    if result.is_err() {
      return;
    }
    let bounds = node.bounds();
    let material = node.material().map_or("None", |m| m.name());
    result = writeln!(
      out,
      "{:indent$}Node {}: Center = {}, Size = {}, Material = {}, Unresolved = {}, Subdivided = {}",
      "",
      node.index(),
      bounds.center,
      bounds.size,
      material,
      node.has_unresolved_material(),
      node.is_subdivided(),
      indent = depth as usize * 2
    );
  });
  result
}

/// Write the breadth-first node list to a file at `path`.
pub fn dump_breadth_first_to_file<P: AsRef<Path>>(tree: &Octree, path: P) -> io::Result<()> {
  let mut out = BufWriter::new(File::create(path)?);
  write_breadth_first(tree, &mut out)?;
  out.flush()
}

#[cfg(test)]
#[path = "dump_test.rs"]
mod dump_test;
