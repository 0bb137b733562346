//! Vertex welding keyed by lattice edge identity.
//!
//! An edge of the sample lattice is shared by up to four cells. Each cell
//! computes the crossing on that edge independently, so the vertex is emitted
//! the first time the edge is seen and reused afterwards.
//!
//! ```text
//! key = (min(a, b) << 32) | max(a, b)
//!
//! a, b = flattened lattice indices of the edge's two corners
//!        (x + y * dim + z * dim²)
//! ```
//!
//! Keys compare integers, never positions, so welding is exact regardless of
//! floating-point noise in the interpolated vertex.

use std::collections::HashMap;

use glam::Vec3;

use crate::types::MeshOutput;

/// Pack a lattice edge into an order-independent 64-bit key.
#[inline]
pub fn edge_key(a: usize, b: usize) -> u64 {
  let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
  ((lo as u64) << 32) | (hi as u64 & 0xFFFF_FFFF)
}

/// Split a key back into its `(min, max)` lattice indices.
#[inline]
pub fn unpack_edge_key(key: u64) -> (usize, usize) {
  ((key >> 32) as usize, (key & 0xFFFF_FFFF) as usize)
}

/// Accumulates mesh buffers, deduplicating vertices by edge key.
///
/// With welding disabled every call to [`VertexWelder::vertex`] appends, which
/// is the baseline the welded mesh is measured against.
pub struct VertexWelder {
  weld: bool,
  lookup: HashMap<u64, u32>,
  output: MeshOutput,
}

impl VertexWelder {
  pub fn new(weld: bool) -> Self {
    Self {
      weld,
      lookup: HashMap::new(),
      output: MeshOutput::new(),
    }
  }

  /// Pre-size buffers for roughly `cells` surface cells.
  pub fn with_capacity(weld: bool, cells: usize) -> Self {
    let mut welder = Self::new(weld);
    welder.output.vertices.reserve(cells * 2);
    welder.output.indices.reserve(cells * 6);
    if weld {
      welder.lookup.reserve(cells * 2);
    }
    welder
  }

  /// Vertex index for the crossing on edge `key`, appending it on first use.
  #[inline]
  pub fn vertex(&mut self, key: u64, position: Vec3) -> u32 {
    if !self.weld {
      return self.push(position);
    }
    if let Some(&index) = self.lookup.get(&key) {
      return index;
    }
    let index = self.push(position);
    self.lookup.insert(key, index);
    index
  }

  /// Append one triangle in the given winding.
  #[inline]
  pub fn triangle(&mut self, indices: [u32; 3]) {
    self.output.indices.extend_from_slice(&indices);
  }

  /// Number of distinct edges seen so far (welded mode only).
  pub fn unique_edges(&self) -> usize {
    self.lookup.len()
  }

  /// Finish and return the mesh. The lookup table is dropped here.
  pub fn finish(self) -> MeshOutput {
    self.output
  }

  #[inline]
  fn push(&mut self, position: Vec3) -> u32 {
    let index = self.output.vertices.len() as u32;
    self.output.vertices.push(position);
    self.output.bounds.encapsulate(position);
    index
  }
}

#[cfg(test)]
#[path = "weld_test.rs"]
mod weld_test;
