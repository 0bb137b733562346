//! Cube index classification.
//!
//! The cube index is an 8-bit value where each bit records whether a corner
//! of the cell lies above the isolevel.

use crate::constants::{corner_coord, CUBE_POINTS_X};
use crate::types::{Grid, Sample};

/// Build the cube index from 8 corner densities.
///
/// Bit `i` is set iff `densities[i] > isolevel`. The comparison is strict, so
/// a corner sitting exactly on the isolevel classifies as below.
#[inline]
pub fn build(densities: &[f32; 8], isolevel: f32) -> u8 {
  let mut index = 0u8;
  for (bit, &density) in densities.iter().enumerate() {
    if density > isolevel {
      index |= 1 << bit;
    }
  }
  index
}

/// Returns true if all corners are on the same side of the surface.
#[inline]
pub fn is_homogeneous(cube_index: u8) -> bool {
  cube_index == 0 || cube_index == 0xFF
}

/// Gather the 8 corner samples of cell `cell` in corner order.
#[inline]
pub fn gather_corners(grid: &Grid, cell: [usize; 3]) -> [Sample; 8] {
  std::array::from_fn(|corner| {
    let [x, y, z] = corner_coord(cell, corner);
    *grid.get(x, y, z)
  })
}

/// Number of corners in a cube.
pub const CORNER_COUNT: usize = CUBE_POINTS_X.len();

#[cfg(test)]
#[path = "cube_index_test.rs"]
mod cube_index_test;
