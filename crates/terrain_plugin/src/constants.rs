//! Grid layout constants and lattice indexing for chunk sample grids.
//!
//! # Sample Grid Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SAMPLE GRID LAYOUT                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Sample index:  0     1     2    ...    30    31    32                  │
//! │                 │                              │     │                  │
//! │                 └──────── 32 cells ────────────┘     │                  │
//! │                                                      │                  │
//! │                                   last sample, shared with the next     │
//! │                                   chunk's first sample (same world pos) │
//! │                                                                         │
//! │  grid_size  = 33 samples per axis                                       │
//! │  chunk_size = grid_size - 1 = 32 world units per axis                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! index = x + y * dim + z * dim²
//!
//! Address:  0      1      2   ...  dim-1   dim  ...
//! Content: [0,0,0][1,0,0][2,0,0]...[dim-1,0,0][0,1,0]...
//!          └──────────── X ─────────────┘
//! ```
//!
//! X is the minor axis. The same flattening produces the global lattice ids
//! that key welded vertices.
//!
//! # Cube Corner Ordering
//!
//! ```text
//!          7──────6          Corners (x, y, z):
//!         /│     /│            0=(0,0,0)  1=(1,0,0)  2=(1,0,1)  3=(0,0,1)
//!        4─┼────5 │            4=(0,1,0)  5=(1,1,0)  6=(1,1,1)  7=(0,1,1)
//!        │ 3────┼─2
//!        │/     │/           +Y
//!        0──────1             │  +Z
//!                             │ /
//!                             └───+X
//! ```
//!
//! Corners 0-3 form the bottom face (y = 0), corners 4-7 the top face.
//! This is the ordering the triangulation tables are authored against.

/// Default number of samples per chunk axis.
pub const DEFAULT_GRID_SIZE: usize = 33;

/// Smallest grid that still contains one cube.
pub const MIN_GRID_SIZE: usize = 2;

/// Most lattice points a grid may hold: each index must fit in 32 bits
/// for edge keys and mesh indices.
pub const MAX_LATTICE_POINTS: u64 = 1 << 32;

/// Default surface threshold.
pub const DEFAULT_ISOLEVEL: f32 = 0.25;

/// Default number of chunks per world axis.
pub const DEFAULT_WORLD_SIZE: usize = 4;

/// Default culling radius in world units.
pub const DEFAULT_DRAW_DISTANCE: f32 = 100.0;

/// Tolerance used by edge interpolation to snap to corners and to guard
/// against near-zero denominators.
pub const INTERPOLATION_EPSILON: f32 = 1e-6;

/// X offset of each cube corner relative to the cell origin.
pub const CUBE_POINTS_X: [usize; 8] = [0, 1, 1, 0, 0, 1, 1, 0];

/// Y offset of each cube corner relative to the cell origin.
pub const CUBE_POINTS_Y: [usize; 8] = [0, 0, 0, 0, 1, 1, 1, 1];

/// Z offset of each cube corner relative to the cell origin.
pub const CUBE_POINTS_Z: [usize; 8] = [0, 0, 1, 1, 0, 0, 1, 1];

/// Chunk size (world units per axis) for a grid of `grid_size` samples.
#[inline(always)]
pub const fn chunk_size_for(grid_size: usize) -> usize {
  grid_size.saturating_sub(1)
}

/// Flatten a lattice coordinate into a linear index for a `dim³` grid.
#[inline(always)]
pub const fn coord_to_index(x: usize, y: usize, z: usize, dim: usize) -> usize {
  x + y * dim + z * dim * dim
}

/// Inverse of [`coord_to_index`].
#[inline(always)]
pub const fn index_to_coord(idx: usize, dim: usize) -> (usize, usize, usize) {
  let x = idx % dim;
  let y = (idx / dim) % dim;
  let z = idx / (dim * dim);
  (x, y, z)
}

/// Lattice coordinate of corner `corner` of the cell whose origin is `cell`.
#[inline(always)]
pub const fn corner_coord(cell: [usize; 3], corner: usize) -> [usize; 3] {
  [
    cell[0] + CUBE_POINTS_X[corner],
    cell[1] + CUBE_POINTS_Y[corner],
    cell[2] + CUBE_POINTS_Z[corner],
  ]
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
