//! Marching Cubes isosurface extraction.
//!
//! Converts a cubic grid of density samples into a welded triangle mesh of
//! the surface `density == isolevel`.
//!
//! # Algorithm Overview
//!
//! Marching Cubes places vertices ON the cell edges the surface crosses and
//! stitches them with a precomputed per-configuration triangle list.
//!
//! ```text
//! Marching Cubes:
//!   - Vertices placed ON edges where surface crosses
//!   - Up to 5 triangles per cell, straight from the case table
//!   - Shared edges welded through an integer edge key
//! ```
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  grid: Grid              - dim³ samples (position, density)     │
//! │  isolevel: f32           - surface threshold                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Classification                      │
//! │  For each cell (dim-1)³:                                        │
//! │    Gather 8 corners in CUBE_POINTS order                        │
//! │    Bit i of cube index = corner[i].density > isolevel           │
//! │    Early-out if homogeneous (index == 0 or index == 255)        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Edge Vertices                       │
//! │    Lookup edge mask from EDGE_TABLE[cube index]                 │
//! │    For each crossed edge: interpolate crossing point            │
//! │    Key the edge by its two lattice indices                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Triangulation                       │
//! │    Walk TRI_TABLE[cube index] in triples                        │
//! │    Resolve each edge to a welded vertex index                   │
//! │    Emit indices in table order (winding preserved)              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<Vec3>     - Welded edge crossings                │
//! │  indices: Vec<u32>       - Triangle indices                     │
//! │  bounds: Aabb            - Mesh bounding box                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The extractor holds no state between calls. Buffers and the welding map
//! live for one call, so independent grids can be extracted concurrently.

mod cube_index;
mod interpolate;
mod weld;

pub use cube_index::build as classify_cube;
pub use interpolate::edge_vertex;
pub use weld::{edge_key, unpack_edge_key, VertexWelder};

use crate::constants::{coord_to_index, corner_coord, MIN_GRID_SIZE};
use crate::edge_table::{triangulation, EDGE_CORNERS, EDGE_TABLE};
use crate::error::{Result, TerrainError};
use crate::types::{Grid, MeshOutput};

/// Largest lattice index that still packs into half of an edge key.
const MAX_LATTICE_INDEX: usize = u32::MAX as usize;

/// Extract the welded isosurface mesh of `grid` at `isolevel`.
///
/// A field that is everywhere above or everywhere below the isolevel yields
/// an empty mesh, which is not an error.
///
/// # Errors
///
/// [`TerrainError::InvalidGrid`] if the grid has fewer than 2 points per axis
/// or is too large for 32-bit lattice indices.
#[cfg_attr(
  feature = "instrument",
  tracing::instrument(skip_all, name = "marching_cubes::extract")
)]
pub fn extract(grid: &Grid, isolevel: f32) -> Result<MeshOutput> {
  march(grid, isolevel, true)
}

/// Same traversal as [`extract`] with welding disabled.
///
/// Each cell emits its own vertex per crossed edge, so neighbouring cells
/// duplicate the vertices they share. Useful as a baseline when measuring
/// what welding saves.
pub fn extract_unwelded(grid: &Grid, isolevel: f32) -> Result<MeshOutput> {
  march(grid, isolevel, false)
}

fn march(grid: &Grid, isolevel: f32, weld: bool) -> Result<MeshOutput> {
  let dim = grid.dim();
  validate(grid)?;

  let cells = dim - 1;
  // Surface cells are typically a thin shell of the volume.
  let mut welder = VertexWelder::with_capacity(weld, cells * cells * 2);

  for z in 0..cells {
    for y in 0..cells {
      for x in 0..cells {
        process_cell(grid, [x, y, z], isolevel, &mut welder);
      }
    }
  }

  Ok(welder.finish())
}

#[inline]
fn process_cell(grid: &Grid, cell: [usize; 3], isolevel: f32, welder: &mut VertexWelder) {
  let dim = grid.dim();
  let corners = cube_index::gather_corners(grid, cell);
  let densities = corners.map(|c| c.density);

  let index = cube_index::build(&densities, isolevel);
  if cube_index::is_homogeneous(index) {
    return;
  }

  let edge_mask = EDGE_TABLE[index as usize];
  let mut edge_vertices = [0u32; 12];

  for (edge, &[c1, c2]) in EDGE_CORNERS.iter().enumerate() {
    if edge_mask & (1 << edge) == 0 {
      continue;
    }
    let (c1, c2) = (c1 as usize, c2 as usize);
    let a = corner_coord(cell, c1);
    let b = corner_coord(cell, c2);
    let key = edge_key(
      coord_to_index(a[0], a[1], a[2], dim),
      coord_to_index(b[0], b[1], b[2], dim),
    );
    let position = edge_vertex(
      isolevel,
      corners[c1].position,
      corners[c2].position,
      corners[c1].density,
      corners[c2].density,
    );
    edge_vertices[edge] = welder.vertex(key, position);
  }

  for tri in triangulation(index).chunks_exact(3) {
    welder.triangle([
      edge_vertices[tri[0] as usize],
      edge_vertices[tri[1] as usize],
      edge_vertices[tri[2] as usize],
    ]);
  }
}

fn validate(grid: &Grid) -> Result<()> {
  let dim = grid.dim();
  if dim < MIN_GRID_SIZE {
    return Err(TerrainError::InvalidGrid(format!(
      "grid needs at least {} points per axis, got {}",
      MIN_GRID_SIZE, dim
    )));
  }
  if grid.samples().len() != dim * dim * dim {
    return Err(TerrainError::InvalidGrid(format!(
      "grid of dim {} holds {} samples",
      dim,
      grid.samples().len()
    )));
  }
  if grid.samples().len() - 1 > MAX_LATTICE_INDEX {
    return Err(TerrainError::InvalidGrid(format!(
      "grid of dim {} exceeds 32-bit lattice indices",
      dim
    )));
  }
  Ok(())
}
