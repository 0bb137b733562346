//! Core data types for Marching Cubes extraction.

use glam::Vec3;

use crate::constants::{coord_to_index, MIN_GRID_SIZE};
use crate::error::{Result, TerrainError};

/// One lattice point of a chunk grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
  /// Chunk-local position of the lattice point.
  pub position: Vec3,

  /// Scalar field value at this point.
  pub density: f32,
}

impl Sample {
  #[inline]
  pub const fn new(position: Vec3, density: f32) -> Self {
    Self { position, density }
  }
}

/// Cubic `dim × dim × dim` grid of samples, stored flat.
///
/// Layout: `index = x + y * dim + z * dim²` (see [`coord_to_index`]).
#[derive(Clone, Debug)]
pub struct Grid {
  dim: usize,
  samples: Vec<Sample>,
}

impl Grid {
  /// Wrap a flat sample buffer.
  ///
  /// Fails if `dim < 2` or the buffer does not hold exactly `dim³` samples.
  pub fn new(dim: usize, samples: Vec<Sample>) -> Result<Self> {
    validate_dim(dim)?;
    let expected = dim * dim * dim;
    if samples.len() != expected {
      return Err(TerrainError::InvalidGrid(format!(
        "expected {} samples for a {}³ grid, got {}",
        expected,
        dim,
        samples.len()
      )));
    }
    Ok(Self { dim, samples })
  }

  /// Build a grid by evaluating `f(x, y, z)` at every lattice point.
  pub fn from_fn<F>(dim: usize, mut f: F) -> Result<Self>
  where
    F: FnMut(usize, usize, usize) -> Sample,
  {
    validate_dim(dim)?;
    let mut samples = Vec::with_capacity(dim * dim * dim);
    for z in 0..dim {
      for y in 0..dim {
        for x in 0..dim {
          samples.push(f(x, y, z));
        }
      }
    }
    Ok(Self { dim, samples })
  }

  /// Build a grid from nested vectors indexed `[x][y][z]`.
  ///
  /// Rejects ragged input and any shape that is not a cube.
  pub fn from_nested(points: Vec<Vec<Vec<Sample>>>) -> Result<Self> {
    let dim = points.len();
    validate_dim(dim)?;

    for (x, plane) in points.iter().enumerate() {
      if plane.len() != dim {
        return Err(TerrainError::InvalidGrid(format!(
          "plane x={} has {} rows, expected {}",
          x,
          plane.len(),
          dim
        )));
      }
      for (y, column) in plane.iter().enumerate() {
        if column.len() != dim {
          return Err(TerrainError::InvalidGrid(format!(
            "column ({}, {}) has {} samples, expected {}",
            x,
            y,
            column.len(),
            dim
          )));
        }
      }
    }

    Self::from_fn(dim, |x, y, z| points[x][y][z])
  }

  /// Samples per axis.
  #[inline]
  pub fn dim(&self) -> usize {
    self.dim
  }

  /// Number of cubes (cells) in the grid.
  #[inline]
  pub fn cell_count(&self) -> usize {
    let cells = self.dim - 1;
    cells * cells * cells
  }

  #[inline]
  pub fn get(&self, x: usize, y: usize, z: usize) -> &Sample {
    &self.samples[coord_to_index(x, y, z, self.dim)]
  }

  #[inline]
  pub fn samples(&self) -> &[Sample] {
    &self.samples
  }
}

fn validate_dim(dim: usize) -> Result<()> {
  if dim < MIN_GRID_SIZE {
    return Err(TerrainError::InvalidGrid(format!(
      "grid needs at least {} points per axis, got {}",
      MIN_GRID_SIZE, dim
    )));
  }
  Ok(())
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  pub min: Vec3,
  pub max: Vec3,
}

impl Aabb {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: Vec3::splat(f32::INFINITY),
      max: Vec3::splat(f32::NEG_INFINITY),
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    Self { min, max }
  }

  /// Create AABB from center and half-extents.
  pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
    Self {
      min: center - half_extents,
      max: center + half_extents,
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: Vec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }

  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    point.cmpge(self.min).all() && point.cmple(self.max).all()
  }

  /// Point inside the box closest to `point`.
  #[inline]
  pub fn closest_point(&self, point: Vec3) -> Vec3 {
    point.clamp(self.min, self.max)
  }

  /// Box vs. sphere overlap. Touching counts as overlapping.
  #[inline]
  pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
    self.closest_point(center).distance_squared(center) <= radius * radius
  }

  /// Translate the box by `offset`.
  #[inline]
  pub fn translated(&self, offset: Vec3) -> Self {
    Self {
      min: self.min + offset,
      max: self.max + offset,
    }
  }
}

impl Default for Aabb {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extraction result: welded vertex positions plus a triangle index list.
///
/// Every index is `< vertices.len()` and `indices.len() % 3 == 0`.
#[derive(Clone, Debug, Default)]
pub struct MeshOutput {
  /// Vertex positions in chunk-local space.
  pub vertices: Vec<Vec3>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: Aabb,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = Aabb::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Iterate triangles as position triples.
  pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    self.indices.chunks_exact(3).map(|tri| {
      [
        self.vertices[tri[0] as usize],
        self.vertices[tri[1] as usize],
        self.vertices[tri[2] as usize],
      ]
    })
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
