//! A single terrain tile.
//!
//! ```text
//!         world_position
//!              │
//!   ┌──────────┼──────────┐   local sample (x, y, z) sits at
//!   │          │          │     (x, y, z) - chunk_size / 2
//!   │          ●          │   and reads the field at
//!   │                     │     world_position + (x, y, z)
//!   └─────────────────────┘
//!   ◄──── chunk_size ─────►
//! ```
//!
//! The mesh is centered on `world_position`, which is also the center of the
//! visibility box.

use glam::Vec3;

use crate::constants::chunk_size_for;
use crate::density::DensitySampler;
use crate::error::Result;
use crate::marching_cubes::extract;
use crate::render::{Camera, MeshRenderer};
use crate::types::{Aabb, Grid, MeshOutput, Sample};

/// One chunk: a CPU mesh plus, once uploaded, its renderer handle.
pub struct Chunk<H> {
  world_position: Vec3,
  chunk_size: usize,
  mesh: MeshOutput,
  handle: Option<H>,
}

impl<H> Chunk<H> {
  /// Sample the field around `world_position` and extract the surface.
  ///
  /// Pure CPU work with no renderer involved, so chunks can be built on
  /// worker threads and uploaded later.
  pub fn new<S>(world_position: Vec3, sampler: &S, isolevel: f32, grid_size: usize) -> Result<Self>
  where
    S: DensitySampler + ?Sized,
  {
    let mesh = build_mesh(world_position, sampler, isolevel, grid_size)?;
    Ok(Self::from_mesh(world_position, chunk_size_for(grid_size), mesh))
  }

  /// Wrap an already extracted mesh.
  pub fn from_mesh(world_position: Vec3, chunk_size: usize, mesh: MeshOutput) -> Self {
    Self {
      world_position,
      chunk_size,
      mesh,
      handle: None,
    }
  }

  /// Hand the mesh to the renderer. Does nothing if already uploaded.
  pub fn upload<R>(&mut self, renderer: &mut R)
  where
    R: MeshRenderer<Handle = H>,
  {
    if self.handle.is_none() {
      self.handle = Some(renderer.upload(&self.mesh));
    }
  }

  /// Draw at `world_position`. No-op unless uploaded.
  pub fn draw<R>(&self, renderer: &mut R)
  where
    R: MeshRenderer<Handle = H>,
  {
    if let Some(handle) = &self.handle {
      renderer.draw(handle, self.world_position);
    }
  }

  /// Release renderer resources. Safe to call repeatedly.
  pub fn unload<R>(&mut self, renderer: &mut R)
  where
    R: MeshRenderer<Handle = H>,
  {
    if let Some(handle) = self.handle.take() {
      renderer.release(handle);
    }
  }

  /// Box vs. sphere test against the camera's draw radius.
  ///
  /// The box is centered on `world_position` with half extent
  /// `chunk_size / 2`. Touching the sphere counts as visible.
  pub fn is_visible(&self, camera: &Camera, max_distance: f32) -> bool {
    self.bounds().intersects_sphere(camera.position, max_distance)
  }

  /// World-space tile bounds used for culling.
  pub fn bounds(&self) -> Aabb {
    Aabb::from_center_half_extents(self.world_position, Vec3::splat(self.chunk_size as f32 * 0.5))
  }

  pub fn world_position(&self) -> Vec3 {
    self.world_position
  }

  pub fn chunk_size(&self) -> usize {
    self.chunk_size
  }

  /// CPU mesh in chunk-local space.
  pub fn mesh(&self) -> &MeshOutput {
    &self.mesh
  }

  pub fn handle(&self) -> Option<&H> {
    self.handle.as_ref()
  }

  pub fn is_loaded(&self) -> bool {
    self.handle.is_some()
  }

  pub fn vertex_count(&self) -> usize {
    self.mesh.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.mesh.triangle_count()
  }
}

/// Sample and extract the mesh for a chunk at `world_position`.
pub fn build_mesh<S>(
  world_position: Vec3,
  sampler: &S,
  isolevel: f32,
  grid_size: usize,
) -> Result<MeshOutput>
where
  S: DensitySampler + ?Sized,
{
  let grid = sample_grid(world_position, sampler, grid_size)?;
  let mesh = extract(&grid, isolevel)?;

  tracing::debug!(
    x = world_position.x,
    y = world_position.y,
    z = world_position.z,
    vertices = mesh.vertices.len(),
    triangles = mesh.triangle_count(),
    "chunk extracted"
  );
  Ok(mesh)
}

/// Sample `grid_size³` points of the field for a chunk at `world_position`.
pub fn sample_grid<S>(world_position: Vec3, sampler: &S, grid_size: usize) -> Result<Grid>
where
  S: DensitySampler + ?Sized,
{
  let half = chunk_size_for(grid_size) as f32 * 0.5;
  Grid::from_fn(grid_size, |x, y, z| {
    let index = Vec3::new(x as f32, y as f32, z as f32);
    Sample::new(index - half, sampler.density(world_position + index))
  })
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
