//! ChunkWorld - fixed cube of terrain chunks.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Generation                                                              │
//! │                                                                         │
//! │  index 0 .. world_size³  (x + y*W + z*W²)                               │
//! │           │                                                             │
//! │           ▼  rayon, one task per chunk                                  │
//! │  ┌─────────────────────────────────────────────────────────┐            │
//! │  │ sample_grid(origin, sampler) → extract(grid, isolevel)  │            │
//! │  │ origin = (x, y, z) * chunk_size                         │            │
//! │  └─────────────────────────────────────────────────────────┘            │
//! │           │                                                             │
//! │           ▼  calling thread, in index order                             │
//! │  Chunk::upload(renderer)                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each chunk welds only its own vertices. Neighbouring chunks sample the
//! same boundary points and produce coincident but separate vertices there.

use glam::Vec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::chunk::{build_mesh, Chunk};
use crate::config::TerrainConfig;
use crate::constants::{coord_to_index, index_to_coord};
use crate::density::DensitySampler;
use crate::error::Result;
use crate::metrics::GenerationStats;
use crate::render::{Camera, MeshRenderer};
use crate::types::MeshOutput;

/// All chunks of a world, stored flat in index order.
pub struct ChunkWorld<H> {
  world_size: usize,
  chunk_size: usize,
  chunks: Vec<Chunk<H>>,
}

impl<H> ChunkWorld<H> {
  /// Build and upload every chunk, extracting in parallel.
  ///
  /// Uploads happen afterwards on the calling thread, in index order.
  #[cfg_attr(
    feature = "instrument",
    tracing::instrument(skip_all, name = "world::generate")
  )]
  pub fn generate<S, R>(
    config: &TerrainConfig,
    sampler: &S,
    renderer: &mut R,
  ) -> Result<(Self, GenerationStats)>
  where
    S: DensitySampler + ?Sized,
    R: MeshRenderer<Handle = H>,
  {
    config.validate()?;
    let start = Instant::now();

    let meshes: Vec<MeshOutput> = (0..config.chunk_count())
      .into_par_iter()
      .map(|index| extract_chunk(config, sampler, index))
      .collect::<Result<_>>()?;

    Ok(Self::assemble(config, meshes, start, renderer))
  }

  /// Single-threaded variant of [`ChunkWorld::generate`].
  pub fn generate_sequential<S, R>(
    config: &TerrainConfig,
    sampler: &S,
    renderer: &mut R,
  ) -> Result<(Self, GenerationStats)>
  where
    S: DensitySampler + ?Sized,
    R: MeshRenderer<Handle = H>,
  {
    config.validate()?;
    let start = Instant::now();

    let meshes = (0..config.chunk_count())
      .map(|index| extract_chunk(config, sampler, index))
      .collect::<Result<Vec<_>>>()?;

    Ok(Self::assemble(config, meshes, start, renderer))
  }

  fn assemble<R>(
    config: &TerrainConfig,
    meshes: Vec<MeshOutput>,
    start: Instant,
    renderer: &mut R,
  ) -> (Self, GenerationStats)
  where
    R: MeshRenderer<Handle = H>,
  {
    let extract_us = start.elapsed().as_micros() as u64;
    let world_size = config.world_size;
    let chunk_size = config.chunk_size();

    let upload_start = Instant::now();
    let chunks: Vec<Chunk<H>> = meshes
      .into_iter()
      .enumerate()
      .map(|(index, mesh)| {
        let origin = chunk_origin(index, world_size, chunk_size);
        let mut chunk = Chunk::from_mesh(origin, chunk_size, mesh);
        chunk.upload(renderer);
        chunk
      })
      .collect();
    let upload_us = upload_start.elapsed().as_micros() as u64;

    let world = Self {
      world_size,
      chunk_size,
      chunks,
    };
    let stats = GenerationStats {
      chunks: world.len(),
      non_empty_chunks: world.chunks.iter().filter(|c| c.triangle_count() > 0).count(),
      vertices: world.total_vertices(),
      triangles: world.total_triangles(),
      extract_us,
      upload_us,
    };

    tracing::info!(
      chunks = stats.chunks,
      non_empty = stats.non_empty_chunks,
      vertices = stats.vertices,
      triangles = stats.triangles,
      extract_us = stats.extract_us,
      upload_us = stats.upload_us,
      "world generated"
    );

    (world, stats)
  }

  /// Draw every chunk within `max_distance` of the camera.
  ///
  /// Returns the number of chunks drawn.
  pub fn draw_visible<R>(&self, camera: &Camera, max_distance: f32, renderer: &mut R) -> usize
  where
    R: MeshRenderer<Handle = H>,
  {
    let mut drawn = 0;
    for chunk in &self.chunks {
      if chunk.is_loaded() && chunk.is_visible(camera, max_distance) {
        chunk.draw(renderer);
        drawn += 1;
      }
    }
    drawn
  }

  /// Chunks within `max_distance` of the camera, without drawing.
  pub fn visible<'a>(
    &'a self,
    camera: &'a Camera,
    max_distance: f32,
  ) -> impl Iterator<Item = &'a Chunk<H>> + 'a {
    self
      .chunks
      .iter()
      .filter(move |c| c.is_visible(camera, max_distance))
  }

  /// Release every chunk's renderer resources. Safe to call repeatedly.
  pub fn unload_all<R>(&mut self, renderer: &mut R)
  where
    R: MeshRenderer<Handle = H>,
  {
    for chunk in &mut self.chunks {
      chunk.unload(renderer);
    }
    tracing::debug!(chunks = self.chunks.len(), "world unloaded");
  }

  /// Chunk at grid coordinate `(x, y, z)`, if inside the world.
  pub fn chunk(&self, x: usize, y: usize, z: usize) -> Option<&Chunk<H>> {
    let w = self.world_size;
    if x >= w || y >= w || z >= w {
      return None;
    }
    self.chunks.get(coord_to_index(x, y, z, w))
  }

  pub fn chunks(&self) -> &[Chunk<H>] {
    &self.chunks
  }

  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// Chunks per axis.
  pub fn world_size(&self) -> usize {
    self.world_size
  }

  /// World units per chunk axis.
  pub fn chunk_size(&self) -> usize {
    self.chunk_size
  }

  /// Center of the world volume.
  pub fn center(&self) -> Vec3 {
    let span = (self.world_size.saturating_sub(1) * self.chunk_size) as f32;
    Vec3::splat(span * 0.5)
  }

  pub fn total_vertices(&self) -> usize {
    self.chunks.iter().map(Chunk::vertex_count).sum()
  }

  pub fn total_triangles(&self) -> usize {
    self.chunks.iter().map(Chunk::triangle_count).sum()
  }
}

/// World-space origin of chunk `index`.
pub fn chunk_origin(index: usize, world_size: usize, chunk_size: usize) -> Vec3 {
  let (x, y, z) = index_to_coord(index, world_size);
  Vec3::new(x as f32, y as f32, z as f32) * chunk_size as f32
}

fn extract_chunk<S>(config: &TerrainConfig, sampler: &S, index: usize) -> Result<MeshOutput>
where
  S: DensitySampler + ?Sized,
{
  let origin = chunk_origin(index, config.world_size, config.chunk_size());
  build_mesh(origin, sampler, config.isolevel, config.grid_size)
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
