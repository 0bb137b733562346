//! terrain_plugin - engine independent chunked Marching Cubes terrain
//!
//! This crate turns a scalar density field into welded triangle meshes and
//! tiles them into a fixed cube of chunks that can be culled and drawn
//! through any renderer.
//!
//! # Features
//!
//! - **Marching Cubes**: Classic 256-case isosurface extraction with edge
//!   interpolation and integer-keyed vertex welding
//! - **Chunk World**: `world_size³` tiles extracted in parallel with rayon,
//!   uploaded serially on the render thread
//! - **Culling**: Box vs. sphere visibility against the camera draw radius
//! - **Perlin Density**: 3D Perlin field with configurable scale, frequency,
//!   and a randomized offset
//!
//! # Example
//!
//! ```ignore
//! use terrain_plugin::{ChunkWorld, HeadlessRenderer, PerlinDensity, TerrainConfig, Camera};
//!
//! let config = TerrainConfig::default();
//! let sampler = PerlinDensity::from_settings(&config.noise);
//! let mut renderer = HeadlessRenderer::new();
//!
//! let (world, stats) = ChunkWorld::generate(&config, &sampler, &mut renderer)?;
//! println!("Generated {} triangles in {} chunks", stats.triangles, stats.chunks);
//!
//! let drawn = world.draw_visible(&Camera::default(), config.draw_distance, &mut renderer);
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{
  chunk_size_for, coord_to_index, index_to_coord, CUBE_POINTS_X, CUBE_POINTS_Y, CUBE_POINTS_Z,
};
pub use edge_table::{triangulation, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
pub use error::{Result, TerrainError};
pub use types::{Aabb, Grid, MeshOutput, Sample};

// Isosurface extraction
pub mod marching_cubes;
pub use marching_cubes::{extract, extract_unwelded};

// Density fields
pub mod density;
pub mod perlin;
pub use density::{ConstantDensity, DensitySampler, GroundPlaneDensity, SphereDensity};
pub use perlin::PerlinDensity;

// Chunks and world
pub mod chunk;
pub mod world;
pub use chunk::Chunk;
pub use world::ChunkWorld;

// Renderer seam
pub mod render;
pub use render::{Camera, HeadlessRenderer, MeshHandle, MeshRenderer, NullRenderer, RenderStats};

// Settings, statistics, export
pub mod config;
pub mod export;
pub mod metrics;
pub use config::{FrameSettings, NoiseSettings, TerrainConfig};
pub use metrics::{FrameMetrics, GenerationStats, RollingWindow};
