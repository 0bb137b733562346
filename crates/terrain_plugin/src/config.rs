//! Terrain settings, persisted as TOML.
//!
//! Every field has a default, so a partial file only overrides what it names.
//!
//! ```toml
//! grid_size = 33
//! isolevel = 0.25
//! world_size = 4
//! draw_distance = 100.0
//!
//! [noise]
//! scale = 1.0
//! frequency = 0.1
//! # offset = [0.0, 0.0, 0.0]   # randomized when absent
//! # seed = 42
//!
//! [frame]
//! target_ups = 60
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
  chunk_size_for, DEFAULT_DRAW_DISTANCE, DEFAULT_GRID_SIZE, DEFAULT_ISOLEVEL, DEFAULT_WORLD_SIZE,
  MAX_LATTICE_POINTS, MIN_GRID_SIZE,
};
use crate::error::{Result, TerrainError};

/// Root terrain configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
  /// Sample points per chunk axis.
  pub grid_size: usize,
  /// Surface threshold.
  pub isolevel: f32,
  /// Chunks per world axis.
  pub world_size: usize,
  /// Culling radius around the camera, in world units.
  pub draw_distance: f32,
  pub noise: NoiseSettings,
  pub frame: FrameSettings,
}

/// Perlin density parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
  pub scale: f32,
  pub frequency: f32,
  /// Fixed sampling offset. Randomized at startup when absent.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<[f32; 3]>,
  /// Seed for the permutation table and the random offset.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seed: Option<u64>,
}

/// Frame loop pacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
  /// Fixed updates per second.
  pub target_ups: u32,
}

impl Default for TerrainConfig {
  fn default() -> Self {
    Self {
      grid_size: DEFAULT_GRID_SIZE,
      isolevel: DEFAULT_ISOLEVEL,
      world_size: DEFAULT_WORLD_SIZE,
      draw_distance: DEFAULT_DRAW_DISTANCE,
      noise: NoiseSettings::default(),
      frame: FrameSettings::default(),
    }
  }
}

impl Default for NoiseSettings {
  fn default() -> Self {
    Self {
      scale: 1.0,
      frequency: 0.1,
      offset: None,
      seed: None,
    }
  }
}

impl Default for FrameSettings {
  fn default() -> Self {
    Self { target_ups: 60 }
  }
}

impl FrameSettings {
  /// Seconds per fixed update. A zero rate is treated as one update per second.
  pub fn fixed_delta_time(&self) -> f32 {
    1.0 / self.target_ups.max(1) as f32
  }
}

impl TerrainConfig {
  /// Load and validate configuration from a TOML file.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path).map_err(|source| TerrainError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let config: TerrainConfig = toml::from_str(&content).map_err(|source| TerrainError::ConfigParse {
      path: path.to_path_buf(),
      source,
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Load `path`, or write the defaults there first if it does not exist.
  pub fn load_or_create(path: &Path) -> Result<Self> {
    if path.exists() {
      return Self::load(path);
    }

    let config = Self::default();
    config.save(path)?;
    tracing::info!(path = %path.display(), "wrote default terrain config");
    Ok(config)
  }

  /// Write configuration as TOML, creating parent directories as needed.
  pub fn save(&self, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(self)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent).map_err(|source| TerrainError::Io {
        path: parent.to_path_buf(),
        source,
      })?;
    }
    std::fs::write(path, content).map_err(|source| TerrainError::Io {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Reject values the generator cannot work with.
  pub fn validate(&self) -> Result<()> {
    if self.grid_size < MIN_GRID_SIZE {
      return Err(TerrainError::InvalidConfig(format!(
        "grid_size must be at least {}, got {}",
        MIN_GRID_SIZE, self.grid_size
      )));
    }
    if self.world_size == 0 {
      return Err(TerrainError::InvalidConfig(
        "world_size must be at least 1".into(),
      ));
    }
    let grid_points = (self.grid_size as u64)
      .checked_mul(self.grid_size as u64)
      .and_then(|n| n.checked_mul(self.grid_size as u64));
    if !matches!(grid_points, Some(n) if n <= MAX_LATTICE_POINTS) {
      return Err(TerrainError::InvalidConfig(format!(
        "grid_size {} exceeds 32-bit lattice indices",
        self.grid_size
      )));
    }
    if cubed(self.world_size).is_none() {
      return Err(TerrainError::InvalidConfig(format!(
        "world_size {} overflows the chunk count",
        self.world_size
      )));
    }
    if !self.isolevel.is_finite() {
      return Err(TerrainError::InvalidConfig(format!(
        "isolevel must be finite, got {}",
        self.isolevel
      )));
    }
    if self.draw_distance.is_nan() || self.draw_distance <= 0.0 {
      return Err(TerrainError::InvalidConfig(format!(
        "draw_distance must be positive, got {}",
        self.draw_distance
      )));
    }
    if !self.noise.scale.is_finite() || !self.noise.frequency.is_finite() {
      return Err(TerrainError::InvalidConfig(
        "noise scale and frequency must be finite".into(),
      ));
    }
    Ok(())
  }

  /// World units per chunk axis (`grid_size - 1`).
  pub fn chunk_size(&self) -> usize {
    chunk_size_for(self.grid_size)
  }

  /// Total number of chunks in the world. Saturates for sizes that
  /// [`TerrainConfig::validate`] rejects.
  pub fn chunk_count(&self) -> usize {
    cubed(self.world_size).unwrap_or(usize::MAX)
  }

  pub fn with_grid_size(mut self, grid_size: usize) -> Self {
    self.grid_size = grid_size;
    self
  }

  pub fn with_isolevel(mut self, isolevel: f32) -> Self {
    self.isolevel = isolevel;
    self
  }

  pub fn with_world_size(mut self, world_size: usize) -> Self {
    self.world_size = world_size;
    self
  }

  pub fn with_draw_distance(mut self, draw_distance: f32) -> Self {
    self.draw_distance = draw_distance;
    self
  }
}

fn cubed(n: usize) -> Option<usize> {
  n.checked_mul(n)?.checked_mul(n)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
