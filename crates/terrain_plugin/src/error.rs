//! Error types for terrain generation.

use std::path::PathBuf;

/// Errors surfaced by grid construction, extraction, and settings I/O.
///
/// Numerical degeneracies during interpolation are resolved locally and never
/// show up here.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
  #[error("invalid grid: {0}")]
  InvalidGrid(String),

  #[error("invalid config: {0}")]
  InvalidConfig(String),

  #[error("failed to access {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {path}: {source}")]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("failed to serialize config: {0}")]
  ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
