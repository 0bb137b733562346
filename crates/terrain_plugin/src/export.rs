//! Wavefront OBJ export of chunk meshes.
//!
//! Each mesh is translated by its chunk origin into world space. Vertices
//! keep their welding, so faces share indices within a chunk. OBJ indices
//! are 1-based and global across the file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glam::Vec3;

use crate::error::{Result, TerrainError};
use crate::types::MeshOutput;
use crate::world::ChunkWorld;

/// Write `(origin, mesh)` pairs as one OBJ object per non-empty mesh.
///
/// Returns the number of vertices written.
pub fn write_obj<'a, W, I>(writer: &mut W, meshes: I) -> io::Result<usize>
where
  W: Write,
  I: IntoIterator<Item = (Vec3, &'a MeshOutput)>,
{
  let mut base = 1usize;
  for (chunk, (origin, mesh)) in meshes.into_iter().enumerate() {
    if mesh.is_empty() {
      continue;
    }
    writeln!(writer, "o chunk_{}", chunk)?;
    for v in &mesh.vertices {
      let p = *v + origin;
      writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for tri in mesh.indices.chunks_exact(3) {
      writeln!(
        writer,
        "f {} {} {}",
        base + tri[0] as usize,
        base + tri[1] as usize,
        base + tri[2] as usize
      )?;
    }
    base += mesh.vertices.len();
  }
  writer.flush()?;
  Ok(base - 1)
}

/// Export every chunk of `world` to an OBJ file at `path`.
pub fn export_world<H>(world: &ChunkWorld<H>, path: &Path) -> Result<usize> {
  let io_err = |source| TerrainError::Io {
    path: path.to_path_buf(),
    source,
  };

  let file = File::create(path).map_err(io_err)?;
  let mut writer = BufWriter::new(file);
  let meshes = world.chunks().iter().map(|c| (c.world_position(), c.mesh()));
  let written = write_obj(&mut writer, meshes).map_err(io_err)?;

  tracing::info!(path = %path.display(), vertices = written, "exported world mesh");
  Ok(written)
}
