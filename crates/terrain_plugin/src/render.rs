//! Renderer seam and camera.
//!
//! The core never talks to a graphics API. Chunks hand their meshes to a
//! [`MeshRenderer`], keep the returned handle, and draw or release through it.
//!
//! ```text
//!   Chunk::upload ──► renderer.upload(&mesh) ──► Handle (stored in chunk)
//!   Chunk::draw   ──► renderer.draw(&handle, world_position)
//!   Chunk::unload ──► renderer.release(handle)
//! ```
//!
//! GPU resource creation has thread affinity, so the renderer is only ever
//! borrowed mutably by the thread that owns it. Meshes may be computed on
//! any thread.

use glam::Vec3;

use crate::types::MeshOutput;

/// Callback interface for a graphics backend.
pub trait MeshRenderer {
  /// Backend reference to uploaded mesh buffers.
  type Handle;

  /// Create device buffers for `mesh`.
  fn upload(&mut self, mesh: &MeshOutput) -> Self::Handle;

  /// Draw previously uploaded buffers translated to `position`.
  fn draw(&mut self, handle: &Self::Handle, position: Vec3);

  /// Free device buffers. The handle is consumed.
  fn release(&mut self, handle: Self::Handle);
}

/// No-op implementation for testing and headless operation.
pub struct NullRenderer;

impl MeshRenderer for NullRenderer {
  type Handle = ();

  fn upload(&mut self, _mesh: &MeshOutput) -> Self::Handle {
    // No-op
  }

  fn draw(&mut self, _handle: &Self::Handle, _position: Vec3) {
    // No-op
  }

  fn release(&mut self, _handle: Self::Handle) {
    // No-op
  }
}

/// Handle into a [`HeadlessRenderer`] slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(usize);

impl MeshHandle {
  pub fn slot(&self) -> usize {
    self.0
  }
}

/// In-memory renderer that keeps uploaded meshes and counts calls.
///
/// Stands in for a GPU backend in the demo binary and in tests.
#[derive(Default)]
pub struct HeadlessRenderer {
  slots: Vec<Option<MeshOutput>>,
  free: Vec<usize>,
  stats: RenderStats,
}

/// Call counters for [`HeadlessRenderer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
  pub uploads: u64,
  pub releases: u64,
  /// Draw calls since the last [`HeadlessRenderer::begin_frame`].
  pub frame_draws: u64,
  /// Triangles submitted since the last [`HeadlessRenderer::begin_frame`].
  pub frame_triangles: u64,
  pub total_draws: u64,
}

impl HeadlessRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset per-frame counters.
  pub fn begin_frame(&mut self) {
    self.stats.frame_draws = 0;
    self.stats.frame_triangles = 0;
  }

  pub fn stats(&self) -> RenderStats {
    self.stats
  }

  /// Number of meshes currently resident.
  pub fn live_meshes(&self) -> usize {
    self.slots.iter().filter(|s| s.is_some()).count()
  }

  /// Resident mesh behind `handle`, if it has not been released.
  pub fn mesh(&self, handle: &MeshHandle) -> Option<&MeshOutput> {
    self.slots.get(handle.0).and_then(Option::as_ref)
  }
}

impl MeshRenderer for HeadlessRenderer {
  type Handle = MeshHandle;

  fn upload(&mut self, mesh: &MeshOutput) -> MeshHandle {
    self.stats.uploads += 1;
    match self.free.pop() {
      Some(slot) => {
        self.slots[slot] = Some(mesh.clone());
        MeshHandle(slot)
      }
      None => {
        self.slots.push(Some(mesh.clone()));
        MeshHandle(self.slots.len() - 1)
      }
    }
  }

  fn draw(&mut self, handle: &MeshHandle, _position: Vec3) {
    let Some(mesh) = self.mesh(handle) else {
      tracing::warn!(slot = handle.0, "draw with released mesh handle");
      return;
    };
    let triangles = mesh.triangle_count() as u64;

    self.stats.frame_draws += 1;
    self.stats.frame_triangles += triangles;
    self.stats.total_draws += 1;
  }

  fn release(&mut self, handle: MeshHandle) {
    if let Some(slot) = self.slots.get_mut(handle.0) {
      if slot.take().is_some() {
        self.stats.releases += 1;
        self.free.push(handle.0);
      }
    }
  }
}

/// Perspective camera. The terrain core only reads `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
  pub position: Vec3,
  pub target: Vec3,
  pub up: Vec3,
  /// Vertical field of view in degrees.
  pub fov_y: f32,
}

impl Default for Camera {
  fn default() -> Self {
    Self {
      position: Vec3::splat(50.0),
      target: Vec3::ZERO,
      up: Vec3::Y,
      fov_y: 60.0,
    }
  }
}

impl Camera {
  pub fn new(position: Vec3, target: Vec3) -> Self {
    Self {
      position,
      target,
      ..Self::default()
    }
  }

  /// Unit vector from position towards target.
  pub fn forward(&self) -> Vec3 {
    (self.target - self.position).normalize_or_zero()
  }

  /// Place the camera on a horizontal circle around `center`, looking at it.
  pub fn orbit(&mut self, center: Vec3, radius: f32, height: f32, angle: f32) {
    let (sin, cos) = angle.sin_cos();
    self.position = center + Vec3::new(cos * radius, height, sin * radius);
    self.target = center;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn triangle_mesh() -> MeshOutput {
    MeshOutput {
      vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
      indices: vec![0, 1, 2],
      ..MeshOutput::default()
    }
  }

  #[test]
  fn test_headless_counts_calls() {
    let mut renderer = HeadlessRenderer::new();
    let handle = renderer.upload(&triangle_mesh());

    renderer.draw(&handle, Vec3::ZERO);
    renderer.draw(&handle, Vec3::ONE);
    let stats = renderer.stats();
    assert_eq!(stats.uploads, 1);
    assert_eq!(stats.frame_draws, 2);
    assert_eq!(stats.frame_triangles, 2);

    renderer.begin_frame();
    assert_eq!(renderer.stats().frame_draws, 0);
    assert_eq!(renderer.stats().total_draws, 2);
  }

  #[test]
  fn test_headless_release_reuses_slot() {
    let mut renderer = HeadlessRenderer::new();
    let a = renderer.upload(&triangle_mesh());
    let slot = a.slot();
    renderer.release(a);
    assert_eq!(renderer.live_meshes(), 0);

    let b = renderer.upload(&triangle_mesh());
    assert_eq!(b.slot(), slot);
    assert_eq!(renderer.live_meshes(), 1);
    assert_eq!(renderer.stats().releases, 1);
  }

  #[test]
  fn test_headless_ignores_stale_handles() {
    let mut renderer = HeadlessRenderer::new();
    let handle = renderer.upload(&triangle_mesh());
    let stale = handle;
    renderer.release(handle);

    renderer.draw(&stale, Vec3::ZERO);
    renderer.release(stale);
    assert_eq!(renderer.stats().frame_draws, 0);
    assert_eq!(renderer.stats().releases, 1);
  }

  #[test]
  fn test_camera_defaults() {
    let camera = Camera::default();
    assert_eq!(camera.position, Vec3::splat(50.0));
    assert_eq!(camera.target, Vec3::ZERO);
    assert_eq!(camera.fov_y, 60.0);
    assert!((camera.forward().length() - 1.0).abs() < 1e-6);
  }

  #[test]
  fn test_camera_orbit() {
    let mut camera = Camera::default();
    camera.orbit(Vec3::splat(10.0), 5.0, 2.0, 0.0);
    assert!((camera.position - Vec3::new(15.0, 12.0, 10.0)).length() < 1e-5);
    assert_eq!(camera.target, Vec3::splat(10.0));
  }
}
