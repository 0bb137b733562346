//! Density field samplers.
//!
//! Chunks consume the field through [`DensitySampler`] and never see how it
//! is computed. Any `Fn(Vec3) -> f32` closure works, and the analytic
//! samplers below are deterministic shapes that are easy to verify.
//!
//! Convention: density above the isolevel is inside the terrain.

use glam::Vec3;

/// Scalar field evaluated at world-space points.
///
/// Implementations must be pure. Chunks sample in parallel, so the same
/// point must always return the same value.
pub trait DensitySampler: Send + Sync {
  fn density(&self, point: Vec3) -> f32;
}

impl<F> DensitySampler for F
where
  F: Fn(Vec3) -> f32 + Send + Sync,
{
  #[inline]
  fn density(&self, point: Vec3) -> f32 {
    self(point)
  }
}

/// Uniform field. Produces no surface for any isolevel but its own value.
#[derive(Clone, Copy, Debug)]
pub struct ConstantDensity(pub f32);

impl DensitySampler for ConstantDensity {
  #[inline]
  fn density(&self, _point: Vec3) -> f32 {
    self.0
  }
}

/// Solid ball: `radius - |p - center|`, positive inside.
#[derive(Clone, Copy, Debug)]
pub struct SphereDensity {
  pub center: Vec3,
  pub radius: f32,
}

impl SphereDensity {
  pub fn new(center: Vec3, radius: f32) -> Self {
    Self { center, radius }
  }
}

impl DensitySampler for SphereDensity {
  #[inline]
  fn density(&self, point: Vec3) -> f32 {
    self.radius - point.distance(self.center)
  }
}

/// Solid ground below `height`: `height - p.y`, positive underground.
///
/// The surface crosses every chunk column at the same height, which makes
/// tiling gaps easy to spot.
#[derive(Clone, Copy, Debug)]
pub struct GroundPlaneDensity {
  pub height: f32,
}

impl Default for GroundPlaneDensity {
  fn default() -> Self {
    Self { height: 0.0 }
  }
}

impl GroundPlaneDensity {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }
}

impl DensitySampler for GroundPlaneDensity {
  #[inline]
  fn density(&self, point: Vec3) -> f32 {
    self.height - point.y
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_with<S: DensitySampler>(sampler: &S, point: Vec3) -> f32 {
    sampler.density(point)
  }

  #[test]
  fn test_closure_is_sampler() {
    let field = |p: Vec3| p.x + p.y;
    assert_eq!(sample_with(&field, Vec3::new(1.0, 2.0, 3.0)), 3.0);
  }

  #[test]
  fn test_sampler_is_object_safe() {
    let samplers: Vec<Box<dyn DensitySampler>> = vec![
      Box::new(ConstantDensity(0.5)),
      Box::new(SphereDensity::new(Vec3::ZERO, 1.0)),
      Box::new(GroundPlaneDensity::new()),
    ];
    assert_eq!(samplers[0].density(Vec3::splat(9.0)), 0.5);
    assert_eq!(samplers[1].density(Vec3::ZERO), 1.0);
    assert_eq!(samplers[2].density(Vec3::new(0.0, -2.0, 0.0)), 2.0);
  }

  #[test]
  fn test_sphere_sign() {
    let sphere = SphereDensity::new(Vec3::splat(5.0), 3.0);
    assert!(sphere.density(Vec3::splat(5.0)) > 0.0);
    assert!(sphere.density(Vec3::new(5.0, 5.0, 8.0)).abs() < 1e-6);
    assert!(sphere.density(Vec3::ZERO) < 0.0);
  }

  #[test]
  fn test_ground_plane_height() {
    let ground = GroundPlaneDensity::new().with_height(4.0);
    assert!(ground.density(Vec3::new(100.0, 3.0, -50.0)) > 0.0);
    assert!(ground.density(Vec3::new(0.0, 5.0, 0.0)) < 0.0);
  }
}
