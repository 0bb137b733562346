//! Perlin noise terrain density.
//!
//! ```text
//! density(p) = (perlin((p + offset) * scale * frequency) + 1) / 2
//! ```
//!
//! Noise is evaluated in f64. The offset can sit around 1e7, where f32 has
//! no fractional precision left.

use glam::{DVec3, Vec3};
use noise::{NoiseFn, Perlin, Seedable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::NoiseSettings;
use crate::density::DensitySampler;

/// Upper bound (exclusive) of each randomized offset component.
pub const MAX_RANDOM_OFFSET: f32 = 10_000_000.0;

/// 3D Perlin noise remapped to `[0, 1]`.
#[derive(Clone)]
pub struct PerlinDensity {
  perlin: Perlin,
  scale: f64,
  frequency: f64,
  offset: DVec3,
}

impl Default for PerlinDensity {
  fn default() -> Self {
    let settings = NoiseSettings::default();
    Self {
      perlin: Perlin::default(),
      scale: settings.scale as f64,
      frequency: settings.frequency as f64,
      offset: DVec3::ZERO,
    }
  }
}

impl PerlinDensity {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build from settings, drawing a random offset when none is configured.
  ///
  /// A configured `seed` makes both the permutation table and the random
  /// offset reproducible.
  pub fn from_settings(settings: &NoiseSettings) -> Self {
    let offset = match settings.offset {
      Some(offset) => Vec3::from_array(offset),
      None => random_offset(settings.seed),
    };
    let perlin_seed = settings.seed.map_or(Perlin::DEFAULT_SEED, |s| s as u32);

    Self::new()
      .with_seed(perlin_seed)
      .with_scale(settings.scale)
      .with_frequency(settings.frequency)
      .with_offset(offset)
  }

  pub fn with_seed(mut self, seed: u32) -> Self {
    self.perlin = self.perlin.set_seed(seed);
    self
  }

  pub fn with_scale(mut self, scale: f32) -> Self {
    self.scale = scale as f64;
    self
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency as f64;
    self
  }

  pub fn with_offset(mut self, offset: Vec3) -> Self {
    self.offset = offset.as_dvec3();
    self
  }

  pub fn offset(&self) -> Vec3 {
    self.offset.as_vec3()
  }

  pub fn seed(&self) -> u32 {
    self.perlin.seed()
  }
}

impl DensitySampler for PerlinDensity {
  #[inline]
  fn density(&self, point: Vec3) -> f32 {
    let p = (point.as_dvec3() + self.offset) * self.scale * self.frequency;
    let value = self.perlin.get(p.to_array());
    (((value + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
  }
}

/// Random offset in `[0, MAX_RANDOM_OFFSET)` per axis.
///
/// Seeded offsets are reproducible; otherwise the thread RNG is used.
pub fn random_offset(seed: Option<u64>) -> Vec3 {
  match seed {
    Some(seed) => sample_offset(&mut StdRng::seed_from_u64(seed)),
    None => sample_offset(&mut rand::rng()),
  }
}

fn sample_offset<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
  Vec3::new(
    rng.random_range(0.0..MAX_RANDOM_OFFSET),
    rng.random_range(0.0..MAX_RANDOM_OFFSET),
    rng.random_range(0.0..MAX_RANDOM_OFFSET),
  )
}
