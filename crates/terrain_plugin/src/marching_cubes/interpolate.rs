//! Edge crossing interpolation.

use glam::Vec3;

use crate::constants::INTERPOLATION_EPSILON;

/// Position where the isosurface crosses the edge `p1 → p2`.
///
/// ```text
///   d1          iso          d2
///   p1 ─────────●─────────── p2
///      t = (iso - d1) / (d2 - d1)
/// ```
///
/// Snaps to `p1` when `d1` is within epsilon of the isolevel, then to `p2`
/// likewise. Equal densities resolve to `p1` instead of dividing by ~0.
/// `t` is not clamped.
#[inline]
pub fn edge_vertex(isolevel: f32, p1: Vec3, p2: Vec3, d1: f32, d2: f32) -> Vec3 {
  if (isolevel - d1).abs() < INTERPOLATION_EPSILON {
    return p1;
  }
  if (isolevel - d2).abs() < INTERPOLATION_EPSILON {
    return p2;
  }
  if (d1 - d2).abs() < INTERPOLATION_EPSILON {
    return p1;
  }

  let t = (isolevel - d1) / (d2 - d1);
  p1 + t * (p2 - p1)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
