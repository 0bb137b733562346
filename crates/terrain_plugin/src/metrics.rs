//! Timing and throughput statistics for generation and the frame loop.
//!
//! Values are collected, then logged by the host. Nothing here draws.
//!
//! # Usage
//!
//! ```ignore
//! let mut frame = FrameMetrics::new();
//!
//! let start = Instant::now();
//! let visible = world.draw_visible(&camera, draw_distance, &mut renderer);
//! frame.record_frame(start.elapsed().as_micros() as u64, visible, triangles);
//!
//! if let Some(summary) = frame.summary() {
//!   tracing::info!(%summary, "frame timings");
//! }
//! ```

use std::collections::VecDeque;
use std::fmt;

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity (at least 1).
  pub fn new(capacity: usize) -> Self {
    let capacity = capacity.max(1);
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Get the most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
  /// Compute the sum of all values.
  pub fn sum(&self) -> T {
    self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
  }
}

impl RollingWindow<u64> {
  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = *self.buffer.iter().min()?;
    let max = *self.buffer.iter().max()?;
    Some((min, max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(DEFAULT_WINDOW)
  }
}

/// Samples kept per rolling window (~2 seconds at 60 fps).
pub const DEFAULT_WINDOW: usize = 128;

/// Per-frame culling and draw statistics.
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
  /// Rolling window of cull + draw times in microseconds.
  pub frame_timings: RollingWindow<u64>,
  /// Rolling window of fixed-update times in microseconds.
  pub update_timings: RollingWindow<u64>,
  /// Chunks drawn in the most recent frame.
  pub visible_chunks: usize,
  /// Triangles submitted in the most recent frame.
  pub visible_triangles: u64,
  /// Frames rendered since creation.
  pub frames: u64,
  /// Fixed updates run since creation.
  pub updates: u64,
  /// Frames whose render phase was skipped to catch up on updates.
  pub skipped_frames: u64,
}

impl FrameMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record_frame(&mut self, timing_us: u64, visible_chunks: usize, visible_triangles: u64) {
    self.frame_timings.push(timing_us);
    self.visible_chunks = visible_chunks;
    self.visible_triangles = visible_triangles;
    self.frames += 1;
  }

  pub fn record_update(&mut self, timing_us: u64) {
    self.update_timings.push(timing_us);
    self.updates += 1;
  }

  pub fn record_skipped_frame(&mut self) {
    self.skipped_frames += 1;
  }

  /// Snapshot of the frame timing window, if any frame was recorded.
  pub fn summary(&self) -> Option<TimingSummary> {
    let (min_us, max_us) = self.frame_timings.min_max()?;
    Some(TimingSummary {
      min_us,
      max_us,
      avg_us: self.frame_timings.average(),
      samples: self.frame_timings.len(),
    })
  }
}

/// Min / max / average over a timing window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
  pub min_us: u64,
  pub max_us: u64,
  pub avg_us: f64,
  pub samples: usize,
}

impl fmt::Display for TimingSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "avg {:.1}µs, min {}µs, max {}µs over {} frames",
      self.avg_us, self.min_us, self.max_us, self.samples
    )
  }
}

/// Outcome of building a world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub chunks: usize,
  /// Chunks whose mesh has at least one triangle.
  pub non_empty_chunks: usize,
  pub vertices: usize,
  pub triangles: usize,
  /// Wall time spent sampling and extracting, in microseconds.
  pub extract_us: u64,
  /// Wall time spent uploading to the renderer, in microseconds.
  pub upload_us: u64,
}

impl GenerationStats {
  pub fn total_us(&self) -> u64 {
    self.extract_us + self.upload_us
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rolling_window_evicts_oldest() {
    let mut window = RollingWindow::new(3);
    for v in 1..=5u64 {
      window.push(v);
    }
    assert_eq!(window.len(), 3);
    assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert_eq!(window.last(), Some(&5));
  }

  #[test]
  fn test_rolling_window_stats() {
    let mut window = RollingWindow::<u64>::default();
    assert_eq!(window.average(), 0.0);
    assert_eq!(window.min_max(), None);

    window.push(10);
    window.push(30);
    window.push(20);
    assert_eq!(window.sum(), 60);
    assert_eq!(window.average(), 20.0);
    assert_eq!(window.min_max(), Some((10, 30)));

    window.clear();
    assert!(window.is_empty());
  }

  #[test]
  fn test_zero_capacity_keeps_one() {
    let mut window = RollingWindow::new(0);
    window.push(1u64);
    window.push(2u64);
    assert_eq!(window.capacity(), 1);
    assert_eq!(window.last(), Some(&2));
  }

  #[test]
  fn test_frame_metrics_summary() {
    let mut metrics = FrameMetrics::new();
    assert!(metrics.summary().is_none());

    metrics.record_frame(100, 5, 1000);
    metrics.record_frame(300, 7, 1400);
    metrics.record_update(20);
    metrics.record_skipped_frame();

    let summary = metrics.summary().unwrap();
    assert_eq!(summary.min_us, 100);
    assert_eq!(summary.max_us, 300);
    assert_eq!(summary.avg_us, 200.0);
    assert_eq!(summary.samples, 2);
    assert_eq!(metrics.visible_chunks, 7);
    assert_eq!(metrics.visible_triangles, 1400);
    assert_eq!(metrics.frames, 2);
    assert_eq!(metrics.updates, 1);
    assert_eq!(metrics.skipped_frames, 1);
  }

  #[test]
  fn test_generation_total() {
    let stats = GenerationStats {
      extract_us: 40,
      upload_us: 2,
      ..GenerationStats::default()
    };
    assert_eq!(stats.total_us(), 42);
  }
}
