//! Fixed-timestep pacing.
//!
//! ```text
//! frame ──► accumulator += frame_time
//!           while accumulator >= dt (at most MAX_CATCH_UP times):
//!             fixed update, accumulator -= dt
//!           render only if accumulator < dt * MAX_CATCH_UP
//! ```
//!
//! Unlike an uncapped drain, catch-up is bounded, so a long stall costs a few
//! skipped renders instead of a burst of updates.

/// Most fixed updates run in one frame, and the backlog past which the
/// render phase is skipped.
pub const MAX_CATCH_UP: u32 = 3;

/// What a frame should do after advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
  /// Fixed updates to run this frame.
  pub updates: u32,
  /// False when the loop is running behind.
  pub render: bool,
}

/// Accumulator for a fixed update rate.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
  fixed_delta_time: f32,
  accumulator: f32,
}

impl FixedTimestep {
  pub fn new(fixed_delta_time: f32) -> Self {
    Self {
      fixed_delta_time,
      accumulator: 0.0,
    }
  }

  pub fn fixed_delta_time(&self) -> f32 {
    self.fixed_delta_time
  }

  /// Time not yet consumed by fixed updates, in seconds.
  pub fn backlog(&self) -> f32 {
    self.accumulator
  }

  /// Feed `frame_time` seconds into the accumulator.
  pub fn advance(&mut self, frame_time: f32) -> FrameStep {
    self.accumulator += frame_time.max(0.0);

    let mut updates = 0;
    while self.accumulator >= self.fixed_delta_time && updates < MAX_CATCH_UP {
      self.accumulator -= self.fixed_delta_time;
      updates += 1;
    }

    FrameStep {
      updates,
      render: self.accumulator < self.fixed_delta_time * MAX_CATCH_UP as f32,
    }
  }
}
