//! Platform abstraction layer
//!
//! Thin adapters between host events and the simulation:
//! - Frame timestamps to clamped deltas
//! - Key names to directions

use crate::consts::MAX_FRAME_DELTA;
use crate::sim::Direction;

/// Turns monotonically increasing frame timestamps into deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_delta: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA)
    }
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_ms: None,
            max_delta,
        }
    }

    /// Seconds since the previous timestamp (milliseconds)
    ///
    /// The first call returns 0. Stalls are clamped to `max_delta` and a
    /// timestamp going backwards yields 0.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let Some(last) = self.last_ms.replace(timestamp_ms) else {
            return 0.0;
        };
        let dt = ((timestamp_ms - last) / 1000.0) as f32;
        dt.clamp(0.0, self.max_delta)
    }
}

/// Map a host key name to a movement direction
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}
