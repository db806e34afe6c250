//! Input events and their effect on player velocity
//!
//! Events are queued by the host and applied in order at the start of a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GyroCalibration, Player};
use crate::consts::DEG_TO_RAD;

/// Keyboard direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    /// Device orientation in degrees; missing readings count as 0
    Tilt { beta: Option<f32>, gamma: Option<f32> },
    /// Take the current velocity as the new tilt neutral point
    Calibrate,
}

/// Apply one event to the player's velocity or the calibration
pub fn apply_input(
    player: &mut Player,
    calibration: &mut GyroCalibration,
    event: &InputEvent,
    tilt_gain: f32,
) {
    match *event {
        InputEvent::KeyDown(dir) => match dir {
            Direction::Up => player.vel.y = -1.0,
            Direction::Down => player.vel.y = 1.0,
            Direction::Left => player.vel.x = -1.0,
            Direction::Right => player.vel.x = 1.0,
        },
        // Releasing a key only stops the axis if it was still moving that way
        InputEvent::KeyUp(dir) => match dir {
            Direction::Up if player.vel.y < 0.0 => player.vel.y = 0.0,
            Direction::Down if player.vel.y > 0.0 => player.vel.y = 0.0,
            Direction::Left if player.vel.x < 0.0 => player.vel.x = 0.0,
            Direction::Right if player.vel.x > 0.0 => player.vel.x = 0.0,
            _ => {}
        },
        InputEvent::Tilt { beta, gamma } => {
            player.vel = tilt_velocity(beta, gamma, calibration, tilt_gain);
        }
        InputEvent::Calibrate => {
            // Baseline is the velocity, not the raw angle
            calibration.offset = player.vel;
            log::debug!("Tilt calibrated to {:?}", calibration.offset);
        }
    }
}

/// Velocity from calibrated tilt angles (degrees)
///
/// Missing or non-finite angles read as level.
pub fn tilt_velocity(
    beta: Option<f32>,
    gamma: Option<f32>,
    calibration: &GyroCalibration,
    gain: f32,
) -> Vec2 {
    let level = |angle: Option<f32>| angle.filter(|a| a.is_finite()).unwrap_or(0.0);
    let beta = level(beta) * DEG_TO_RAD - calibration.offset.y;
    let gamma = level(gamma) * DEG_TO_RAD - calibration.offset.x;
    Vec2::new(gamma.sin() * gain, beta.sin() * gain)
}
