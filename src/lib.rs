//! Tilt Maze - a perfect-maze exploration game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze generation, movement, level progression)
//! - `platform`: Host adapters (frame clock, key mapping)
//! - `hud`: Text for the level/time/best display
//! - `settings`: Data-driven game tuning

pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use hud::HudText;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const MAZE_WIDTH: f32 = 800.0;
    pub const MAZE_HEIGHT: f32 = 600.0;
    /// Size of one grid cell (pixels)
    pub const CELL_SIZE: f32 = 20.0;

    /// Player circle radius
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Extra slack added to the player radius when testing for the target
    pub const FOUND_THRESHOLD: f32 = 5.0;
    /// Player speed at unit velocity (pixels/s)
    pub const BASE_SPEED: f32 = 150.0;

    /// Pause between finding the target and the next maze (seconds)
    pub const LEVEL_TRANSITION_DELAY: f64 = 1.0;

    /// Tilt sine to velocity multiplier
    pub const TILT_GAIN: f32 = 1.5;
    /// Degrees to radians, as used by the orientation handler
    pub const DEG_TO_RAD: f32 = 0.017_453_3;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Largest supported grid side (cells)
    pub const MAX_GRID_DIM: usize = 4096;
}

/// Grid dimensions `(rows, cols)` for a play area of the given pixel size
///
/// Non-finite or non-positive ratios give 0; each side is capped at
/// `MAX_GRID_DIM`.
#[inline]
pub fn grid_dimensions(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
    let cells = |extent: f32| {
        let n = (extent / cell_size).floor();
        if n.is_finite() && n > 0.0 {
            (n as usize).min(consts::MAX_GRID_DIM)
        } else {
            0
        }
    };
    (cells(height), cells(width))
}
