//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one stream per level)
//! - Frame delta supplied by the caller
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod grid;
pub mod input;
pub mod maze;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use grid::{Cell, Grid};
pub use input::{Direction, InputEvent, apply_input};
pub use maze::generate;
pub use movement::{StepOutcome, step};
pub use spawn::{place_player, place_target};
pub use state::{
    GameEvent, GamePhase, GameState, GyroCalibration, LevelState, Player, RenderView, RngState,
    Target,
};
pub use tick::{TickInput, TickReport, tick};
