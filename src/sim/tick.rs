//! Per-frame simulation tick
//!
//! Drives input, timing, movement and the Playing -> Found -> Playing
//! level cycle for one frame of `dt` seconds.

use glam::Vec2;

use super::autopilot;
use super::input::{InputEvent, apply_input};
use super::movement;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events received since the previous tick, oldest first
    pub events: Vec<InputEvent>,
    /// Demo mode - steer automatically toward the target
    pub autopilot: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Level timer advanced (HUD needs refreshing)
    pub time_advanced: bool,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    state.clock += f64::from(dt);

    for event in &input.events {
        apply_input(
            &mut state.player,
            &mut state.calibration,
            event,
            state.settings.tilt_gain,
        );
    }

    if input.autopilot {
        state.player.vel = match state.phase {
            GamePhase::Playing => autopilot::steer(
                &state.grid,
                state.player.pos,
                state.target.pos,
                state.settings.cell_size,
                state.settings.base_speed * dt,
            ),
            GamePhase::Found { .. } => Vec2::ZERO,
        };
    }

    // Timer runs only while the player is steering and the level is live
    if state.phase == GamePhase::Playing && state.player.is_moving() {
        state.level.current_time += dt;
        report.time_advanced = true;
    }

    let outcome = movement::step(
        &mut state.player,
        &mut state.target,
        &state.grid,
        &state.settings,
        dt,
    );
    if outcome.target_reached && state.phase == GamePhase::Playing {
        report.events.push(state.enter_found());
    }

    if let GamePhase::Found { advance_at } = state.phase {
        if state.clock >= advance_at {
            report.events.push(state.advance_level());
        }
    }

    report
}
