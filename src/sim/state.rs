//! Game state and core simulation types
//!
//! Everything a session needs lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::{maze, spawn};
use crate::settings::{Settings, SettingsError};

/// Current phase of a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Searching for the target
    Playing,
    /// Target reached, next level starts when the session clock hits `advance_at`
    Found { advance_at: f64 },
}

/// Something the host may want to react to (sound, HUD refresh)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Target reached at `time` seconds into `level`
    TargetFound { level: u32, time: f32, new_best: bool },
    /// A fresh maze was generated
    LevelStarted { level: u32 },
}

/// The player's ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Input direction, not momentum: keys give -1/0/1 per axis, tilt up to ±gain
    pub vel: Vec2,
    pub radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }
}

/// The hidden goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub found: bool,
}

impl Target {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, found: false }
    }
}

/// Level counter and timing, survives across mazes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    /// 1-based level number
    pub level: u32,
    /// Seconds spent moving in the current level
    pub current_time: f32,
    /// Fastest completion so far (`None` until the first one)
    pub best_time: Option<f32>,
}

impl Default for LevelState {
    fn default() -> Self {
        Self {
            level: 1,
            current_time: 0.0,
            best_time: None,
        }
    }
}

impl LevelState {
    /// Fold the current time into the best time
    ///
    /// Returns true if it is a new best. An unset best behaves as +infinity.
    pub fn record_completion(&mut self) -> bool {
        let is_best = self.best_time.is_none_or(|best| self.current_time < best);
        if is_best {
            self.best_time = Some(self.current_time);
        }
        is_best
    }

    /// Move on to the next level with a fresh timer
    pub fn advance(&mut self) {
        self.level += 1;
        self.current_time = 0.0;
    }
}

/// Tilt neutral point (x is subtracted from gamma, y from beta)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GyroCalibration {
    pub offset: Vec2,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Independent stream for one level of the run
    pub fn for_level(&self, level: u32) -> Pcg32 {
        let level_seed = u64::from(level)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        Pcg32::seed_from_u64(level_seed)
    }
}

/// Read-only per-frame snapshot for a renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub grid: &'a Grid,
    pub cell_size: f32,
    pub player_pos: Vec2,
    pub player_vel: Vec2,
    pub player_radius: f32,
    pub target_pos: Vec2,
    pub target_found: bool,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub rng_state: RngState,
    pub settings: Settings,
    pub grid: Grid,
    pub player: Player,
    pub target: Target,
    pub level: LevelState,
    pub phase: GamePhase,
    pub calibration: GyroCalibration,
    /// Seconds of simulated time since the session started
    pub clock: f64,
}

impl GameState {
    /// Create a session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    /// Create a session after checking the settings
    pub fn try_with_settings(seed: u64, settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::with_settings(seed, settings))
    }

    /// Create a session and generate level 1
    ///
    /// Settings are not checked; degenerate values give an all-wall grid.
    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let (rows, cols) = settings.grid_dimensions();
        let mut state = Self {
            rng_state: RngState::new(seed),
            grid: Grid::filled(rows, cols),
            player: Player::new(Vec2::ZERO, settings.player_radius),
            target: Target::new(Vec2::ZERO),
            settings,
            level: LevelState::default(),
            phase: GamePhase::Playing,
            calibration: GyroCalibration::default(),
            clock: 0.0,
        };
        state.generate_level();
        state
    }

    /// Build the maze, player and target for the current level number
    pub fn generate_level(&mut self) {
        let (rows, cols) = self.settings.grid_dimensions();
        let cell_size = self.settings.cell_size;
        let mut rng = self.rng_state.for_level(self.level.level);

        self.grid = maze::generate(rows, cols, &mut rng);
        self.player.pos = spawn::place_player(&self.grid, cell_size, &mut rng);
        self.player.vel = Vec2::ZERO;
        match spawn::place_target(&self.grid, cell_size, &mut rng) {
            Some(pos) => self.target.pos = pos,
            None => log::warn!("No open cell for the target, keeping {:?}", self.target.pos),
        }
        self.target.found = false;
        self.phase = GamePhase::Playing;

        log::info!(
            "Level {}: {}x{} maze, {} open cells",
            self.level.level,
            rows,
            cols,
            self.grid.open_count()
        );
    }

    /// Target reached: record the time and schedule the next level
    pub fn enter_found(&mut self) -> GameEvent {
        let new_best = self.level.record_completion();
        let advance_at = self.clock + self.settings.level_transition_delay;
        self.phase = GamePhase::Found { advance_at };

        let (level, time) = (self.level.level, self.level.current_time);
        if new_best {
            log::info!("Level {} cleared in {:.1}s - new best!", level, time);
        } else {
            log::info!("Level {} cleared in {:.1}s", level, time);
        }

        GameEvent::TargetFound {
            level: self.level.level,
            time: self.level.current_time,
            new_best,
        }
    }

    /// Leave `Found`: bump the level and generate a fresh maze
    pub fn advance_level(&mut self) -> GameEvent {
        self.level.advance();
        self.generate_level();
        GameEvent::LevelStarted {
            level: self.level.level,
        }
    }

    /// Snapshot for drawing
    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            grid: &self.grid,
            cell_size: self.settings.cell_size,
            player_pos: self.player.pos,
            player_vel: self.player.vel,
            player_radius: self.player.radius,
            target_pos: self.target.pos,
            target_found: self.target.found,
        }
    }
}
