//! Tilt Maze entry point
//!
//! Headless demo: the autopilot plays a few levels on a simulated 60 Hz
//! frame clock and the results are logged.

use std::path::PathBuf;

use clap::Parser;
use tilt_maze::platform::FrameClock;
use tilt_maze::sim::{GameEvent, GameState, TickInput, tick};
use tilt_maze::{HudText, Settings};

/// Simulated frame interval (milliseconds)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Frames allowed per level before giving up (5 minutes)
const MAX_FRAMES_PER_LEVEL: u32 = 60 * 300;

/// Headless Tilt Maze demo driven by the autopilot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Options {
    /// Run seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Levels to clear before stopping
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    levels: u32,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let options = Options::parse();

    let settings = options
        .config
        .as_deref()
        .map(Settings::load_or_default)
        .unwrap_or_default();
    let seed = options.seed.unwrap_or_else(rand::random);

    log::info!("Tilt Maze (headless) starting with seed: {}", seed);
    let mut state = match GameState::try_with_settings(seed, settings.clone()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };
    let mut clock = FrameClock::new(settings.max_frame_delta);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut timestamp = 0.0;
    let mut completed = 0;
    let mut frames_this_level = 0;

    while completed < options.levels {
        let dt = clock.delta(timestamp);
        timestamp += FRAME_MS;

        let report = tick(&mut state, &input, dt);
        frames_this_level += 1;

        for event in &report.events {
            match *event {
                GameEvent::TargetFound { level, time, new_best } => {
                    completed += 1;
                    log::info!(
                        "Autopilot cleared level {} in {:.1}s{}",
                        level,
                        time,
                        if new_best { " (best)" } else { "" }
                    );
                }
                GameEvent::LevelStarted { .. } => frames_this_level = 0,
            }
        }

        if frames_this_level > MAX_FRAMES_PER_LEVEL {
            log::warn!("Autopilot stuck on level {}, stopping", state.level.level);
            break;
        }
    }

    let hud = HudText::from_level(&state.level);
    println!(
        "seed {}  levels cleared {}  level {}  time {}  best {}",
        seed, completed, hud.level, hud.time, hud.best
    );
}
