//! HUD text
//!
//! Strings for the level / time / best-time display.

use crate::sim::LevelState;

/// Placeholder shown before any level has been completed
pub const NO_BEST_TIME: &str = "-";

/// Formatted HUD fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub level: String,
    pub time: String,
    pub best: String,
}

impl HudText {
    pub fn from_level(level: &LevelState) -> Self {
        Self {
            level: level.level.to_string(),
            time: format_seconds(level.current_time),
            best: level
                .best_time
                .map(format_seconds)
                .unwrap_or_else(|| NO_BEST_TIME.to_string()),
        }
    }
}

/// Seconds with one decimal
pub fn format_seconds(secs: f32) -> String {
    format!("{:.1}", secs)
}
