//! Game settings and tuning
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::grid_dimensions;

/// Failure to load or validate a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// File is not valid settings JSON
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of range
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    /// Play area width (pixels)
    pub maze_width: f32,
    /// Play area height (pixels)
    pub maze_height: f32,
    /// Grid cell size (pixels)
    pub cell_size: f32,

    // === Player ===
    pub player_radius: f32,
    /// Added to the player radius for the target proximity test
    pub found_threshold: f32,
    /// Speed at unit velocity (pixels/s)
    pub base_speed: f32,
    /// Multiplier applied to the sine of calibrated tilt angles
    pub tilt_gain: f32,

    // === Timing ===
    /// Seconds between finding the target and the next level
    pub level_transition_delay: f64,
    /// Upper bound on a single frame delta (seconds)
    pub max_frame_delta: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maze_width: MAZE_WIDTH,
            maze_height: MAZE_HEIGHT,
            cell_size: CELL_SIZE,

            player_radius: PLAYER_RADIUS,
            found_threshold: FOUND_THRESHOLD,
            base_speed: BASE_SPEED,
            tilt_gain: TILT_GAIN,

            level_transition_delay: LEVEL_TRANSITION_DELAY,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

impl Settings {
    /// Grid `(rows, cols)` for the configured play area
    pub fn grid_dimensions(&self) -> (usize, usize) {
        grid_dimensions(self.maze_width, self.maze_height, self.cell_size)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} - using default settings", e);
                Self::default()
            }
        }
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("maze_width", self.maze_width),
            ("maze_height", self.maze_height),
            ("cell_size", self.cell_size),
            ("base_speed", self.base_speed),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("player_radius", self.player_radius),
            ("found_threshold", self.found_threshold),
            ("tilt_gain", self.tilt_gain),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if !(self.level_transition_delay.is_finite() && self.level_transition_delay >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "level_transition_delay must not be negative, got {}",
                self.level_transition_delay
            )));
        }

        let (rows, cols) = self.grid_dimensions();
        if rows == 0 || cols == 0 {
            return Err(SettingsError::Invalid(format!(
                "play area {}x{} is smaller than one {} px cell",
                self.maze_width, self.maze_height, self.cell_size
            )));
        }

        let widest = (self.maze_width.max(self.maze_height) / self.cell_size).floor();
        if widest > MAX_GRID_DIM as f32 {
            return Err(SettingsError::Invalid(format!(
                "play area needs {} cells per side, at most {} supported",
                widest, MAX_GRID_DIM
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid_dimensions(), (30, 40));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "cell_size": 40.0, "base_speed": 90.0 }"#).unwrap();
        assert_eq!(settings.cell_size, 40.0);
        assert_eq!(settings.base_speed, 90.0);
        assert_eq!(settings.maze_width, MAZE_WIDTH);
        assert_eq!(settings.grid_dimensions(), (15, 20));
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let err = Settings::from_json(r#"{ "cell_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_play_area_smaller_than_cell() {
        let err = Settings::from_json(r#"{ "maze_width": 10.0 }"#).unwrap_err();
        assert!(err.to_string().contains("smaller than one"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ cell_size: 20 }").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/tilt-maze-settings.json");
        let settings = Settings::load_or_default(path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = Settings::load(Path::new("/nonexistent/tilt-maze-settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to read settings"));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = Settings::from_json(r#"{ "cell_size": 0.01 }"#).unwrap_err();
        assert!(err.to_string().contains("at most"));
    }
}
