//! Demo driver settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Simulation settings for the demo driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for deterministic spawning
    pub seed: u64,
    /// Number of entities to spawn
    pub entity_count: u32,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Entities ===
    /// Side length of each (square) entity
    pub entity_size: f32,
    /// Upper bound on each velocity component (units/s)
    pub max_speed: f32,

    // === Timing ===
    /// Fixed simulation step (ms)
    pub step_millis: u32,
    /// Maximum fixed steps per frame
    pub max_substeps: u32,
    /// Simulated wall-clock time per frame (ms)
    pub frame_millis: u32,
    /// Number of frames to run
    pub frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 12345,
            entity_count: 32,

            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,

            entity_size: DEFAULT_ENTITY_SIZE,
            max_speed: DEFAULT_MAX_SPEED,

            step_millis: DEFAULT_STEP_MILLIS,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
            frame_millis: 33,
            frames: 300,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 && v <= MAX_ARENA_EXTENT {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!(
                    "{name} must be in (0, {MAX_ARENA_EXTENT}], got {v}"
                )))
            }
        };
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("entity_size", self.entity_size)?;

        if !(0.0..=MAX_SPEED_LIMIT).contains(&self.max_speed) {
            return Err(SettingsError::Invalid(format!(
                "max_speed must be in [0, {MAX_SPEED_LIMIT}], got {}",
                self.max_speed
            )));
        }
        if self.entity_size > self.arena_width || self.entity_size > self.arena_height {
            return Err(SettingsError::Invalid(
                "entity_size does not fit in the arena".to_string(),
            ));
        }
        if self.step_millis == 0 {
            return Err(SettingsError::Invalid("step_millis cannot be zero".to_string()));
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::Invalid("max_substeps cannot be zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "entity_count": 3 }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.entity_count, 3);
        assert_eq!(settings.arena_width, DEFAULT_ARENA_WIDTH);
        assert_eq!(settings.step_millis, DEFAULT_STEP_MILLIS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = Settings::from_json(r#"{ "arena_width": -5.0 }"#);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));

        let result = Settings::from_json(r#"{ "step_millis": 0 }"#);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));

        let result = Settings::from_json(r#"{ "entity_size": 900.0 }"#);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));

        // Sampling -max_speed..=max_speed would overflow to infinity
        let result = Settings::from_json(r#"{ "max_speed": 3.0e38, "entity_count": 1 }"#);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));

        let result = Settings::from_json(r#"{ "arena_width": 3.0e38 }"#);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_upper_bounds_accepted() {
        let settings = Settings {
            arena_width: MAX_ARENA_EXTENT,
            arena_height: MAX_ARENA_EXTENT,
            max_speed: MAX_SPEED_LIMIT,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let result = Settings::from_json("{ seed: ");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "frames": 10, "frame_millis": 20 }}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.frames, 10);
        assert_eq!(settings.frame_millis, 20);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            seed: 99,
            max_speed: 0.0,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
