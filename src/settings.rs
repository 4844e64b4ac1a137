//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Level, SimError};

/// Environment variable overriding the settings file location
pub const CONFIG_PATH_ENV: &str = "DINO_RUN_CONFIG";
/// Default settings file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dino-run.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Level(#[from] SimError),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty level (1 = two obstacles on screen, scroll 2 cols/tick)
    pub level_number: u32,
    /// Play area width in columns; `None` uses the terminal width
    pub play_area_width: Option<i32>,
    /// Frames (and ticks) per second
    pub fps: u32,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Keys that trigger a jump, in addition to the Up arrow
    pub jump_keys: Vec<char>,
    /// Allow jumping again while airborne
    pub allow_air_jump: bool,
    /// Where the leaderboard is stored
    pub highscores_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_number: 1,
            play_area_width: None,
            fps: FPS,
            seed: None,
            jump_keys: vec!['w', ' '],
            allow_air_jump: true,
            highscores_path: PathBuf::from("dino-run-scores.json"),
        }
    }
}

impl Settings {
    /// Settings file location, honouring [`CONFIG_PATH_ENV`]
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`Settings::load_from`], but falls back to defaults on any error
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Build the level for a terminal `terminal_width` columns wide
    pub fn level(&self, terminal_width: i32) -> Result<Level, ConfigError> {
        let width = self.play_area_width.unwrap_or(terminal_width);
        Ok(Level::new(self.level_number, width)?)
    }

    /// Frame duration in milliseconds
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }

    pub fn is_jump_key(&self, key: char) -> bool {
        self.jump_keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dino-run-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("missing-settings.json");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial-settings.json");
        fs::write(&path, r#"{ "level_number": 2, "seed": 7 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.level_number, 2);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.fps, FPS);
        assert!(settings.is_jump_key('w'));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("bad-settings.json");
        fs::write(&path, "{ level_number: ").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Json { .. })
        ));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved-settings.json");
        let settings = Settings {
            level_number: 3,
            allow_air_jump: false,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_level_from_settings() {
        let settings = Settings::default();
        let level = settings.level(100).unwrap();
        assert_eq!(level.play_area_width, 100);
        assert_eq!(level.min_obstacle_distance, 50);

        let settings = Settings {
            play_area_width: Some(90),
            ..Default::default()
        };
        assert_eq!(settings.level(100).unwrap().play_area_width, 90);

        let settings = Settings {
            level_number: 0,
            ..Default::default()
        };
        assert!(matches!(settings.level(100), Err(ConfigError::Level(_))));
    }

    #[test]
    fn test_huge_level_number_is_a_config_error() {
        let path = temp_path("huge-level-settings.json");
        fs::write(&path, r#"{ "level_number": 1073741824 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(matches!(
            settings.level(120),
            Err(ConfigError::Level(SimError::InvalidLevel(_)))
        ));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_frame_millis() {
        assert_eq!(Settings::default().frame_millis(), 16);
        let settings = Settings {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_millis(), 1000);
    }
}
