//! Runtime configuration.
//!
//! The configuration is a JSON file. Every field is optional, anything left out falls back to
//! the values the tutorial programs were written with.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

/// Window creation settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// The full program configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowSettings,
    /// Name of the lesson shown at startup.
    pub start_lesson: String,
    pub clear_color: [f32; 4],
    pub fov_degrees: f32,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            start_lesson: "cubes".to_string(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            fov_degrees: 45.0,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Location of the configuration file in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("learnopengl").join("config.json"))
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json(s: &str) -> Result<Self, String> {
        let config: Config = serde_json::from_str(s).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the file in the user's config directory is used
    /// when present and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_json(&contents).map_err(|e| format!("invalid config {}: {e}", path.display()))
    }

    /// The configured log level.
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|_| format!("unknown log level `{}`", self.log_level))
    }

    /// Checks the values that deserialisation alone cannot.
    pub fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(format!(
                "window size {}x{} must be non-zero",
                self.window.width, self.window.height
            ));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(format!(
                "field of view {} must be between 0 and 180 degrees",
                self.fov_degrees
            ));
        }
        self.level_filter()?;
        if crate::lessons::index_of(&self.start_lesson).is_none() {
            return Err(format!("unknown lesson `{}`", self.start_lesson));
        }
        Ok(())
    }
}
