//! Application configuration loaded from JSON.
//!
//! The defaults are compiled in from `assets/magnetic_text.json`. On native
//! targets `MAGNETIC_TEXT_CONFIG` can point at another file with the same shape.

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_JSON: &str = include_str!("../assets/magnetic_text.json");

/// Environment variable naming an override config file
pub const CONFIG_ENV_VAR: &str = "MAGNETIC_TEXT_CONFIG";

pub const DEFAULT_INTENSITY: f32 = 0.5;
pub const DEFAULT_MAX_DISTANCE: f32 = 200.0;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid intensity {0}: must be finite")]
    InvalidIntensity(f32),

    #[error("Invalid max_distance {0}: must be finite and positive")]
    InvalidMaxDistance(f32),
}

#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Initial window size in logical pixels
    pub width: u32,
    pub height: u32,
    /// Text to render, one cell per character
    pub text: String,
    /// Optional style class (theme preset name)
    pub class: Option<String>,
    /// Damping factor for displacement magnitude; negative values repel
    pub intensity: f32,
    /// Activation radius in logical pixels
    pub max_distance: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Magnetic Text".into(),
            width: 1280,
            height: 720,
            text: String::new(),
            class: None,
            intensity: DEFAULT_INTENSITY,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in configuration
    pub fn embedded() -> Self {
        Self::from_json(DEFAULT_CONFIG_JSON).expect("Failed to parse embedded magnetic_text.json")
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Embedded defaults, replaced by the file named in `MAGNETIC_TEXT_CONFIG` when set.
    /// A broken override logs a warning and falls back to the defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
                match Self::from_file(&path) {
                    Ok(config) => {
                        log::info!("Loaded config from {path}");
                        return config;
                    }
                    Err(err) => log::warn!("{err}; using embedded defaults"),
                }
            }
        }

        Self::embedded()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.intensity.is_finite() {
            return Err(ConfigError::InvalidIntensity(self.intensity));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(ConfigError::InvalidMaxDistance(self.max_distance));
        }
        Ok(())
    }
}
