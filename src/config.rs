//! Session configuration
//!
//! All dimensions and speeds are fixed at session start. Values can be read
//! from a JSON file; missing keys fall back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "JSON parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Playfield, body sizes and speeds for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_width: f32,
    pub ball_height: f32,
    /// Pixels per second
    pub ball_speed: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per second
    pub paddle_speed: f32,
    /// Distance from each side wall to its paddle
    pub paddle_inset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_width: BALL_WIDTH,
            ball_height: BALL_HEIGHT,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a JSON config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check that sizes and speeds are usable and that everything fits on the field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !(self.paddle_inset.is_finite() && self.paddle_inset >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "paddle_inset must be non-negative, got {}",
                self.paddle_inset
            )));
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::Invalid(
                "paddle_height exceeds field_height".to_string(),
            ));
        }
        if self.ball_width > self.field_width || self.ball_height > self.field_height {
            return Err(ConfigError::Invalid("ball does not fit on the field".to_string()));
        }
        // Both paddles plus the gap between them must fit horizontally
        if 2.0 * (self.paddle_inset + self.paddle_width) > self.field_width {
            return Err(ConfigError::Invalid(
                "paddles overlap: field_width too small for paddle_inset".to_string(),
            ));
        }
        Ok(())
    }

    /// Center of the playfield
    pub fn field_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT};

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "field_width": 800.0, "ball_speed": 500.0 }"#).unwrap();
        assert_eq!(config.field_width, 800.0);
        assert_eq!(config.ball_speed, 500.0);
        assert_eq!(config.field_height, FIELD_HEIGHT);
        assert_eq!(config.paddle_height, PADDLE_HEIGHT);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            field_width: 640.0,
            field_height: 480.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = Config::from_json(r#"{ "paddle_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("paddle_speed"));
    }

    #[test]
    fn test_rejects_paddle_taller_than_field() {
        let config = Config {
            paddle_height: 1000.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_crowded_field() {
        let config = Config {
            field_width: 100.0,
            paddle_inset: 45.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(Config::load_or_default("/definitely/not/here.json"), Config::default());
    }

    #[test]
    fn test_field_center() {
        let center = Config::default().field_center();
        assert_eq!(center.x, FIELD_WIDTH / 2.0);
        assert_eq!(center.y, FIELD_HEIGHT / 2.0);
    }
}
