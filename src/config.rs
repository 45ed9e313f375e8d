//! Game configuration
//!
//! Built once at startup, validated, then threaded by reference into the
//! simulation. Overrides are JSON; any field left out keeps its default.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::consts::*;
use crate::error::ConfigError;
use crate::renderer::Color;

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub width: f32,
    pub height: f32,

    // === Entities ===
    /// Side length of the square player block
    pub player_size: f32,
    pub pipe_width: f32,
    /// Free height between the top and bottom pipe of a pair
    pub gap_size: f32,
    /// Horizontal distance kept between successive pairs
    pub pipe_spacing: f32,
    /// First pair of a round is centered this far left of the right edge
    pub initial_pipe_offset: f32,

    // === Physics (per tick) ===
    pub gravity: f32,
    pub flap_strength: f32,
    pub pipe_speed: f32,

    // === Timing ===
    /// Simulation ticks per second
    pub fps: u32,
    pub restart_delay_ms: u64,

    // === Colors ===
    pub background_color: Color,
    pub player_color: Color,
    pub pipe_color: Color,
    pub score_color: Color,
    pub score_font_px: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,

            player_size: PLAYER_SIZE,
            pipe_width: PIPE_WIDTH,
            gap_size: GAP_SIZE,
            pipe_spacing: PIPE_SPACING,
            initial_pipe_offset: INITIAL_PIPE_OFFSET,

            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            pipe_speed: PIPE_SPEED,

            fps: FPS,
            restart_delay_ms: RESTART_DELAY_MS,

            background_color: [0.439, 0.667, 1.0, 1.0], // #70aaff
            player_color: [1.0, 1.0, 1.0, 1.0],
            pipe_color: [0.376, 1.0, 0.133, 1.0], // #60ff22
            score_color: [1.0, 1.0, 1.0, 1.0],
            score_font_px: SCORE_FONT_PX,
        }
    }
}

impl GameConfig {
    /// Parse JSON overrides on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("width", self.width),
            ("height", self.height),
            ("player_size", self.player_size),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
            ("pipe_spacing", self.pipe_spacing),
            ("initial_pipe_offset", self.initial_pipe_offset),
            ("gravity", self.gravity),
            ("flap_strength", self.flap_strength),
            ("pipe_speed", self.pipe_speed),
            ("score_font_px", self.score_font_px),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("player_size", self.player_size),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Negative gravity lifts the block away from the ground forever
        if self.gravity < 0.0 {
            return Err(ConfigError::Negative {
                field: "gravity",
                value: self.gravity,
            });
        }

        if self.height <= 2.0 * self.gap_size {
            return Err(ConfigError::GapTooLarge {
                gap: self.gap_size,
                height: self.height,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// Center of the player block at the start of a round
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.width / 3.0, self.height / 2.0)
    }

    /// Center x of the first pair of a round
    pub fn initial_pipe_x(&self) -> f32 {
        self.width - self.initial_pipe_offset
    }

    /// Center x of pairs spawned during play (just past the right edge)
    pub fn spawn_pipe_x(&self) -> f32 {
        self.width + self.pipe_width / 2.0
    }

    /// Environment variable holding JSON overrides (native only)
    #[allow(dead_code)]
    const ENV_KEY: &'static str = "FLAPPY_BLOCK_CONFIG";

    /// LocalStorage key holding JSON overrides (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_block_config";

    /// Load overrides from the environment, defaults when unset
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(Self::ENV_KEY) {
            Ok(json) => {
                log::info!("Loading config overrides from {}", Self::ENV_KEY);
                Self::from_json(&json)
            }
            Err(_) => {
                log::info!("Using default config");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load overrides from LocalStorage, defaults when unset
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        match stored {
            Some(json) => {
                log::info!("Loaded config overrides from LocalStorage");
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default config");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_start(), Vec2::new(640.0 / 3.0, 240.0));
        assert_eq!(config.initial_pipe_x(), 540.0);
        assert_eq!(config.spawn_pipe_x(), 670.0);
    }

    #[test]
    fn test_gap_too_large() {
        let config = GameConfig {
            gap_size: 240.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooLarge { .. })
        ));

        // One unit of slack is enough
        let config = GameConfig {
            gap_size: 239.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_fields() {
        let config = GameConfig {
            pipe_speed: 0.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NonPositive { field, .. }) => assert_eq!(field, "pipe_speed"),
            other => panic!("unexpected result: {other:?}"),
        }

        let config = GameConfig {
            width: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTickRate)));
    }

    #[test]
    fn test_physics_fields_are_checked() {
        match GameConfig::from_json(r#"{ "gravity": -0.3 }"#) {
            Err(ConfigError::Negative { field, .. }) => assert_eq!(field, "gravity"),
            other => panic!("unexpected result: {other:?}"),
        }

        let config = GameConfig {
            flap_strength: f32::INFINITY,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NotFinite { field, .. }) => assert_eq!(field, "flap_strength"),
            other => panic!("unexpected result: {other:?}"),
        }

        let config = GameConfig {
            pipe_spacing: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "pipe_spacing", .. })
        ));

        // A weightless block is allowed, it just never falls
        let config = GameConfig {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.2, "pipe_speed": 4 }"#)
            .expect("valid overrides");
        assert_eq!(config.gravity, 0.2);
        assert_eq!(config.pipe_speed, 4.0);
        assert_eq!(config.gap_size, GAP_SIZE);
        assert_eq!(config.width, FIELD_WIDTH);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "height": 200 }"#),
            Err(ConfigError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        let interval = config.tick_interval();
        assert!(interval > Duration::from_micros(16_666));
        assert!(interval < Duration::from_micros(16_667));
        assert_eq!(config.restart_delay(), Duration::from_secs(2));
    }
}
