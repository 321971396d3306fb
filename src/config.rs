//! Gameplay tunables
//!
//! Loaded from JSON (any subset of fields; the rest fall back to defaults) and
//! validated once when a session starts.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_OBSTACLE_FREQUENCY, MAX_OBSTACLES_PER_LINE, MIN_OBSTACLE_FREQUENCY};
use crate::error::ConfigError;

/// Game configuration, owned by the running `GameState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ticks between obstacle lines (debug-adjustable while playing)
    pub obstacle_frequency: u32,
    /// Obstacles per line outside the bonus round
    pub obstacles_per_line: u32,
    /// Ticks between score increments
    pub command_frequency: u32,
    pub starting_lives: u32,
    /// Upper bound on the life-icon row
    pub max_lives: u32,
    /// Ticks a token's color stays on the craft
    pub color_duration: u64,
    /// Ticks a bonus round lasts
    pub bonus_round_duration: u64,
    /// Score that triggers the first bonus round (doubles after each one)
    pub first_bonus_threshold: u64,
    /// Score awarded per obstacle absorbed during the bonus round
    pub bonus_obstacle_score: u64,

    // === Geometry ===
    /// Vertical distance falling entities travel per tick
    pub fall_speed: f32,
    pub obstacle_height: f32,
    pub token_radius: f32,
    /// Center height of freshly spawned tokens
    pub token_spawn_y: f32,
    /// Probability that a token slot actually produces a token
    pub token_chance: f32,

    /// Seed for the spawn generator
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            obstacle_frequency: 45,
            obstacles_per_line: 4,
            command_frequency: 4,
            starting_lives: 5,
            max_lives: 20,
            color_duration: 400,
            bonus_round_duration: 600,
            first_bonus_threshold: 500,
            bonus_obstacle_score: 10,

            fall_speed: 5.0,
            obstacle_height: 20.0,
            token_radius: 10.0,
            token_spawn_y: 5.0,
            token_chance: 0.25,

            seed: 0,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Same config with a different seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("obstacle_frequency", self.obstacle_frequency),
            ("obstacles_per_line", self.obstacles_per_line),
            ("command_frequency", self.command_frequency),
            ("starting_lives", self.starting_lives),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroCadence { field });
            }
        }
        for (field, value, max) in [
            (
                "obstacle_frequency",
                self.obstacle_frequency,
                MAX_OBSTACLE_FREQUENCY,
            ),
            (
                "obstacles_per_line",
                self.obstacles_per_line,
                MAX_OBSTACLES_PER_LINE,
            ),
        ] {
            if value > max {
                return Err(ConfigError::TooLarge { field, value, max });
            }
        }
        if self.first_bonus_threshold == 0 {
            return Err(ConfigError::ZeroCadence {
                field: "first_bonus_threshold",
            });
        }
        if self.starting_lives > self.max_lives {
            return Err(ConfigError::TooManyLives {
                starting: self.starting_lives,
                max: self.max_lives,
            });
        }
        for (field, value) in [
            ("fall_speed", self.fall_speed),
            ("obstacle_height", self.obstacle_height),
            ("token_radius", self.token_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.token_chance) {
            return Err(ConfigError::TokenChance(self.token_chance));
        }
        Ok(())
    }

    /// Live-tune the obstacle cadence, staying within the debug bounds
    pub fn adjust_obstacle_frequency(&mut self, delta: i32) {
        let adjusted = (self.obstacle_frequency as i64 + delta as i64).clamp(
            MIN_OBSTACLE_FREQUENCY as i64,
            MAX_OBSTACLE_FREQUENCY as i64,
        );
        self.obstacle_frequency = adjusted as u32;
        log::info!("Obstacle frequency: {}", self.obstacle_frequency);
    }
}
