//! Session initialization errors

use thiserror::Error;

/// Misconfiguration detected when a session is created.
///
/// The simulation itself has no recoverable failure modes; everything that can
/// go wrong is caught here, before the first tick.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("`{field}` must be at least 1")]
    ZeroCadence { field: &'static str },
    #[error("`{field}` must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },
    #[error("token_chance must lie in [0, 1], got {0}")]
    TokenChance(f32),
    #[error("starting_lives ({starting}) exceeds max_lives ({max})")]
    TooManyLives { starting: u32, max: u32 },
    #[error("playfield must have a positive size, got {width}x{height}")]
    Playfield { width: f32, height: f32 },
    #[error("Failed to read config {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
