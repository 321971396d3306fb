//! Chromescape - a color-matching scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, round state)
//! - `renderer`: Display boundary the simulation reports node changes to
//! - `platform`: Input signal adapter (held directions, debug commands)
//! - `session`: Host-facing session with a fixed-timestep accumulator
//! - `config`: Validated gameplay tunables

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::Config;
pub use error::ConfigError;
pub use session::Session;

/// Game title shown by hosts
pub const TITLE: &str = "Chromescape";

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Craft hull dimensions
    pub const CRAFT_WIDTH: f32 = 25.0;
    pub const CRAFT_HEIGHT: f32 = 40.0;
    /// Craft base sits at this fraction of the playfield height
    pub const CRAFT_BAND: f32 = 0.8;

    /// Velocity bound (units per tick)
    pub const MAX_SPEED: f32 = 5.0;
    /// Base acceleration rate of the thrust curve
    pub const BASE_ACCELERATION_RATE: f32 = 0.6;
    /// Divisor shaping the ease-out acceleration curve
    pub const ACCELERATION_TAPER: f32 = 1.6;
    /// Reversal penalty grows by |v| / this
    pub const REVERSAL_DRAG_DIVISOR: f32 = 10.0;
    /// Coast-down multiplier applied when no single direction is held
    pub const VELOCITY_DECAY: f32 = 0.9;
    /// Re-entry offset after a horizontal wrap
    pub const WRAP_EPSILON: f32 = 0.01;

    /// Vulnerable point sits this far inside the craft's nose
    pub const VULNERABLE_INSET: f32 = 6.0;

    /// Life icons are miniature crafts
    pub const LIFE_ICON_SCALE: f32 = 0.3;
    pub const LIFE_ICON_BASE_Y: f32 = 50.0;
    /// Horizontal spacing between icons, as a fraction of the craft width
    pub const LIFE_ICON_SPACING: f32 = 0.4;

    /// Debug bounds for live obstacle-frequency tuning
    pub const MIN_OBSTACLE_FREQUENCY: u32 = 1;
    pub const MAX_OBSTACLE_FREQUENCY: u32 = 300;
    /// Obstacle lines draw from twice this many slots
    pub const MAX_OBSTACLES_PER_LINE: u32 = 32;
}
