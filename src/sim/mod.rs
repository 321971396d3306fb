//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order, i.e. by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod kinematics;
pub mod rect;
pub mod registry;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{HitProbe, vulnerable_point};
pub use kinematics::Direction;
pub use rect::Rect;
pub use registry::EntityRegistry;
pub use spawner::Spawn;
pub use state::{
    Backdrop, Craft, EntityId, EntityKind, FallingEntity, Fill, GameEvent, GamePhase, GameState,
    Hue, LifeIcon, NodeKind, RoundState,
};
pub use tick::{TickInput, tick};
