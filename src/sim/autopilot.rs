//! Demo-mode pilot
//!
//! Produces the same held-direction signals a player would, from the current
//! state only, so attract-mode runs stay deterministic.

use super::collision::HitProbe;
use super::kinematics::Direction;
use super::state::{FallingEntity, GameState};
use super::tick::TickInput;

/// How far above the craft an obstacle counts as a threat
const LOOKAHEAD: f32 = 120.0;
/// Close enough to a target to stop steering
const DEADZONE: f32 = 4.0;

/// Pick a direction for this tick
pub fn steer(state: &GameState) -> Option<Direction> {
    let probe = HitProbe::for_craft(&state.craft);
    let point = probe.point;
    let bonus = state.round.in_bonus_round;

    let above = |e: &&FallingEntity| {
        e.rect.max_y() <= point.y + 1.0 && point.y - e.rect.max_y() < LOOKAHEAD
    };

    // Dodge the nearest obstacle that would cost a life
    if !bonus {
        let threat = state
            .registry
            .obstacles()
            .iter()
            .filter(above)
            .filter(|e| !state.craft.matches(e.hue))
            .filter(|e| {
                point.x >= e.rect.min_x() - probe.h_buffer
                    && point.x <= e.rect.max_x() + probe.h_buffer
            });

        if let Some(threat) = lowest(threat) {
            let to_left = point.x - (threat.rect.min_x() - probe.h_buffer);
            let to_right = threat.rect.max_x() + probe.h_buffer - point.x;
            return Some(if to_left < to_right {
                Direction::Left
            } else {
                Direction::Right
            });
        }
    }

    // Otherwise chase something useful
    let obstacles = state.registry.obstacles().iter().filter(above);
    let target = if bonus {
        lowest(obstacles)
    } else if state.craft.charge.is_none() {
        lowest(state.registry.tokens().iter().filter(above))
    } else {
        lowest(obstacles.filter(|e| state.craft.matches(e.hue)))
    };

    let offset = target?.rect.center().x - point.x;
    if offset.abs() < DEADZONE {
        None
    } else if offset < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}

/// Entity closest to reaching the craft
fn lowest<'a>(entities: impl Iterator<Item = &'a FallingEntity>) -> Option<&'a FallingEntity> {
    entities.max_by(|a, b| a.rect.max_y().total_cmp(&b.rect.max_y()))
}

/// Held-direction input for this tick
pub fn input(state: &GameState) -> TickInput {
    let direction = steer(state);
    TickInput {
        left: direction == Some(Direction::Left),
        right: direction == Some(Direction::Right),
        ..Default::default()
    }
}
