//! Craft velocity model
//!
//! Thrust follows an ease-out curve toward `MAX_SPEED`; reversing costs more the
//! faster the craft is going. With no (or conflicting) input the craft coasts
//! down exponentially. The playfield wraps horizontally.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Requested thrust direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of velocity along this direction
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Resolve held keys into a single direction (None if neither or both)
    pub fn from_held(left: bool, right: bool) -> Option<Self> {
        match (left, right) {
            (true, false) => Some(Direction::Left),
            (false, true) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// True when thrusting against a nonzero velocity
#[inline]
pub fn is_changing_direction(velocity: f32, direction: Direction) -> bool {
    velocity != 0.0 && velocity.signum() != direction.sign()
}

/// Acceleration magnitude; tapers to zero as `speed` approaches `MAX_SPEED`
#[inline]
pub fn acceleration(speed: f32) -> f32 {
    (MAX_SPEED - speed) / ACCELERATION_TAPER * BASE_ACCELERATION_RATE
}

/// Reversal change (negative); grows with current speed
#[inline]
pub fn deceleration(speed: f32) -> f32 {
    -(BASE_ACCELERATION_RATE + speed / REVERSAL_DRAG_DIVISOR)
}

/// Apply one tick of thrust in `direction` and return the new velocity.
///
/// The change is applied along the current direction of travel; from rest the
/// craft travels the requested way. The result satisfies `|v| <= MAX_SPEED`.
pub fn accelerate(velocity: f32, direction: Direction) -> f32 {
    let speed = velocity.abs();
    let delta = if is_changing_direction(velocity, direction) {
        deceleration(speed)
    } else {
        acceleration(speed)
    };

    let travel_sign = if velocity == 0.0 {
        direction.sign()
    } else {
        velocity.signum()
    };
    let velocity = velocity + travel_sign * delta;

    // Trim the overflow so the bound is hit exactly
    if velocity.abs() > MAX_SPEED {
        MAX_SPEED.copysign(velocity)
    } else {
        velocity
    }
}

/// Coast down when no single direction is held
#[inline]
pub fn decay(velocity: f32) -> f32 {
    velocity * VELOCITY_DECAY
}

/// Move `x` by `velocity`, wrapping around the horizontal playfield.
///
/// Leaving past the right edge re-enters at the left; the craft may hang up to
/// one hull-width off the left edge before re-entering at the right.
pub fn advance_position(x: f32, velocity: f32, scene_width: f32, craft_width: f32) -> f32 {
    let x = x + velocity;
    if x >= scene_width {
        WRAP_EPSILON
    } else if x < -craft_width {
        scene_width - WRAP_EPSILON
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_held() {
        assert_eq!(Direction::from_held(true, false), Some(Direction::Left));
        assert_eq!(Direction::from_held(false, true), Some(Direction::Right));
        assert_eq!(Direction::from_held(true, true), None);
        assert_eq!(Direction::from_held(false, false), None);
    }

    #[test]
    fn test_accelerate_from_rest_follows_request() {
        let v = accelerate(0.0, Direction::Right);
        assert!((v - 5.0 / 1.6 * 0.6).abs() < 1e-5);
        let v = accelerate(0.0, Direction::Left);
        assert!((v + 5.0 / 1.6 * 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_acceleration_tapers() {
        let first = accelerate(0.0, Direction::Right);
        let second = accelerate(first, Direction::Right);
        assert!(second - first < first);
    }

    #[test]
    fn test_reversal_penalty_grows_with_speed() {
        let slow = accelerate(1.0, Direction::Left);
        let fast = accelerate(4.0, Direction::Left);
        assert!((slow - (1.0 - 0.7)).abs() < 1e-5);
        assert!((fast - (4.0 - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_reversal_can_cross_zero() {
        let v = accelerate(0.3, Direction::Left);
        assert!(v < 0.0);
    }

    #[test]
    fn test_twenty_ticks_of_thrust_stay_bounded() {
        let mut v = 0.0;
        let mut x = 200.0;
        for _ in 0..20 {
            v = accelerate(v, Direction::Right);
            x = advance_position(x, v, 400.0, CRAFT_WIDTH);
            assert!(v <= MAX_SPEED);
        }
        assert!(v > 4.9);
        assert!(x > 200.0);
    }

    #[test]
    fn test_decay() {
        assert!((decay(5.0) - 4.5).abs() < 1e-6);
        assert!((decay(-2.0) + 1.8).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_right_edge() {
        assert_eq!(advance_position(398.0, 3.0, 400.0, CRAFT_WIDTH), WRAP_EPSILON);
    }

    #[test]
    fn test_wrap_left_edge() {
        assert_eq!(
            advance_position(-24.0, -2.0, 400.0, CRAFT_WIDTH),
            400.0 - WRAP_EPSILON
        );
        // Partially off the left edge is allowed
        assert_eq!(advance_position(-20.0, -2.0, 400.0, CRAFT_WIDTH), -22.0);
    }

    proptest! {
        #[test]
        fn prop_accelerate_never_exceeds_max_speed(
            v in -MAX_SPEED..=MAX_SPEED,
            right in any::<bool>(),
        ) {
            let direction = if right { Direction::Right } else { Direction::Left };
            let v = accelerate(v, direction);
            prop_assert!(v.abs() <= MAX_SPEED);
        }

        #[test]
        fn prop_position_stays_in_band(
            x in -CRAFT_WIDTH..400.0f32,
            v in -MAX_SPEED..=MAX_SPEED,
        ) {
            let x = advance_position(x, v, 400.0, CRAFT_WIDTH);
            prop_assert!(x >= -CRAFT_WIDTH && x < 400.0);
        }
    }
}
