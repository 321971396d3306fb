//! Obstacle lines and tokens on a tick cadence
//!
//! Spawns are computed against an injected generator; the registry assigns ids.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::{EntityKind, Hue};
use crate::config::Config;

/// An entity about to enter the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub kind: EntityKind,
    pub rect: Rect,
    pub hue: Hue,
}

/// Is this an obstacle-line tick?
#[inline]
pub fn obstacle_line_due(tick: u64, obstacle_frequency: u32) -> bool {
    tick.is_multiple_of(obstacle_frequency as u64)
}

/// Is this a token tick? Tokens come half a cadence ahead of each line.
#[inline]
pub fn token_due(tick: u64, obstacle_frequency: u32) -> bool {
    let frequency = obstacle_frequency as u64;
    (tick + frequency / 2).is_multiple_of(frequency)
}

/// Uniform palette pick
pub fn random_hue(rng: &mut impl Rng) -> Hue {
    Hue::ALL[rng.random_range(0..Hue::ALL.len())]
}

/// Obstacles per line; halved during the bonus round
pub fn obstacle_count(obstacles_per_line: u32, in_bonus_round: bool) -> u32 {
    if in_bonus_round {
        obstacles_per_line / 2
    } else {
        obstacles_per_line
    }
}

/// Build one line of obstacles across the top of the playfield.
///
/// The width is cut into twice as many slots as the normal line size and each
/// obstacle takes a distinct slot, drawn without replacement.
pub fn obstacle_line(
    rng: &mut impl Rng,
    config: &Config,
    scene_width: f32,
    in_bonus_round: bool,
) -> Vec<Spawn> {
    let slot_count = config.obstacles_per_line as usize * 2;
    let slot_width = scene_width / slot_count as f32;
    let width = if in_bonus_round {
        slot_width * 0.5
    } else {
        slot_width
    };

    let mut slots: Vec<usize> = (0..slot_count).collect();
    let count = obstacle_count(config.obstacles_per_line, in_bonus_round) as usize;

    (0..count)
        .map(|_| {
            let slot = slots.swap_remove(rng.random_range(0..slots.len()));
            Spawn {
                kind: EntityKind::Obstacle,
                rect: Rect::new(slot as f32 * slot_width, 0.0, width, config.obstacle_height),
                hue: random_hue(rng),
            }
        })
        .collect()
}

/// Roll for a token; never during the bonus round
pub fn token(
    rng: &mut impl Rng,
    config: &Config,
    scene_width: f32,
    in_bonus_round: bool,
) -> Option<Spawn> {
    if in_bonus_round || rng.random::<f32>() >= config.token_chance {
        return None;
    }
    let center = Vec2::new(rng.random::<f32>() * scene_width, config.token_spawn_y);
    Some(Spawn {
        kind: EntityKind::Token,
        rect: Rect::around_circle(center, config.token_radius),
        hue: random_hue(rng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_cadences() {
        assert!(obstacle_line_due(0, 45));
        assert!(obstacle_line_due(90, 45));
        assert!(!obstacle_line_due(44, 45));
        // 45 / 2 = 22, so tokens land on 23, 68, ...
        assert!(token_due(23, 45));
        assert!(token_due(68, 45));
        assert!(!token_due(22, 45));
    }

    #[test]
    fn test_line_uses_distinct_slots() {
        let config = Config::default();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let line = obstacle_line(&mut rng, &config, 400.0, false);
            assert_eq!(line.len(), 4);

            let mut xs: Vec<i32> = line.iter().map(|s| s.rect.min_x() as i32).collect();
            xs.sort_unstable();
            xs.dedup();
            assert_eq!(xs.len(), 4);

            for spawn in &line {
                assert_eq!(spawn.rect.size, Vec2::new(50.0, 20.0));
                assert!(spawn.rect.min_x() >= 0.0 && spawn.rect.max_x() <= 400.0);
                assert_eq!(spawn.rect.min_y(), 0.0);
                assert_eq!(spawn.kind, EntityKind::Obstacle);
            }
        }
    }

    #[test]
    fn test_bonus_line_is_thinner() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let line = obstacle_line(&mut rng, &config, 400.0, true);
        assert_eq!(line.len(), 2);
        assert!(line.iter().all(|s| s.rect.size.x == 25.0));
    }

    #[test]
    fn test_single_obstacle_line_empties_in_bonus() {
        let config = Config {
            obstacles_per_line: 1,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(11);
        assert_eq!(obstacle_line(&mut rng, &config, 400.0, false).len(), 1);
        assert!(obstacle_line(&mut rng, &config, 400.0, true).is_empty());
    }

    #[test]
    fn test_no_tokens_in_bonus_round() {
        let config = Config {
            token_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        assert!(token(&mut rng, &config, 400.0, true).is_none());
        let spawn = token(&mut rng, &config, 400.0, false).unwrap();
        assert_eq!(spawn.kind, EntityKind::Token);
        assert_eq!(spawn.rect.center().y, 5.0);
        assert_eq!(spawn.rect.size.x, 20.0);
    }

    #[test]
    fn test_token_rate_is_about_a_quarter() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1234);
        let hits = (0..4000)
            .filter(|_| token(&mut rng, &config, 400.0, false).is_some())
            .count();
        assert!((800..1200).contains(&hits), "got {hits}");
    }

    #[test]
    fn test_same_seed_same_line() {
        let config = Config::default();
        let a = obstacle_line(&mut Pcg32::seed_from_u64(9), &config, 400.0, false);
        let b = obstacle_line(&mut Pcg32::seed_from_u64(9), &config, 400.0, false);
        assert_eq!(a, b);
    }
}
