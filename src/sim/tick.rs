//! Fixed-step simulation tick
//!
//! Core game loop that advances the simulation by one tick.

use super::collision::HitProbe;
use super::kinematics::Direction;
use super::spawner;
use super::state::{EntityKind, FallingEntity, GameEvent, GameState, Hue};

/// Input signals for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left thrust held
    pub left: bool,
    /// Right thrust held
    pub right: bool,
    /// Force the craft's color (debug/testing)
    pub force_color: Option<Hue>,
    /// Force-enter the bonus round (debug/testing)
    pub force_bonus: bool,
    /// Live obstacle-frequency adjustment (debug/testing)
    pub obstacle_frequency_delta: i32,
    /// Reinitialize the session
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    // Frozen until restart
    if state.is_game_over() {
        return;
    }

    apply_debug_commands(state, input);

    // Craft
    state
        .craft
        .steer(Direction::from_held(input.left, input.right));
    state.craft.advance(state.width);
    state.events.push(GameEvent::NodeMoved {
        id: state.craft.id,
        rect: state.craft.bounds(),
    });

    // Falling entities
    let probe = HitProbe::for_craft(&state.craft);
    let floor = state.height;
    let fall_speed = state.config.fall_speed;

    if let Some(obstacle) = state.registry.advance_and_reap(
        EntityKind::Obstacle,
        floor,
        fall_speed,
        |rect| probe.touches(rect),
        &mut state.events,
    ) {
        resolve_obstacle(state, obstacle);
        if state.is_game_over() {
            return;
        }
    }

    if let Some(token) = state.registry.advance_and_reap(
        EntityKind::Token,
        floor,
        fall_speed,
        |rect| probe.touches(rect),
        &mut state.events,
    ) {
        state
            .registry
            .remove(EntityKind::Token, token.id, &mut state.events);
        state.collect_color(token.hue);
    }

    // Score
    if state
        .round
        .tick
        .is_multiple_of(state.config.command_frequency as u64)
        && !state.round.in_bonus_round
    {
        state.round.score += 1;
        if state.round.score == state.round.next_bonus_threshold {
            state.enter_bonus_round();
        }
    }

    spawn(state);
    expire_timers(state);

    state.round.tick += 1;
}

fn apply_debug_commands(state: &mut GameState, input: &TickInput) {
    if input.obstacle_frequency_delta != 0 {
        state
            .config
            .adjust_obstacle_frequency(input.obstacle_frequency_delta);
    }
    if let Some(hue) = input.force_color {
        state.collect_color(hue);
    }
    if input.force_bonus && !state.enter_bonus_round() {
        log::debug!("Bonus round already running, force ignored");
    }
}

/// Apply the outcome of the craft touching an obstacle
fn resolve_obstacle(state: &mut GameState, obstacle: FallingEntity) {
    state
        .registry
        .remove(EntityKind::Obstacle, obstacle.id, &mut state.events);

    if state.round.in_bonus_round {
        state.round.score += state.config.bonus_obstacle_score;
        log::debug!("Bonus hit, score {}", state.round.score);
    } else if state.craft.matches(obstacle.hue) {
        state
            .registry
            .add_life(state.config.max_lives, &mut state.events);
        log::debug!("Absorbed {:?}, {} lives", obstacle.hue, state.lives());
    } else {
        state.lose_life();
        log::debug!(
            "Struck by {:?} (craft {:?}), {} lives",
            obstacle.hue,
            state.craft.charge,
            state.lives()
        );
    }
}

/// Spawner hooks, each on its own cadence
fn spawn(state: &mut GameState) {
    let tick = state.round.tick;
    let frequency = state.config.obstacle_frequency;
    let in_bonus_round = state.round.in_bonus_round;

    if spawner::obstacle_line_due(tick, frequency) {
        let line =
            spawner::obstacle_line(&mut state.rng, &state.config, state.width, in_bonus_round);
        log::debug!("Tick {}: spawning {} obstacles", tick, line.len());
        for spawn in line {
            state.registry.spawn(spawn, &mut state.events);
        }
    }

    if spawner::token_due(tick, frequency) {
        if let Some(token) =
            spawner::token(&mut state.rng, &state.config, state.width, in_bonus_round)
        {
            log::debug!("Tick {}: spawning {:?} token", tick, token.hue);
            state.registry.spawn(token, &mut state.events);
        }
    }
}

/// End the bonus round or let the craft's color fade, whichever applies
fn expire_timers(state: &mut GameState) {
    let tick = state.round.tick;
    if state.round.in_bonus_round {
        let elapsed = tick.saturating_sub(state.round.bonus_round_entered_at_tick);
        if elapsed >= state.config.bonus_round_duration {
            state.exit_bonus_round();
        }
    } else if state.craft.charge.is_some() {
        let elapsed = tick.saturating_sub(state.round.color_acquired_at_tick);
        if elapsed >= state.config.color_duration {
            state.discharge();
        }
    }
}
