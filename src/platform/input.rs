//! Input signal latch
//!
//! Events may arrive at any time between ticks. Held directions are level
//! signals; debug commands are one-shot and consumed by the next tick.

use crate::sim::{Direction, Hue, TickInput};

/// Accumulated input between two ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    /// One-shot commands waiting for the next tick
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction_pressed(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left_held = true,
            Direction::Right => self.right_held = true,
        }
    }

    pub fn direction_released(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left_held = false,
            Direction::Right => self.right_held = false,
        }
    }

    /// Force the craft to palette entry `index` (0-based)
    pub fn force_color_index(&mut self, index: usize) {
        match Hue::from_index(index) {
            Some(hue) => self.force_color(hue),
            None => log::warn!("No palette entry {}", index),
        }
    }

    pub fn force_color(&mut self, hue: Hue) {
        self.pending.force_color = Some(hue);
    }

    pub fn force_bonus(&mut self) {
        self.pending.force_bonus = true;
    }

    /// Nudge the obstacle cadence (positive = sparser lines)
    pub fn adjust_obstacle_frequency(&mut self, delta: i32) {
        self.pending.obstacle_frequency_delta += delta;
    }

    pub fn request_restart(&mut self) {
        self.pending.restart = true;
    }

    /// Sample the input for one tick, clearing the one-shot commands
    pub fn take_tick_input(&mut self) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);
        input.left = self.left_held;
        input.right = self.right_held;
        input
    }
}
