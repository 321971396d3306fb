//! Axis-aligned rectangle geometry
//!
//! Screen-space convention: x grows to the right, y grows downward, so falling
//! entities have increasing y and `min.y` is the top edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle enclosing a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Shift the rectangle by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
    }

    /// Check if a point lies inside the rectangle grown by the given buffers.
    ///
    /// Edges are inclusive.
    pub fn contains_expanded(&self, point: Vec2, h_buffer: f32, v_buffer: f32) -> bool {
        point.y >= self.min_y() - v_buffer
            && point.y <= self.max_y() + v_buffer
            && point.x >= self.min_x() - h_buffer
            && point.x <= self.max_x() + h_buffer
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.contains_expanded(point, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_around_circle() {
        let rect = Rect::around_circle(Vec2::new(100.0, 5.0), 10.0);
        assert_eq!(rect.min, Vec2::new(90.0, -5.0));
        assert_eq!(rect.size, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_horizontal_buffer_only_widens_x() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_expanded(Vec2::new(-5.0, 5.0), 6.0, 0.0));
        assert!(!rect.contains_expanded(Vec2::new(5.0, -1.0), 6.0, 0.0));
    }

    #[test]
    fn test_translate() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.translate(Vec2::new(0.0, 5.0));
        assert_eq!(rect.min_y(), 5.0);
        assert_eq!(rect.max_y(), 15.0);
    }
}
