//! Craft hit-testing
//!
//! The craft is reduced to a single vulnerable point just inside its nose. A
//! falling entity touches the craft when that point lies inside the entity's
//! box, widened horizontally by a quarter of the hull so glancing contacts at
//! the wing tips still count.

use glam::Vec2;

use super::rect::Rect;
use super::state::Craft;
use crate::consts::VULNERABLE_INSET;

/// Extra vertical tolerance around entities (none)
pub const VERTICAL_BUFFER: f32 = 0.0;

/// Point used for every craft-vs-entity test
pub fn vulnerable_point(craft: &Craft) -> Vec2 {
    let bounds = craft.bounds();
    Vec2::new(
        bounds.min_x() + bounds.size.x / 2.0,
        bounds.min_y() + VULNERABLE_INSET,
    )
}

/// Horizontal tolerance around entities
#[inline]
pub fn horizontal_buffer(craft: &Craft) -> f32 {
    craft.width / 4.0
}

/// A craft's hit-test, captured once per tick
#[derive(Debug, Clone, Copy)]
pub struct HitProbe {
    pub point: Vec2,
    pub h_buffer: f32,
    pub v_buffer: f32,
}

impl HitProbe {
    pub fn for_craft(craft: &Craft) -> Self {
        Self {
            point: vulnerable_point(craft),
            h_buffer: horizontal_buffer(craft),
            v_buffer: VERTICAL_BUFFER,
        }
    }

    /// Is the entity with this bounding box touching the craft?
    pub fn touches(&self, rect: &Rect) -> bool {
        rect.contains_expanded(self.point, self.h_buffer, self.v_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn craft_at(x: f32) -> Craft {
        // Base at y=320, nose at y=280
        let mut craft = Craft::new(1, 400.0, 400.0);
        craft.x = x;
        craft
    }

    #[test]
    fn test_vulnerable_point_sits_inside_nose() {
        let craft = craft_at(100.0);
        let point = vulnerable_point(&craft);
        assert_eq!(point, Vec2::new(112.5, 286.0));
        assert!(craft.bounds().contains_point(point));
    }

    #[test]
    fn test_direct_hit() {
        let probe = HitProbe::for_craft(&craft_at(100.0));
        assert!(probe.touches(&Rect::new(100.0, 280.0, 50.0, 20.0)));
    }

    #[test]
    fn test_wing_tip_graze_counts() {
        let probe = HitProbe::for_craft(&craft_at(100.0));
        // Entity ends 5 units left of the point, buffer is 6.25
        assert!(probe.touches(&Rect::new(57.5, 280.0, 50.0, 20.0)));
        // 7 units away is a miss
        assert!(!probe.touches(&Rect::new(55.5, 280.0, 50.0, 20.0)));
    }

    #[test]
    fn test_no_vertical_slack() {
        let probe = HitProbe::for_craft(&craft_at(100.0));
        // Bottom edge just above the point
        assert!(!probe.touches(&Rect::new(100.0, 265.0, 50.0, 20.0)));
        // Bottom edge exactly on the point
        assert!(probe.touches(&Rect::new(100.0, 266.0, 50.0, 20.0)));
    }
}
