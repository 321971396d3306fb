//! Display boundary
//!
//! The simulation never draws. It queues `GameEvent`s, and `present` replays
//! the node-level ones onto whatever retained scene graph the host owns.
//! Node handles are entity ids.

pub mod log_sink;
pub mod scene;

pub use log_sink::LogSink;
pub use scene::{RetainedScene, SceneNode};

use crate::sim::{Backdrop, EntityId, Fill, GameEvent, NodeKind, Rect};

/// A retained scene graph the simulation can drive
pub trait DisplaySink {
    fn create_node(&mut self, id: EntityId, kind: NodeKind, rect: Rect, fill: Fill);
    fn update_geometry(&mut self, id: EntityId, rect: Rect);
    fn update_fill(&mut self, id: EntityId, fill: Fill);
    fn remove_node(&mut self, id: EntityId);
    fn set_backdrop(&mut self, backdrop: Backdrop);
}

/// Replay one tick's events onto the display
pub fn present<D: DisplaySink + ?Sized>(sink: &mut D, events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::NodeCreated { id, kind, rect, fill } => {
                sink.create_node(id, kind, rect, fill)
            }
            GameEvent::NodeMoved { id, rect } => sink.update_geometry(id, rect),
            GameEvent::NodeRecolored { id, fill } => sink.update_fill(id, fill),
            GameEvent::NodeRemoved { id } => sink.remove_node(id),
            GameEvent::BackdropChanged(backdrop) => sink.set_backdrop(backdrop),
            // Gameplay notifications carry no scene changes
            _ => log::trace!("{:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_applies_node_events_in_order() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut moved = rect;
        moved.translate(glam::Vec2::new(0.0, 5.0));
        let events = [
            GameEvent::NodeCreated {
                id: 3,
                kind: NodeKind::Obstacle,
                rect,
                fill: Fill::Hull,
            },
            GameEvent::NodeMoved { id: 3, rect: moved },
            GameEvent::TokenCollected {
                hue: crate::sim::Hue::Red,
                tick: 0,
            },
            GameEvent::BackdropChanged(Backdrop::BonusRound),
        ];

        let mut scene = RetainedScene::default();
        present(&mut scene, &events);

        let node = scene.node(3).unwrap();
        assert_eq!(node.rect, moved);
        assert_eq!(scene.backdrop(), Backdrop::BonusRound);

        present(&mut scene, &[GameEvent::NodeRemoved { id: 3 }]);
        assert!(scene.is_empty());
    }
}
