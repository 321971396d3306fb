//! Display sink that only traces
//!
//! Used by the headless binary; run with `RUST_LOG=chromescape=trace` to see
//! every scene operation.

use super::DisplaySink;
use crate::sim::{Backdrop, EntityId, Fill, NodeKind, Rect};

#[derive(Debug, Default)]
pub struct LogSink {
    /// Scene operations seen so far
    pub operations: u64,
}

impl DisplaySink for LogSink {
    fn create_node(&mut self, id: EntityId, kind: NodeKind, rect: Rect, fill: Fill) {
        self.operations += 1;
        log::trace!("create {} {:?} at {:?} rgba {:?}", id, kind, rect.min, fill.rgba());
    }

    fn update_geometry(&mut self, id: EntityId, rect: Rect) {
        self.operations += 1;
        log::trace!("move {} to {:?}", id, rect.min);
    }

    fn update_fill(&mut self, id: EntityId, fill: Fill) {
        self.operations += 1;
        log::trace!("recolor {} rgba {:?}", id, fill.rgba());
    }

    fn remove_node(&mut self, id: EntityId) {
        self.operations += 1;
        log::trace!("remove {}", id);
    }

    fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.operations += 1;
        log::debug!("backdrop {:?}", backdrop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::present;
    use crate::sim::{GameEvent, Hue};

    #[test]
    fn test_counts_scene_operations() {
        let rect = Rect::new(0.0, 0.0, 25.0, 40.0);
        let mut sink = LogSink::default();
        present(
            &mut sink,
            &[
                GameEvent::NodeCreated {
                    id: 1,
                    kind: NodeKind::Craft,
                    rect,
                    fill: Fill::Hull,
                },
                GameEvent::NodeRecolored {
                    id: 1,
                    fill: Fill::Hue(Hue::Purple),
                },
                GameEvent::LifeLost { lives: 0 },
                GameEvent::NodeRemoved { id: 1 },
            ],
        );
        assert_eq!(sink.operations, 3);
    }
}
