//! In-memory retained scene
//!
//! Mirrors what a real scene graph would hold. Headless runs and tests use it
//! to check that the event stream keeps the display in step with the state.

use std::collections::BTreeMap;

use super::DisplaySink;
use crate::sim::{Backdrop, EntityId, Fill, NodeKind, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub rect: Rect,
    pub fill: Fill,
}

#[derive(Debug, Clone)]
pub struct RetainedScene {
    nodes: BTreeMap<EntityId, SceneNode>,
    backdrop: Backdrop,
}

impl Default for RetainedScene {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            backdrop: Backdrop::Space,
        }
    }
}

impl RetainedScene {
    pub fn node(&self, id: EntityId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.values().filter(|n| n.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }
}

impl DisplaySink for RetainedScene {
    fn create_node(&mut self, id: EntityId, kind: NodeKind, rect: Rect, fill: Fill) {
        if self.nodes.insert(id, SceneNode { kind, rect, fill }).is_some() {
            log::warn!("Node {} created twice", id);
        }
    }

    fn update_geometry(&mut self, id: EntityId, rect: Rect) {
        match self.nodes.get_mut(&id) {
            Some(node) => node.rect = rect,
            None => log::warn!("Move of unknown node {}", id),
        }
    }

    fn update_fill(&mut self, id: EntityId, fill: Fill) {
        match self.nodes.get_mut(&id) {
            Some(node) => node.fill = fill,
            None => log::warn!("Recolor of unknown node {}", id),
        }
    }

    fn remove_node(&mut self, id: EntityId) {
        if self.nodes.remove(&id).is_none() {
            log::warn!("Removal of unknown node {}", id);
        }
    }

    fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.backdrop = backdrop;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recolor_and_count() {
        let mut scene = RetainedScene::default();
        let rect = Rect::new(0.0, 0.0, 25.0, 40.0);
        scene.create_node(1, NodeKind::Craft, rect, Fill::Hull);
        scene.create_node(2, NodeKind::LifeIcon, rect, Fill::Hull);
        scene.update_fill(1, Fill::Glow);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.count(NodeKind::LifeIcon), 1);
        assert_eq!(scene.node(1).unwrap().fill, Fill::Glow);
    }

    #[test]
    fn test_unknown_nodes_are_ignored() {
        let mut scene = RetainedScene::default();
        scene.update_geometry(9, Rect::new(0.0, 0.0, 1.0, 1.0));
        scene.remove_node(9);
        assert!(scene.is_empty());
    }
}
