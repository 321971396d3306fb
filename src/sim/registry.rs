//! Entity lifetimes: falling obstacles and tokens, plus the lives row
//!
//! Entities are kept in spawn order. Retirement during a traversal only marks
//! the entity dead; the collection is compacted once the pass is done.

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::spawner::Spawn;
use super::state::{EntityId, EntityKind, FallingEntity, Fill, GameEvent, LifeIcon, NodeKind};

/// Owner of every active entity and the id counter
#[derive(Debug, Clone, Serialize)]
pub struct EntityRegistry {
    obstacles: Vec<FallingEntity>,
    tokens: Vec<FallingEntity>,
    /// Oldest first; lives are lost from the end
    lives: Vec<LifeIcon>,
    next_id: EntityId,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            tokens: Vec::new(),
            lives: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn allocate_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn obstacles(&self) -> &[FallingEntity] {
        &self.obstacles
    }

    pub fn tokens(&self) -> &[FallingEntity] {
        &self.tokens
    }

    pub fn lives(&self) -> &[LifeIcon] {
        &self.lives
    }

    pub fn life_count(&self) -> u32 {
        self.lives.len() as u32
    }

    fn collection_mut(&mut self, kind: EntityKind) -> &mut Vec<FallingEntity> {
        match kind {
            EntityKind::Obstacle => &mut self.obstacles,
            EntityKind::Token => &mut self.tokens,
        }
    }

    /// Register a freshly spawned entity and create its node
    pub fn spawn(&mut self, spawn: Spawn, events: &mut Vec<GameEvent>) -> EntityId {
        let id = self.allocate_id();
        events.push(GameEvent::NodeCreated {
            id,
            kind: NodeKind::from(spawn.kind),
            rect: spawn.rect,
            fill: Fill::Hue(spawn.hue),
        });
        self.collection_mut(spawn.kind).push(FallingEntity {
            id,
            kind: spawn.kind,
            rect: spawn.rect,
            hue: spawn.hue,
            alive: true,
        });
        id
    }

    /// One pass over a collection: retire, hit-test, or fall.
    ///
    /// Each entity is first retired if its top edge is past `floor` (this wins
    /// over a simultaneous hit), then tested with `touches`, then moved down by
    /// `fall_speed`. Touching entities stay put. Returns the first toucher in
    /// spawn order; the caller resolves it with [`EntityRegistry::remove`].
    pub fn advance_and_reap(
        &mut self,
        kind: EntityKind,
        floor: f32,
        fall_speed: f32,
        touches: impl Fn(&Rect) -> bool,
        events: &mut Vec<GameEvent>,
    ) -> Option<FallingEntity> {
        let entities = self.collection_mut(kind);
        let mut collider = None;

        for entity in entities.iter_mut() {
            if entity.rect.min_y() > floor {
                entity.alive = false;
                events.push(GameEvent::NodeRemoved { id: entity.id });
            } else if touches(&entity.rect) {
                if collider.is_none() {
                    collider = Some(*entity);
                }
            } else {
                entity.rect.translate(Vec2::new(0.0, fall_speed));
                events.push(GameEvent::NodeMoved {
                    id: entity.id,
                    rect: entity.rect,
                });
            }
        }

        entities.retain(|e| e.alive);
        collider
    }

    /// Remove a collision-resolved entity
    pub fn remove(
        &mut self,
        kind: EntityKind,
        id: EntityId,
        events: &mut Vec<GameEvent>,
    ) -> Option<FallingEntity> {
        let entities = self.collection_mut(kind);
        let index = entities.iter().position(|e| e.id == id)?;
        let mut removed = entities.remove(index);
        removed.alive = false;
        events.push(GameEvent::NodeRemoved { id });
        Some(removed)
    }

    /// Append a life icon unless the row is already at `max_lives`
    pub fn add_life(&mut self, max_lives: u32, events: &mut Vec<GameEvent>) -> bool {
        if !self.place_life_icon(max_lives, events) {
            return false;
        }
        events.push(GameEvent::LifeGained {
            lives: self.life_count(),
        });
        true
    }

    /// Lay out one more icon without announcing a gained life (session setup)
    pub fn place_life_icon(&mut self, max_lives: u32, events: &mut Vec<GameEvent>) -> bool {
        if self.life_count() >= max_lives {
            log::debug!("Life cap ({}) reached", max_lives);
            return false;
        }
        let icon = LifeIcon::new(self.allocate_id(), self.lives.len());
        events.push(GameEvent::NodeCreated {
            id: icon.id,
            kind: NodeKind::LifeIcon,
            rect: icon.rect,
            fill: Fill::Hull,
        });
        self.lives.push(icon);
        true
    }

    /// Remove the newest life icon; returns the remaining count
    pub fn remove_life(&mut self, events: &mut Vec<GameEvent>) -> u32 {
        if let Some(icon) = self.lives.pop() {
            events.push(GameEvent::NodeRemoved { id: icon.id });
            events.push(GameEvent::LifeLost {
                lives: self.life_count(),
            });
        }
        self.life_count()
    }

    /// Drop everything (restart); the id counter keeps counting
    pub fn clear(&mut self, events: &mut Vec<GameEvent>) {
        let ids = self
            .obstacles
            .drain(..)
            .chain(self.tokens.drain(..))
            .map(|e| e.id)
            .chain(self.lives.drain(..).map(|l| l.id));
        events.extend(ids.map(|id| GameEvent::NodeRemoved { id }));
    }
}
