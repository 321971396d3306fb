//! Game state and core simulation types
//!
//! Everything a session mutates lives in `GameState`; the display boundary only
//! ever sees it through the `GameEvent` queue.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::kinematics::{self, Direction};
use super::rect::Rect;
use super::registry::EntityRegistry;
use crate::config::Config;
use crate::consts::*;
use crate::error::ConfigError;

/// Identity shared by entities and their display nodes
pub type EntityId = u32;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (normal or bonus round, see `RoundState::in_bonus_round`)
    Playing,
    /// Lives ran out; frozen until restart
    GameOver,
}

/// The fixed color palette shared by obstacles and tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hue {
    Red,
    Yellow,
    Blue,
    Green,
    Orange,
    Purple,
}

impl Hue {
    pub const ALL: [Hue; 6] = [
        Hue::Red,
        Hue::Yellow,
        Hue::Blue,
        Hue::Green,
        Hue::Orange,
        Hue::Purple,
    ];

    /// Palette entry by index (debug color keys are 1-based on top of this)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn rgb(self) -> [f32; 3] {
        match self {
            Hue::Red => [1.0, 0.0, 0.0],
            Hue::Yellow => [1.0, 1.0, 0.0],
            Hue::Blue => [0.0, 0.0, 1.0],
            Hue::Green => [0.0, 0.5, 0.0],
            Hue::Orange => [1.0, 0.65, 0.0],
            Hue::Purple => [0.5, 0.0, 0.5],
        }
    }
}

/// Display fill of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    /// Uncharged craft
    Hull,
    /// Invulnerable craft during the bonus round
    Glow,
    Hue(Hue),
}

impl Fill {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Fill::Hull => [0.5, 0.5, 0.5, 1.0],
            Fill::Glow => [1.0, 1.0, 1.0, 1.0],
            Fill::Hue(hue) => {
                let [r, g, b] = hue.rgb();
                [r, g, b, 1.0]
            }
        }
    }
}

/// Scene background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backdrop {
    Space,
    BonusRound,
}

/// What a display node depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Craft,
    Obstacle,
    Token,
    LifeIcon,
}

/// Falling entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Rectangle; absorbs into a matching craft, costs a life otherwise
    Obstacle,
    /// Circle; recolors the craft
    Token,
}

impl From<EntityKind> for NodeKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Obstacle => NodeKind::Obstacle,
            EntityKind::Token => NodeKind::Token,
        }
    }
}

/// An obstacle or token falling down the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Bounding box (tokens use the box around their circle)
    pub rect: Rect,
    pub hue: Hue,
    /// Cleared when the entity is retired; dead entities are compacted away
    pub alive: bool,
}

/// A miniature craft in the lives row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeIcon {
    pub id: EntityId,
    pub rect: Rect,
}

impl LifeIcon {
    /// Icon for the `slot`-th life (0-based, left to right)
    pub fn new(id: EntityId, slot: usize) -> Self {
        let width = CRAFT_WIDTH * LIFE_ICON_SCALE;
        let height = CRAFT_HEIGHT * LIFE_ICON_SCALE;
        Self {
            id,
            rect: Rect::new(
                LIFE_ICON_SPACING * CRAFT_WIDTH * slot as f32,
                LIFE_ICON_BASE_Y - height,
                width,
                height,
            ),
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub id: EntityId,
    /// Left edge of the hull
    pub x: f32,
    /// Bottom edge of the hull (fixed band)
    pub base_y: f32,
    /// Horizontal velocity (units per tick, signed)
    pub velocity: f32,
    /// Held color; None is the neutral, uncharged state
    pub charge: Option<Hue>,
    /// Set for the duration of a bonus round
    pub invulnerable: bool,
    pub width: f32,
    pub height: f32,
}

impl Craft {
    pub fn new(id: EntityId, scene_width: f32, scene_height: f32) -> Self {
        Self {
            id,
            x: scene_width / 2.0,
            base_y: scene_height * CRAFT_BAND,
            velocity: 0.0,
            charge: None,
            invulnerable: false,
            width: CRAFT_WIDTH,
            height: CRAFT_HEIGHT,
        }
    }

    /// Bounding box of the hull (nose at the top)
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.base_y - self.height, self.width, self.height)
    }

    pub fn fill(&self) -> Fill {
        if self.invulnerable {
            Fill::Glow
        } else {
            self.charge.map_or(Fill::Hull, Fill::Hue)
        }
    }

    /// Thrust toward `direction`, or coast down without one
    pub fn steer(&mut self, direction: Option<Direction>) {
        self.velocity = match direction {
            Some(direction) => kinematics::accelerate(self.velocity, direction),
            None => kinematics::decay(self.velocity),
        };
    }

    /// Move by the current velocity with horizontal wraparound
    pub fn advance(&mut self, scene_width: f32) {
        self.x = kinematics::advance_position(self.x, self.velocity, scene_width, self.width);
    }

    /// Does this craft absorb an obstacle of the given hue?
    pub fn matches(&self, hue: Hue) -> bool {
        self.charge == Some(hue)
    }
}

/// Score, tick and bonus-round bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Simulation tick counter
    pub tick: u64,
    pub score: u64,
    pub in_bonus_round: bool,
    /// Tick of the last token pickup (drives color expiry)
    pub color_acquired_at_tick: u64,
    pub bonus_round_entered_at_tick: u64,
    /// Score that triggers the next bonus round
    pub next_bonus_threshold: u64,
}

impl RoundState {
    pub fn new(first_bonus_threshold: u64) -> Self {
        Self {
            tick: 0,
            score: 0,
            in_bonus_round: false,
            color_acquired_at_tick: 0,
            bonus_round_entered_at_tick: 0,
            next_bonus_threshold: first_bonus_threshold,
        }
    }
}

/// Something the simulation reports to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    NodeCreated {
        id: EntityId,
        kind: NodeKind,
        rect: Rect,
        fill: Fill,
    },
    NodeMoved {
        id: EntityId,
        rect: Rect,
    },
    NodeRecolored {
        id: EntityId,
        fill: Fill,
    },
    NodeRemoved {
        id: EntityId,
    },
    BackdropChanged(Backdrop),
    LifeGained {
        lives: u32,
    },
    LifeLost {
        lives: u32,
    },
    TokenCollected {
        hue: Hue,
        tick: u64,
    },
    BonusRoundEntered {
        tick: u64,
        score: u64,
    },
    BonusRoundExited {
        tick: u64,
        next_threshold: u64,
    },
    GameOver {
        tick: u64,
        score: u64,
    },
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Live tunables (debug commands may change them mid-session)
    pub config: Config,
    /// Playfield dimensions
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub craft: Craft,
    /// Obstacles, tokens and life icons
    pub registry: EntityRegistry,
    pub round: RoundState,
    /// Spawn generator (single source of randomness)
    #[serde(skip)]
    pub(super) rng: Pcg32,
    /// Events produced since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session state, failing fast on bad configuration
    pub fn new(config: Config, width: f32, height: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::Playfield { width, height });
        }

        let mut registry = EntityRegistry::new();
        let craft = Craft::new(registry.allocate_id(), width, height);
        let rng = Pcg32::seed_from_u64(config.seed);
        let round = RoundState::new(config.first_bonus_threshold);

        let mut state = Self {
            config,
            width,
            height,
            phase: GamePhase::Playing,
            craft,
            registry,
            round,
            rng,
            events: Vec::new(),
        };
        state.populate();

        log::info!(
            "Session initialized: {}x{}, seed {}, {} lives",
            width,
            height,
            state.config.seed,
            state.lives()
        );
        Ok(state)
    }

    /// Reinitialize entities, score, lives and tick counter.
    ///
    /// The config (including live-tuned values) and the generator stream carry
    /// over, so consecutive games do not replay the same layout.
    pub fn restart(&mut self) {
        self.registry.clear(&mut self.events);
        self.events.push(GameEvent::NodeRemoved { id: self.craft.id });

        self.craft = Craft::new(self.registry.allocate_id(), self.width, self.height);
        self.round = RoundState::new(self.config.first_bonus_threshold);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::BackdropChanged(Backdrop::Space));
        self.populate();

        log::info!("Session restarted");
    }

    /// Craft node plus the starting lives row
    fn populate(&mut self) {
        self.events.push(GameEvent::NodeCreated {
            id: self.craft.id,
            kind: NodeKind::Craft,
            rect: self.craft.bounds(),
            fill: self.craft.fill(),
        });
        for _ in 0..self.config.starting_lives {
            self.registry
                .place_life_icon(self.config.max_lives, &mut self.events);
        }
    }

    /// Remaining lives
    pub fn lives(&self) -> u32 {
        self.registry.life_count()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Score line for a HUD
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.round.score)
    }

    fn recolor_craft(&mut self) {
        self.events.push(GameEvent::NodeRecolored {
            id: self.craft.id,
            fill: self.craft.fill(),
        });
    }

    /// Take on a hue, as when a token is collected
    pub fn collect_color(&mut self, hue: Hue) {
        self.craft.charge = Some(hue);
        self.round.color_acquired_at_tick = self.round.tick;
        self.recolor_craft();
        self.events.push(GameEvent::TokenCollected {
            hue,
            tick: self.round.tick,
        });
        log::debug!("Craft charged {:?} at tick {}", hue, self.round.tick);
    }

    /// Drop back to the neutral color
    pub fn discharge(&mut self) {
        if self.craft.charge.take().is_some() {
            self.recolor_craft();
        }
    }

    /// Enter the bonus round: extra life, invulnerable craft.
    ///
    /// Returns false (and changes nothing) if one is already running.
    pub fn enter_bonus_round(&mut self) -> bool {
        if self.round.in_bonus_round {
            return false;
        }
        self.registry.add_life(self.config.max_lives, &mut self.events);
        self.round.in_bonus_round = true;
        self.round.bonus_round_entered_at_tick = self.round.tick;
        self.craft.invulnerable = true;
        self.craft.charge = None;
        self.recolor_craft();
        self.events.push(GameEvent::BackdropChanged(Backdrop::BonusRound));
        self.events.push(GameEvent::BonusRoundEntered {
            tick: self.round.tick,
            score: self.round.score,
        });
        log::info!(
            "Bonus round entered at tick {} (score {})",
            self.round.tick,
            self.round.score
        );
        true
    }

    /// Leave the bonus round and raise the next threshold
    pub fn exit_bonus_round(&mut self) {
        if !self.round.in_bonus_round {
            return;
        }
        self.round.in_bonus_round = false;
        self.round.next_bonus_threshold = self.round.next_bonus_threshold.saturating_mul(2);
        self.craft.invulnerable = false;
        self.craft.charge = None;
        self.recolor_craft();
        self.events.push(GameEvent::BackdropChanged(Backdrop::Space));
        self.events.push(GameEvent::BonusRoundExited {
            tick: self.round.tick,
            next_threshold: self.round.next_bonus_threshold,
        });
        log::info!(
            "Bonus round over at tick {}, next at {}",
            self.round.tick,
            self.round.next_bonus_threshold
        );
    }

    /// Lose a life; enters `GameOver` when the last one goes
    pub fn lose_life(&mut self) {
        let remaining = self.registry.remove_life(&mut self.events);
        if remaining == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                tick: self.round.tick,
                score: self.round.score,
            });
            log::info!(
                "Game over at tick {} with score {}",
                self.round.tick,
                self.round.score
            );
        }
    }

    /// Vulnerable point of the craft, for hosts and autopilot
    pub fn craft_probe_point(&self) -> Vec2 {
        super::collision::vulnerable_point(&self.craft)
    }
}
