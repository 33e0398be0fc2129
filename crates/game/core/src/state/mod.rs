//! Authoritative game state representation.
//!
//! This module owns the grid, the actors and the narration log. Runtime
//! layers clone or query this state but mutate it exclusively through the
//! engine.
pub mod error;
pub mod types;

pub use error::{GridError, OccupancyError};
pub use types::{
    ActorState, ActorTemplate, EntityId, EventLog, Grid, MonsterMap, Neighbors, Position, Tick,
    Tile,
};

use crate::config::GameConfig;
use crate::pathfinding::Path;

/// Canonical snapshot of one level in play.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Number of completed ticks.
    pub tick: Tick,
    /// Tile layout; only door tiles change after load.
    pub grid: Grid,
    pub player: ActorState,
    /// Live monsters keyed by position.
    pub monsters: MonsterMap,
    /// Narration for the UI.
    pub events: EventLog,
    /// Result of the last debug path search, kept for overlay rendering.
    pub debug_path: Option<Path>,

    /// Sequential monster id allocator. 0 is reserved for the player.
    next_entity_id: u32,
}

impl GameState {
    /// Creates a state with the given grid and player and no monsters.
    pub fn new(grid: Grid, player: ActorState, config: &GameConfig) -> Self {
        Self {
            tick: Tick::ZERO,
            grid,
            player,
            monsters: MonsterMap::new(),
            events: EventLog::with_capacity(config.event_log_capacity),
            debug_path: None,
            next_entity_id: 1,
        }
    }

    /// Spawns a monster from a template, allocating a fresh id.
    pub fn spawn_monster(
        &mut self,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, OccupancyError> {
        let id = EntityId(self.next_entity_id);
        self.monsters.insert(template.spawn(id, position))?;
        self.next_entity_id += 1;
        Ok(id)
    }

    /// Actor standing on the position, player included.
    pub fn occupant_at(&self, position: Position) -> Option<EntityId> {
        if self.player.position == position {
            return Some(EntityId::PLAYER);
        }
        self.monsters.get(position).map(|monster| monster.id)
    }

    pub fn is_player_alive(&self) -> bool {
        self.player.is_alive()
    }

    /// Text snapshot: tiles, debug path overlay, monsters, then the player.
    pub fn render_ascii(&self) -> String {
        let mut canvas: Vec<Vec<char>> = self
            .grid
            .rows()
            .map(|row| row.iter().map(|tile| tile.glyph()).collect())
            .collect();

        let mut paint = |position: Position, glyph: char| {
            if self.grid.in_range(position) {
                canvas[position.y as usize][position.x as usize] = glyph;
            }
        };

        if let Some(path) = &self.debug_path {
            for position in path.iter() {
                paint(*position, '*');
            }
        }
        for monster in self.monsters.iter() {
            paint(monster.position, monster.glyph);
        }
        paint(self.player.position, self.player.glyph);

        let mut out = String::with_capacity(canvas.len() * (self.grid.width() as usize + 1));
        for row in canvas {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
