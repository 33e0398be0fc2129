//! Deterministic game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules (grid, pathfinding, combat,
//! monster scheduling) and exposes pure APIs with no I/O and no logging.
//! All state mutation during play flows through [`engine::GameEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod pathfinding;
pub mod state;

pub use action::{CardinalDirection, PlayerCommand, StepOutcome};
pub use combat::{AttackOutcome, Combatant, attack};
pub use config::GameConfig;
pub use engine::{GameEngine, TickReport, TurnError};
pub use error::{ErrorSeverity, GameError};
pub use pathfinding::{Path, PriorityQueue, find_path, manhattan};
pub use state::{
    ActorState, ActorTemplate, EntityId, EventLog, GameState, Grid, GridError, MonsterMap,
    OccupancyError, Position, Tick, Tile,
};
