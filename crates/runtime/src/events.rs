//! Events broadcast by the simulation worker.
//!
//! Every subscriber sees every event; slow subscribers may lag and miss
//! older ones (see [`tokio::sync::broadcast`]).

use std::sync::Arc;

use game_core::{GameState, Position, Tick, TickReport};

#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A narration line produced during a tick.
    Narration { tick: Tick, line: String },

    /// A tick finished; carries the report and the resulting state.
    TickCompleted {
        report: TickReport,
        state: Arc<GameState>,
    },

    /// The player died. No further ticks will run.
    GameOver {
        tick: Tick,
        position: Position,
        state: Arc<GameState>,
    },
}
