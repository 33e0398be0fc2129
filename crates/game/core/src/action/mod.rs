//! Player intents and step outcomes.
//!
//! Commands are plain data. The engine interprets them against the current
//! [`GameState`](crate::state::GameState); nothing here mutates state.
mod movement;

pub use movement::{CardinalDirection, StepOutcome};

use crate::state::Position;

/// One command consumed per player turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    /// Step, attack or bump a door in the given direction.
    Move(CardinalDirection),
    /// Skip the player's action; monsters still act.
    Wait,
    /// Debug search from the player to `goal`, kept as a render overlay.
    FindPath { goal: Position },
}

impl PlayerCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerCommand::Move(_) => "move",
            PlayerCommand::Wait => "wait",
            PlayerCommand::FindPath { .. } => "find_path",
        }
    }
}

impl From<CardinalDirection> for PlayerCommand {
    fn from(direction: CardinalDirection) -> Self {
        PlayerCommand::Move(direction)
    }
}
