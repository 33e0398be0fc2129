//! Errors surfaced while advancing the simulation.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{OccupancyError, Position, Tick};

/// Errors that end or abort a tick.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// Player hitpoints dropped to zero or below. The game is over.
    ///
    /// `narration` holds the lines emitted during the fatal tick, up to and
    /// including the killing blow.
    #[error("player died at {position} on tick {tick}")]
    PlayerDied {
        position: Position,
        tick: Tick,
        narration: Vec<String>,
    },

    #[error(transparent)]
    Occupancy(#[from] OccupancyError),
}

impl TurnError {
    pub fn is_game_over(&self) -> bool {
        self.severity().is_fatal()
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::PlayerDied { .. } => ErrorSeverity::Fatal,
            TurnError::Occupancy(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::PlayerDied { .. } => "TURN_PLAYER_DIED",
            TurnError::Occupancy(error) => error.error_code(),
        }
    }
}
