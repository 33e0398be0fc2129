//! State management errors.
//!
//! Errors raised while assembling the walkability grid or mutating the
//! monster occupancy map.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors raised when a grid is built from inconsistent tile data.
///
/// Loaders surface these at load time; a live [`Grid`](crate::state::Grid)
/// is always consistent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Grid has zero width or zero height.
    #[error("grid must not be empty (got {width}x{height})")]
    Empty {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Tile buffer length does not match `width * height`.
    #[error("grid {width}x{height} expects {expected} tiles, got {actual}")]
    SizeMismatch {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Expected tile count.
        expected: usize,
        /// Provided tile count.
        actual: usize,
    },

    /// A construction-only `Pending` tile leaked into the grid.
    #[error("unresolved pending tile at {position}")]
    PendingTile {
        /// Location of the pending tile.
        position: Position,
    },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            Empty { .. } => "GRID_EMPTY",
            SizeMismatch { .. } => "GRID_SIZE_MISMATCH",
            PendingTile { .. } => "GRID_PENDING_TILE",
        }
    }
}

/// Errors raised by the monster occupancy map.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OccupancyError {
    /// Position is already occupied by another monster.
    #[error("position {position} is already occupied by monster {occupant}")]
    PositionOccupied {
        /// The position that is occupied.
        position: Position,
        /// The monster currently occupying the position.
        occupant: EntityId,
    },

    /// No monster is stored at the given position.
    #[error("no monster at {position}")]
    MonsterNotFound {
        /// The position that was looked up.
        position: Position,
    },
}

impl GameError for OccupancyError {
    fn severity(&self) -> ErrorSeverity {
        use OccupancyError::*;
        match self {
            PositionOccupied { .. } => ErrorSeverity::Validation,
            // The scheduler only addresses monsters it just looked up.
            MonsterNotFound { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OccupancyError::*;
        match self {
            PositionOccupied { .. } => "OCCUPANCY_POSITION_OCCUPIED",
            MonsterNotFound { .. } => "OCCUPANCY_MONSTER_NOT_FOUND",
        }
    }
}
