//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, input providers and the core
//! engine so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{Tick, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("input provider not set")]
    ProviderNotSet,

    #[error("input provider failed")]
    Provider(#[source] std::io::Error),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires an initial game state before building")]
    MissingInitialState,

    #[error("game is over since tick {tick}")]
    GameOver { tick: Tick },

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl RuntimeError {
    /// True when the error means the player has died.
    pub fn is_game_over(&self) -> bool {
        match self {
            RuntimeError::GameOver { .. } => true,
            RuntimeError::Turn(error) => error.is_game_over(),
            _ => false,
        }
    }
}
