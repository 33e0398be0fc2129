//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`InputProvider`] implementations so the simulation
//! can run with keyboard input, scripted fixtures, or replays.
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{GameState, PlayerCommand};

use super::errors::Result;

/// Trait for providing the player's next command based on the current state.
#[async_trait]
pub trait InputProvider: Send + Sync {
    /// Returns the next command, or `None` when the player quits or the
    /// input source is exhausted.
    async fn next_command(&self, state: &GameState) -> Result<Option<PlayerCommand>>;
}

/// A provider that always waits. Monsters keep acting every tick.
pub struct WaitProvider;

#[async_trait]
impl InputProvider for WaitProvider {
    async fn next_command(&self, _state: &GameState) -> Result<Option<PlayerCommand>> {
        Ok(Some(PlayerCommand::Wait))
    }
}

/// Replays a fixed list of commands, then quits.
#[derive(Default)]
pub struct ScriptedProvider {
    commands: Mutex<VecDeque<PlayerCommand>>,
}

impl ScriptedProvider {
    pub fn new(commands: impl IntoIterator<Item = PlayerCommand>) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().collect()),
        }
    }

    /// Number of commands not yet handed out.
    pub fn remaining(&self) -> usize {
        self.commands.lock().map(|queue| queue.len()).unwrap_or(0)
    }
}

#[async_trait]
impl InputProvider for ScriptedProvider {
    async fn next_command(&self, _state: &GameState) -> Result<Option<PlayerCommand>> {
        let next = match self.commands.lock() {
            Ok(mut queue) => queue.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        Ok(next)
    }
}
