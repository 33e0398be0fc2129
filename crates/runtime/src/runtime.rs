//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the game loop.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{GameState, Tick, TickReport};
use tracing::{debug, info};

use crate::api::{InputProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::GameEvent;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Why [`Runtime::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input provider ran out of commands or the player quit.
    Quit { tick: Tick },
    /// The player died.
    GameOver { tick: Tick },
}

/// Main runtime that orchestrates game simulation
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    provider: Option<Box<dyn InputProvider>>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to game events
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Asks the provider for one command and runs one tick with it.
    ///
    /// Returns `Ok(None)` when the provider has no more commands.
    pub async fn step(&mut self) -> Result<Option<TickReport>> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;

        let snapshot = self.handle.query_state().await?;
        let Some(command) = provider.next_command(&snapshot).await? else {
            return Ok(None);
        };

        self.handle.tick(command).await.map(Some)
    }

    /// Run the game loop until the player quits or dies.
    pub async fn run(&mut self) -> Result<SessionEnd> {
        loop {
            match self.step().await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    let tick = self.handle.query_state().await?.tick;
                    info!("Input finished at tick {}", tick);
                    return Ok(SessionEnd::Quit { tick });
                }
                Err(RuntimeError::Turn(game_core::TurnError::PlayerDied { tick, .. }))
                | Err(RuntimeError::GameOver { tick }) => {
                    return Ok(SessionEnd::GameOver { tick });
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Set the player input provider
    pub fn set_provider(&mut self, provider: impl InputProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        debug!("Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    provider: Option<Box<dyn InputProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state (required)
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set player input provider (optional; required by [`Runtime::step`])
    pub fn provider(mut self, provider: impl InputProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let initial_state = self.state.ok_or(RuntimeError::MissingInitialState)?;

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let (event_tx, _event_rx) =
            broadcast::channel::<GameEvent>(self.config.event_buffer_size.max(1));

        let handle = RuntimeHandle::new(command_tx, event_tx.clone());

        let sim_worker = SimulationWorker::new(initial_state, command_rx, event_tx);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            provider: self.provider,
            sim_worker_handle,
        })
    }
}
