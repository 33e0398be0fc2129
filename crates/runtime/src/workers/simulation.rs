//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), runs ticks
//! via [`game_core::GameEngine`], and broadcasts [`GameEvent`]s.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameEngine, GameError, GameState, PlayerCommand, Tick, TickReport, TurnError};
use tracing::{debug, error, info, warn};

use crate::api::{Result, RuntimeError};
use crate::events::GameEvent;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run one tick: monsters act, then the player command is applied.
    Tick {
        command: PlayerCommand,
        reply: oneshot::Sender<Result<TickReport>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    state: GameState,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
    /// Set once the player dies; later ticks are refused.
    game_over_at: Option<Tick>,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        info!(
            "SimulationWorker initialized: {}x{} grid, {} monsters, player at {}",
            state.grid.width(),
            state.grid.height(),
            state.monsters.len(),
            state.player.position()
        );

        Self {
            state,
            command_rx,
            event_tx,
            game_over_at: None,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        info!("SimulationWorker stopped at tick {}", self.state.tick);
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Tick { command, reply } => {
                let result = self.handle_tick(command);
                if reply.send(result).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_tick(&mut self, command: PlayerCommand) -> Result<TickReport> {
        if let Some(tick) = self.game_over_at {
            return Err(RuntimeError::GameOver { tick });
        }

        let result = GameEngine::new(&mut self.state).tick(command);
        match result {
            Ok(report) => {
                debug!(
                    target: "runtime::worker",
                    tick = %report.tick,
                    command = command.as_str(),
                    step = ?report.player_step,
                    narration = report.narration.len(),
                    "Tick completed"
                );
                self.publish_tick(&report);
                Ok(report)
            }
            Err(error) => {
                self.handle_turn_error(&error);
                Err(error.into())
            }
        }
    }

    fn publish_tick(&self, report: &TickReport) {
        for line in &report.narration {
            self.publish(GameEvent::Narration {
                tick: report.tick,
                line: line.clone(),
            });
        }
        self.publish(GameEvent::TickCompleted {
            report: report.clone(),
            state: Arc::new(self.state.clone()),
        });
    }

    fn handle_turn_error(&mut self, error: &TurnError) {
        match error {
            TurnError::PlayerDied {
                position,
                tick,
                narration,
            } => {
                warn!(
                    target: "runtime::worker",
                    tick = %tick,
                    position = %position,
                    "Player died, game over"
                );
                self.game_over_at = Some(*tick);
                for line in narration {
                    self.publish(GameEvent::Narration {
                        tick: *tick,
                        line: line.clone(),
                    });
                }
                self.publish(GameEvent::GameOver {
                    tick: *tick,
                    position: *position,
                    state: Arc::new(self.state.clone()),
                });
            }
            TurnError::Occupancy(_) => {
                error!(
                    target: "runtime::worker",
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "Tick aborted"
                );
            }
        }
    }

    fn publish(&self, event: GameEvent) {
        // No subscribers is not an error.
        let _ = self.event_tx.send(event);
    }
}
