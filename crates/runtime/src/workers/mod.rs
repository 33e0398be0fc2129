//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game state and executes ticks.

mod simulation;

pub use simulation::{Command, SimulationWorker};
