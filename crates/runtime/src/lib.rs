//! Runtime orchestration for the deterministic game simulation.
//!
//! This crate wires together the input provider abstraction and the
//! simulation worker into a cohesive runtime API. Consumers embed
//! [`Runtime`] to drive ticks, subscribe to events, and query the world
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines what the simulation broadcasts after each tick
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    InputProvider, Result, RuntimeError, RuntimeHandle, ScriptedProvider, WaitProvider,
};
pub use events::GameEvent;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, SessionEnd};
