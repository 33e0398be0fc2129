//! Headless terminal client for the roguelike runtime.
//!
//! The `rpg` binary is the composition root:
//!
//! ```text
//! ClientConfig (env) ──→ ContentFactory ──→ GameState
//!                                             │
//! LineProvider (stdin) ──→ Runtime ←──────────┘
//!                            │
//!                            └─→ GameEvent stream ──→ view (stdout)
//! ```
//!
//! Library modules are exposed so the pieces can be tested without a
//! terminal.

pub mod config;
pub mod input;
pub mod view;

pub use config::ClientConfig;
pub use input::{Input, LineProvider, StdinProvider, parse_input};
