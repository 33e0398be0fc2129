//! Default content compiled into the binary.

/// Starter level used when no level path is configured.
pub const LEVEL: &str = include_str!("../data/level_1.map");

/// Default monster catalog (RON).
pub const MONSTERS: &str = include_str!("../data/monsters.ron");

/// Default game configuration (TOML).
pub const CONFIG: &str = include_str!("../data/config.toml");
