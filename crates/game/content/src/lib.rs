//! Data-driven content definitions and loaders.
//!
//! This crate turns data files into ready-to-play game state:
//! - Level layouts (plain-text maps, one row per line)
//! - Monster catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! A default copy of each file is compiled in (see [`bundled`]) so a game can
//! start without any data directory.

pub mod bundled;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LevelLayout, LevelLoader, LoadResult, MonsterCatalog,
    MonsterLoader,
};
