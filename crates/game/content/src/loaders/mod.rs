//! Content loaders for reading game data from files.
//!
//! Every loader offers `parse` for in-memory text and `load` for a file path,
//! so bundled defaults and user files go through the same code.

pub mod config;
pub mod factory;
pub mod level;
pub mod monsters;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use level::{LevelLayout, LevelLoader};
pub use monsters::{MonsterCatalog, MonsterLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
