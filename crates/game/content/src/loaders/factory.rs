//! Content factory for building a playable state from data files.

use std::path::{Path, PathBuf};

use game_core::{EntityId, GameConfig, GameState};

use crate::bundled;
use crate::loaders::{
    ConfigLoader, LevelLayout, LevelLoader, LoadResult, MonsterCatalog, MonsterLoader,
};

/// Content factory that resolves each data file from disk or the bundled
/// defaults.
///
/// ```text
/// level     ── path ─► LevelLoader::load    ─┐
///           └─ none ─► bundled::LEVEL        │
/// monsters  ── path ─► MonsterLoader::load   ├─► GameState
///           └─ none ─► bundled::MONSTERS     │
/// config    ── path ─► ConfigLoader::load    │
///           └─ none ─► bundled::CONFIG      ─┘
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentFactory {
    level_path: Option<PathBuf>,
    monsters_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl ContentFactory {
    /// Factory that uses only the bundled content.
    pub fn bundled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, path: impl Into<PathBuf>) -> Self {
        self.level_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_monsters(mut self, path: impl Into<PathBuf>) -> Self {
        self.monsters_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn level_path(&self) -> Option<&Path> {
        self.level_path.as_deref()
    }

    pub fn monsters_path(&self) -> Option<&Path> {
        self.monsters_path.as_deref()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load game configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path),
            None => ConfigLoader::parse(bundled::CONFIG),
        }
    }

    /// Load the monster catalog.
    pub fn load_monsters(&self) -> LoadResult<MonsterCatalog> {
        match &self.monsters_path {
            Some(path) => MonsterLoader::load(path),
            None => MonsterLoader::parse(bundled::MONSTERS),
        }
    }

    /// Load the level layout, resolving monster glyphs against `catalog`.
    pub fn load_level(&self, catalog: &MonsterCatalog) -> LoadResult<LevelLayout> {
        match &self.level_path {
            Some(path) => LevelLoader::load(path, catalog),
            None => LevelLoader::parse(bundled::LEVEL, catalog),
        }
    }

    /// Loads every file and assembles the initial state.
    pub fn build_state(&self) -> LoadResult<GameState> {
        let config = self.load_config()?;
        let catalog = self.load_monsters()?;
        let layout = self.load_level(&catalog)?;
        Self::assemble(layout, &config)
    }

    /// Spawns the player and every monster of a parsed level.
    pub fn assemble(layout: LevelLayout, config: &GameConfig) -> LoadResult<GameState> {
        let player = config.player.spawn(EntityId::PLAYER, layout.player_spawn);
        let mut state = GameState::new(layout.grid, player, config);

        for (template, position) in &layout.monster_spawns {
            state.spawn_monster(template, *position).map_err(|e| {
                anyhow::anyhow!("Failed to spawn {} at {}: {}", template.name, position, e)
            })?;
        }
        Ok(state)
    }
}
