//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use game_content::ContentFactory;
use runtime::RuntimeConfig;

/// Content locations and runtime tuning for one client session.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Level map file; the bundled level when unset.
    pub level_path: Option<PathBuf>,
    /// RON monster catalog; the built-in catalog when unset.
    pub monsters_path: Option<PathBuf>,
    /// TOML game config; the bundled config when unset.
    pub config_path: Option<PathBuf>,
    pub runtime: RuntimeConfig,
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RPG_LEVEL_PATH` - Level map file (default: bundled level)
    /// - `RPG_MONSTERS_PATH` - Monster catalog in RON (default: built-in)
    /// - `RPG_CONFIG_PATH` - Game config in TOML (default: bundled)
    /// - `RPG_COMMAND_BUFFER` - Command channel capacity (default: 32)
    /// - `RPG_EVENT_BUFFER` - Event broadcast capacity (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            level_path: read_path(&lookup, "RPG_LEVEL_PATH"),
            monsters_path: read_path(&lookup, "RPG_MONSTERS_PATH"),
            config_path: read_path(&lookup, "RPG_CONFIG_PATH"),
            runtime: RuntimeConfig::default(),
        };

        if let Some(capacity) = read_parsed::<usize>(&lookup, "RPG_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_parsed::<usize>(&lookup, "RPG_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Content factory honoring the configured overrides.
    pub fn content_factory(&self) -> ContentFactory {
        let mut factory = ContentFactory::bundled();
        if let Some(path) = &self.level_path {
            factory = factory.with_level(path);
        }
        if let Some(path) = &self.monsters_path {
            factory = factory.with_monsters(path);
        }
        if let Some(path) = &self.config_path {
            factory = factory.with_config(path);
        }
        factory
    }
}

fn read_path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
