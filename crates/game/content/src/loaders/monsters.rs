//! Monster catalog loader.
//!
//! A catalog maps each map glyph to the template monsters spawn from.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::ActorTemplate;
use serde::Deserialize;

use crate::loaders::level::RESERVED_GLYPHS;
use crate::loaders::{LoadResult, read_file};

/// Monster templates keyed by the glyph that places them on a map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonsterCatalog {
    templates: BTreeMap<char, ActorTemplate>,
}

impl MonsterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in catalog: Rat (`R`) and Spider (`S`).
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for template in [
            ActorTemplate::new("Rat", 'R', 500, 0, 1.5),
            ActorTemplate::new("Spider", 'S', 1000, 0, 1.0),
        ] {
            catalog.templates.insert(template.glyph, template);
        }
        catalog
    }

    /// Adds a template. Glyphs used by tiles or the player, and duplicates,
    /// are rejected.
    pub fn insert(&mut self, template: ActorTemplate) -> LoadResult<()> {
        if RESERVED_GLYPHS.contains(&template.glyph) {
            anyhow::bail!(
                "Monster '{}' uses reserved glyph {:?}",
                template.name,
                template.glyph
            );
        }
        if let Some(existing) = self.templates.get(&template.glyph) {
            anyhow::bail!(
                "Monsters '{}' and '{}' share glyph {:?}",
                existing.name,
                template.name,
                template.glyph
            );
        }
        self.templates.insert(template.glyph, template);
        Ok(())
    }

    pub fn get(&self, glyph: char) -> Option<&ActorTemplate> {
        self.templates.get(&glyph)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// One catalog entry as written in a RON file.
///
/// `strength` defaults to 0 and `speed` to one action point per tick.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct MonsterEntry {
    name: String,
    glyph: char,
    hitpoints: i32,
    #[serde(default)]
    strength: i32,
    #[serde(default = "default_speed")]
    speed: f64,
}

fn default_speed() -> f64 {
    1.0
}

impl From<MonsterEntry> for ActorTemplate {
    fn from(entry: MonsterEntry) -> Self {
        ActorTemplate::new(
            entry.name,
            entry.glyph,
            entry.hitpoints,
            entry.strength,
            entry.speed,
        )
    }
}

/// Loader for monster catalogs from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Parses a catalog from RON text.
    ///
    /// RON format: a list of `(name, glyph, hitpoints, strength?, speed?)` records.
    pub fn parse(content: &str) -> LoadResult<MonsterCatalog> {
        let entries: Vec<MonsterEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        let mut catalog = MonsterCatalog::new();
        for entry in entries {
            catalog.insert(entry.into())?;
        }
        Ok(catalog)
    }

    /// Load a monster catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<MonsterCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }
}
