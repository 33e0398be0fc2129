//! Plain-text level loader.
//!
//! One map row per line:
//!
//! | glyph        | meaning                         |
//! |--------------|---------------------------------|
//! | space, tab   | blank (outside the dungeon)     |
//! | `#`          | wall                            |
//! | `\|`         | closed door                     |
//! | `/`          | open door                       |
//! | `.`          | floor                           |
//! | `@`          | player spawn                    |
//! | catalog glyph| monster spawn                   |
//!
//! Actor cells are parsed as [`Tile::Pending`] and resolved to floor before
//! the grid is built. Short rows are padded with blank tiles.

use std::path::Path;

use game_core::{ActorTemplate, Grid, Position, Tile};

use crate::loaders::{LoadResult, MonsterCatalog, read_file};

/// Glyph marking the player spawn.
pub const PLAYER_GLYPH: char = '@';

/// Glyphs that cannot be claimed by a monster catalog.
pub(crate) const RESERVED_GLYPHS: [char; 7] = [' ', '\t', '#', '|', '/', '.', PLAYER_GLYPH];

/// A parsed level: finished grid plus spawn points.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelLayout {
    pub grid: Grid,
    pub player_spawn: Position,
    /// Monster spawns in reading order (row by row, left to right).
    pub monster_spawns: Vec<(ActorTemplate, Position)>,
}

/// Loader for text level files.
pub struct LevelLoader;

impl LevelLoader {
    /// Parses level text against a monster catalog.
    pub fn parse(content: &str, catalog: &MonsterCatalog) -> LoadResult<LevelLayout> {
        let mut player_spawn = None;
        let mut monster_spawns = Vec::new();
        let mut rows = Vec::new();

        for (y, line) in content.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, glyph) in line.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let tile = match glyph {
                    ' ' | '\t' => Tile::Blank,
                    '#' => Tile::Wall,
                    '|' => Tile::ClosedDoor,
                    '/' => Tile::OpenDoor,
                    '.' => Tile::Floor,
                    PLAYER_GLYPH => {
                        if let Some(first) = player_spawn.replace(position) {
                            anyhow::bail!(
                                "Second player spawn at line {}, column {} (first at {})",
                                y + 1,
                                x + 1,
                                first
                            );
                        }
                        Tile::Pending
                    }
                    other => match catalog.get(other) {
                        Some(template) => {
                            monster_spawns.push((template.clone(), position));
                            Tile::Pending
                        }
                        None => anyhow::bail!(
                            "Invalid character {:?} in map at line {}, column {}",
                            other,
                            y + 1,
                            x + 1
                        ),
                    },
                };
                row.push(tile);
            }
            rows.push(row);
        }

        let player_spawn =
            player_spawn.ok_or_else(|| anyhow::anyhow!("Map has no player spawn ('@')"))?;

        for tile in rows.iter_mut().flatten() {
            if *tile == Tile::Pending {
                *tile = Tile::Floor;
            }
        }
        let grid = Grid::from_rows(rows)
            .map_err(|e| anyhow::anyhow!("Invalid map layout: {}", e))?;

        Ok(LevelLayout {
            grid,
            player_spawn,
            monster_spawns,
        })
    }

    /// Load a level from a text file.
    pub fn load(path: &Path, catalog: &MonsterCatalog) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        Self::parse(&content, catalog).map_err(|e| e.context(format!("in {}", path.display())))
    }
}
