use arrayvec::ArrayVec;

use super::{Position, Tile};
use crate::state::GridError;

/// Walkable neighbours of a cell, at most one per cardinal direction.
pub type Neighbors = ArrayVec<Position, 4>;

/// Rectangular tile layout of a level.
///
/// Tiles are stored row-major. Dimensions are fixed at construction; the only
/// runtime mutation is a closed door opening.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from a row-major tile buffer.
    pub fn new(width: u32, height: u32, tiles: Vec<Tile>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }

        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }

        if let Some(index) = tiles.iter().position(|tile| *tile == Tile::Pending) {
            let position = Position::new(
                (index % width as usize) as i32,
                (index / width as usize) as i32,
            );
            return Err(GridError::PendingTile { position });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Builds a grid from possibly jagged rows, padding short rows with
    /// [`Tile::Blank`] up to the longest row.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Tile::Blank);
            tiles.extend(row);
        }

        Self::new(width as u32, height as u32, tiles)
    }

    /// Builds an all-floor grid, mostly useful for tests and scripted scenarios.
    pub fn open(width: u32, height: u32) -> Result<Self, GridError> {
        Self::new(
            width,
            height,
            vec![Tile::Floor; width as usize * height as usize],
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True iff the position lies inside the grid rectangle.
    pub fn in_range(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    /// Tile at the position, or `None` when out of range.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Whether an actor may step onto the position.
    pub fn can_walk(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_walkable)
    }

    /// Walkable 4-neighbours in the fixed order right, left, up, down.
    ///
    /// The order drives A* tie-breaking and must stay stable.
    pub fn neighbors(&self, position: Position) -> Neighbors {
        let candidates = [
            position.offset(1, 0),
            position.offset(-1, 0),
            position.offset(0, -1),
            position.offset(0, 1),
        ];

        candidates
            .into_iter()
            .filter(|candidate| self.can_walk(*candidate))
            .collect()
    }

    /// Opens a closed door at the position. Returns true if a door opened.
    pub fn check_door(&mut self, position: Position) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };

        if self.tiles[index].is_openable() {
            self.tiles[index] = Tile::OpenDoor;
            true
        } else {
            false
        }
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width as usize)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.in_range(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }
}
