/// Classification of a single grid cell.
///
/// `Pending` only exists while a level is being assembled (cells under an
/// actor glyph); the [`Grid`](super::Grid) constructor rejects it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tile {
    Wall,
    Floor,
    ClosedDoor,
    OpenDoor,
    #[default]
    Blank,
    Pending,
}

impl Tile {
    /// Whether an actor may stand on or pass through this tile.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall | Tile::ClosedDoor | Tile::Blank)
    }

    /// Whether bumping this tile turns it into something else.
    pub const fn is_openable(self) -> bool {
        matches!(self, Tile::ClosedDoor)
    }

    /// Character used by level files and text snapshots.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::ClosedDoor => '|',
            Tile::OpenDoor => '/',
            Tile::Blank => ' ',
            Tile::Pending => '?',
        }
    }
}
