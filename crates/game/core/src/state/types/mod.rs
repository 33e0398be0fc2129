pub mod actor;
pub mod common;
pub mod events;
pub mod grid;
pub mod tile;
pub mod world;

pub use actor::{ActorState, ActorTemplate};
pub use common::{EntityId, Position, Tick};
pub use events::EventLog;
pub use grid::{Grid, Neighbors};
pub use tile::Tile;
pub use world::MonsterMap;
