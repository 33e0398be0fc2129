//! Grid search primitives.
//!
//! - [`PriorityQueue`]: binary min-heap of positions keyed by integer priority
//! - [`find_path`]: A* with unit step cost and Manhattan heuristic
//! - [`Path`]: ordered positions from start to goal, both inclusive

mod astar;
mod queue;

pub use astar::{find_path, manhattan};
pub use queue::{PriorityQueue, QueueEntry};

use crate::state::Position;

/// Route produced by a single search, start and goal included.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Position>);

impl Path {
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    /// Number of positions, endpoints included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (edges) along the path.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Position at `index`; index 0 is the start.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }
}
