use std::collections::HashMap;

use super::{Path, PriorityQueue};
use crate::state::{Grid, Position};

/// Priority given to the start node.
///
/// The seed is always popped alone before any neighbour is queued, so its
/// value has no influence on the search.
const START_PRIORITY: i32 = 0;

/// Uniform cost of one orthogonal step.
const STEP_COST: i32 = 1;

/// Admissible heuristic for 4-connected unit-cost grids.
///
/// Saturates at `i32::MAX` for coordinates far outside any grid.
pub fn manhattan(from: Position, to: Position) -> i32 {
    i32::try_from(from.manhattan_distance(to)).unwrap_or(i32::MAX)
}

/// A* search from `start` to `goal` over walkable cells.
///
/// Returns the shortest path including both endpoints, or `None` when the
/// goal cannot be reached. Nodes may be queued several times; stale entries
/// are harmless because a node's neighbours are only re-relaxed when a
/// strictly cheaper cost is found.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Option<Path> {
    if start != goal && !grid.can_walk(goal) {
        return None;
    }

    let mut frontier = PriorityQueue::with_capacity(8);
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut cost_so_far: HashMap<Position, i32> = HashMap::new();

    frontier.push(start, START_PRIORITY);
    came_from.insert(start, start);
    cost_so_far.insert(start, 0);

    while let Some(current) = frontier.pop() {
        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }

        let current_cost = cost_so_far.get(&current).copied().unwrap_or(0);
        for next in grid.neighbors(current) {
            let new_cost = current_cost + STEP_COST;
            let improves = cost_so_far
                .get(&next)
                .is_none_or(|&known| new_cost < known);
            if !improves {
                continue;
            }

            cost_so_far.insert(next, new_cost);
            frontier.push(next, new_cost.saturating_add(manhattan(next, goal)));
            came_from.insert(next, current);
        }
    }

    None
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Path {
    let mut positions = vec![goal];
    let mut current = goal;

    while current != start {
        match came_from.get(&current) {
            Some(&previous) => current = previous,
            None => break,
        }
        positions.push(current);
    }

    positions.reverse();
    Path::new(positions)
}
