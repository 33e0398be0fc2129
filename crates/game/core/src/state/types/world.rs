use std::collections::BTreeMap;

use super::{ActorState, EntityId, Position};
use crate::state::OccupancyError;

/// Authoritative mapping from grid position to the monster standing there.
///
/// Every stored monster's key equals its own `position`. The map never hands
/// out a way to change a monster's position other than [`move_monster`],
/// which rewrites the key and the field together.
///
/// [`move_monster`]: MonsterMap::move_monster
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterMap {
    by_position: BTreeMap<Position, ActorState>,
}

impl MonsterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a monster at its own position.
    pub fn insert(&mut self, monster: ActorState) -> Result<(), OccupancyError> {
        if let Some(occupant) = self.by_position.get(&monster.position) {
            return Err(OccupancyError::PositionOccupied {
                position: monster.position,
                occupant: occupant.id,
            });
        }

        self.by_position.insert(monster.position, monster);
        Ok(())
    }

    /// Removes and returns the monster at the position.
    pub fn remove(&mut self, position: Position) -> Option<ActorState> {
        self.by_position.remove(&position)
    }

    /// Relocates the monster at `from` to `to`, updating key and position together.
    ///
    /// Fails without touching the map when `from` is empty or `to` is taken.
    pub fn move_monster(&mut self, from: Position, to: Position) -> Result<(), OccupancyError> {
        if from == to {
            return if self.by_position.contains_key(&from) {
                Ok(())
            } else {
                Err(OccupancyError::MonsterNotFound { position: from })
            };
        }

        if let Some(occupant) = self.by_position.get(&to) {
            return Err(OccupancyError::PositionOccupied {
                position: to,
                occupant: occupant.id,
            });
        }

        let mut monster = self
            .by_position
            .remove(&from)
            .ok_or(OccupancyError::MonsterNotFound { position: from })?;
        monster.position = to;
        self.by_position.insert(to, monster);
        Ok(())
    }

    pub fn get(&self, position: Position) -> Option<&ActorState> {
        self.by_position.get(&position)
    }

    /// Mutable access to stats of the monster at the position.
    ///
    /// The position field is crate-private, so callers outside the crate
    /// cannot desynchronise the key.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut ActorState> {
        self.by_position.get_mut(&position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.by_position.contains_key(&position)
    }

    /// Finds the current position of a monster by id.
    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.by_position
            .values()
            .find(|monster| monster.id == id)
            .map(|monster| monster.position)
    }

    /// Occupied positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.by_position.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorState> {
        self.by_position.values()
    }

    pub fn len(&self) -> usize {
        self.by_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }

    /// True when every key matches the stored monster's position.
    pub fn is_consistent(&self) -> bool {
        self.by_position
            .iter()
            .all(|(key, monster)| *key == monster.position)
    }
}

impl FromIterator<ActorState> for MonsterMap {
    /// Collects monsters; later entries sharing a position are dropped.
    fn from_iter<I: IntoIterator<Item = ActorState>>(iter: I) -> Self {
        let mut map = Self::new();
        for monster in iter {
            let _ = map.insert(monster);
        }
        map
    }
}
