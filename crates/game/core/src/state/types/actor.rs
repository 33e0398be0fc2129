use super::{EntityId, Position};

/// Mutable state of a single actor (player or monster).
///
/// `position` can only be changed inside this crate: monster moves must go
/// through [`MonsterMap::move_monster`](super::MonsterMap::move_monster) so
/// the occupancy key never drifts from the stored position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub(crate) position: Position,
    pub hitpoints: i32,
    /// Flat damage dealt per attack.
    pub strength: i32,
    /// Action points gained per tick.
    pub speed: f64,
    /// Accumulated action points, spent in whole units.
    pub action_points: f64,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        position: Position,
        hitpoints: i32,
        strength: i32,
        speed: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            position,
            hitpoints,
            strength,
            speed,
            action_points: 0.0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.hitpoints > 0
    }

    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }
}

/// Static stat block used to spawn actors (player defaults, monster catalog).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub glyph: char,
    pub hitpoints: i32,
    pub strength: i32,
    pub speed: f64,
}

impl ActorTemplate {
    pub fn new(
        name: impl Into<String>,
        glyph: char,
        hitpoints: i32,
        strength: i32,
        speed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            glyph,
            hitpoints,
            strength,
            speed,
        }
    }

    /// Default player stat block.
    pub fn player() -> Self {
        Self::new("Hero", '@', 20, 20, 1.0)
    }

    /// Creates a fresh actor with an empty action point accumulator.
    pub fn spawn(&self, id: EntityId, position: Position) -> ActorState {
        ActorState::new(
            id,
            self.name.clone(),
            self.glyph,
            position,
            self.hitpoints,
            self.strength,
            self.speed,
        )
    }
}

impl Default for ActorTemplate {
    fn default() -> Self {
        Self::player()
    }
}
