//! Action-point scheduler for monsters.
//!
//! Every tick each live monster gains `speed` action points, asks the
//! pathfinder for a fresh route to the player and spends whole points one
//! step at a time along it. A step onto an occupied cell turns into an
//! attack and ends the monster's movement for the tick.

use crate::action::StepOutcome;
use crate::combat;
use crate::pathfinding::find_path;
use crate::state::{EntityId, OccupancyError, Position};

use super::{GameEngine, TurnError};

/// Action points consumed by one step along the path.
pub const STEP_COST: f64 = 1.0;

impl<'a> GameEngine<'a> {
    /// Runs the scheduler over every live monster in ascending position order.
    ///
    /// Monsters killed earlier in the pass are skipped.
    pub fn run_monsters(&mut self) -> Result<(), TurnError> {
        let roster: Vec<(EntityId, Position)> = self
            .state
            .monsters
            .iter()
            .map(|monster| (monster.id, monster.position))
            .collect();

        for (id, position) in roster {
            let still_here = self
                .state
                .monsters
                .get(position)
                .is_some_and(|monster| monster.id == id);
            if still_here {
                self.update_monster(position)?;
            }
        }
        Ok(())
    }

    /// Accrues action points for the monster at `from` and walks it toward the player.
    pub fn update_monster(&mut self, from: Position) -> Result<(), TurnError> {
        let monster = self
            .state
            .monsters
            .get_mut(from)
            .ok_or(OccupancyError::MonsterNotFound { position: from })?;
        monster.action_points += monster.speed;

        let Some(path) = find_path(&self.state.grid, from, self.state.player.position) else {
            return Ok(());
        };

        let mut current = from;
        for next in path.iter().skip(1).copied() {
            let Some(monster) = self.state.monsters.get_mut(current) else {
                break;
            };
            if monster.action_points < STEP_COST {
                break;
            }
            monster.action_points -= STEP_COST;

            match self.step_monster(current, next)? {
                StepOutcome::Moved => current = next,
                // Later path cells are no longer adjacent once a step fails.
                _ => break,
            }
        }
        Ok(())
    }

    /// Resolves a single monster step: attack an occupant or relocate.
    fn step_monster(&mut self, from: Position, to: Position) -> Result<StepOutcome, TurnError> {
        if self.state.player.position == to {
            self.monster_attacks_player(from)?;
            return Ok(StepOutcome::Attacked);
        }
        if self.state.monsters.contains(to) {
            self.monster_attacks_monster(from, to)?;
            return Ok(StepOutcome::Attacked);
        }
        if !self.state.grid.can_walk(to) {
            return Ok(StepOutcome::Bumped);
        }

        self.state.monsters.move_monster(from, to)?;
        Ok(StepOutcome::Moved)
    }

    fn monster_attacks_player(&mut self, from: Position) -> Result<(), TurnError> {
        let mut attacker = self
            .state
            .monsters
            .remove(from)
            .ok_or(OccupancyError::MonsterNotFound { position: from })?;

        let outcome = combat::attack(&mut attacker, &mut self.state.player);
        let defender = self.state.player.name.clone();
        self.narrate_exchange(&attacker.name, &defender, &outcome);

        if attacker.is_alive() {
            self.state.monsters.insert(attacker)?;
        }
        self.check_player_alive()
    }

    fn monster_attacks_monster(&mut self, from: Position, to: Position) -> Result<(), TurnError> {
        let mut attacker = self
            .state
            .monsters
            .remove(from)
            .ok_or(OccupancyError::MonsterNotFound { position: from })?;
        let mut defender = self
            .state
            .monsters
            .remove(to)
            .ok_or(OccupancyError::MonsterNotFound { position: to })?;

        let outcome = combat::attack(&mut attacker, &mut defender);
        self.narrate_exchange(&attacker.name, &defender.name, &outcome);

        for survivor in [attacker, defender] {
            if survivor.is_alive() {
                self.state.monsters.insert(survivor)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{ActorTemplate, GameState, Grid, Tile};

    fn corridor(len: u32) -> Grid {
        Grid::open(1, len).unwrap()
    }

    fn state_with(grid: Grid, player: Position) -> GameState {
        let player = ActorTemplate::player().spawn(EntityId::PLAYER, player);
        GameState::new(grid, player, &GameConfig::default())
    }

    fn harmless(speed: f64) -> ActorTemplate {
        ActorTemplate::new("Rat", 'R', 500, 0, speed)
    }

    #[test]
    fn fast_monster_walks_two_cells() {
        let mut state = state_with(corridor(4), Position::new(0, 3));
        let id = state
            .spawn_monster(&harmless(2.0), Position::new(0, 0))
            .unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        let position = state.monsters.position_of(id).unwrap();
        assert_eq!(position, Position::new(0, 2));
        assert_eq!(state.monsters.get(position).unwrap().action_points, 0.0);
    }

    #[test]
    fn fractional_speed_accumulates() {
        let mut state = state_with(corridor(6), Position::new(0, 5));
        let id = state
            .spawn_monster(&harmless(0.5), Position::new(0, 0))
            .unwrap();
        let mut engine = GameEngine::new(&mut state);

        engine.run_monsters().unwrap();
        engine.run_monsters().unwrap();

        let position = state.monsters.position_of(id).unwrap();
        assert_eq!(position, Position::new(0, 1));
        assert_eq!(state.monsters.get(position).unwrap().action_points, 0.0);
    }

    #[test]
    fn unreachable_player_still_accrues_points() {
        let grid = Grid::from_rows(vec![vec![Tile::Floor, Tile::Wall, Tile::Floor]]).unwrap();
        let mut state = state_with(grid, Position::new(2, 0));
        state
            .spawn_monster(&harmless(1.0), Position::new(0, 0))
            .unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        let monster = state.monsters.get(Position::new(0, 0)).unwrap();
        assert_eq!(monster.action_points, 1.0);
    }

    #[test]
    fn adjacent_monster_attacks_instead_of_moving() {
        let mut state = state_with(corridor(2), Position::new(0, 1));
        let biter = ActorTemplate::new("Rat", 'R', 500, 3, 1.0);
        state.spawn_monster(&biter, Position::new(0, 0)).unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        let monster = state.monsters.get(Position::new(0, 0)).unwrap();
        assert_eq!(state.player.hitpoints, 17);
        assert_eq!(state.player.position(), Position::new(0, 1));
        // One point for the step, one for the strike.
        assert_eq!(monster.action_points, -1.0);
        assert_eq!(monster.hitpoints, 480);
    }

    #[test]
    fn attack_stops_remaining_movement() {
        let mut state = state_with(corridor(2), Position::new(0, 1));
        state
            .spawn_monster(&harmless(3.0), Position::new(0, 0))
            .unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        let monster = state.monsters.get(Position::new(0, 0)).unwrap();
        assert_eq!(monster.action_points, 1.0);
    }

    #[test]
    fn monster_killed_by_counter_strike_is_removed() {
        let mut state = state_with(corridor(2), Position::new(0, 1));
        let weak = ActorTemplate::new("Bat", 'B', 5, 1, 1.0);
        state.spawn_monster(&weak, Position::new(0, 0)).unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        assert!(state.monsters.is_empty());
        assert_eq!(state.player.hitpoints, 19);
        assert_eq!(state.events.latest(), Some("Bat dies"));
    }

    #[test]
    fn blocked_monster_fights_the_one_in_front() {
        let mut state = state_with(corridor(4), Position::new(0, 3));
        let front = ActorTemplate::new("Slug", 's', 10, 0, 0.0);
        let back = ActorTemplate::new("Rat", 'R', 500, 4, 1.0);
        state.spawn_monster(&back, Position::new(0, 0)).unwrap();
        state.spawn_monster(&front, Position::new(0, 1)).unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        assert_eq!(state.monsters.get(Position::new(0, 0)).unwrap().name, "Rat");
        assert_eq!(state.monsters.get(Position::new(0, 1)).unwrap().hitpoints, 6);
        assert!(state.monsters.is_consistent());
    }

    #[test]
    fn monster_killed_during_pass_is_skipped() {
        let mut state = state_with(corridor(5), Position::new(0, 4));
        let killer = ActorTemplate::new("Ogre", 'O', 500, 50, 1.0);
        let victim = ActorTemplate::new("Rat", 'R', 5, 0, 1.0);
        state.spawn_monster(&killer, Position::new(0, 0)).unwrap();
        let victim_id = state.spawn_monster(&victim, Position::new(0, 1)).unwrap();

        GameEngine::new(&mut state).run_monsters().unwrap();

        assert_eq!(state.monsters.position_of(victim_id), None);
        assert_eq!(state.monsters.len(), 1);
        assert!(state.monsters.contains(Position::new(0, 0)));
    }

    #[test]
    fn missing_monster_is_an_internal_error() {
        let mut state = state_with(corridor(2), Position::new(0, 1));

        let error = GameEngine::new(&mut state)
            .update_monster(Position::new(0, 0))
            .unwrap_err();

        assert_eq!(
            error,
            TurnError::Occupancy(OccupancyError::MonsterNotFound {
                position: Position::new(0, 0)
            })
        );
    }
}
