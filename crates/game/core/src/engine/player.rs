use crate::action::{CardinalDirection, PlayerCommand, StepOutcome};
use crate::combat;
use crate::pathfinding::find_path;
use crate::state::{OccupancyError, Position};

use super::{GameEngine, TurnError};

impl<'a> GameEngine<'a> {
    /// Applies the player's command for this tick.
    ///
    /// Returns the step outcome for [`PlayerCommand::Move`] and `None` for
    /// commands that do not move the player.
    pub fn player_action(
        &mut self,
        command: PlayerCommand,
    ) -> Result<Option<StepOutcome>, TurnError> {
        match command {
            PlayerCommand::Move(direction) => self.move_player(direction).map(Some),
            PlayerCommand::Wait => Ok(None),
            PlayerCommand::FindPath { goal } => {
                self.state.debug_path = find_path(&self.state.grid, self.state.player.position, goal);
                Ok(None)
            }
        }
    }

    /// Steps the player one cell, attacking a monster in the way or bumping
    /// a door open when the target is not walkable.
    pub fn move_player(&mut self, direction: CardinalDirection) -> Result<StepOutcome, TurnError> {
        let target = self.state.player.position.step(direction);

        if !self.state.grid.can_walk(target) {
            if self.state.grid.check_door(target) {
                let line = format!("{} opens the door", self.state.player.name);
                self.narrate(line);
                return Ok(StepOutcome::OpenedDoor);
            }
            return Ok(StepOutcome::Bumped);
        }

        if self.state.monsters.contains(target) {
            self.player_attacks(target)?;
            return Ok(StepOutcome::Attacked);
        }

        self.state.player.position = target;
        Ok(StepOutcome::Moved)
    }

    fn player_attacks(&mut self, target: Position) -> Result<(), TurnError> {
        let mut defender = self
            .state
            .monsters
            .remove(target)
            .ok_or(OccupancyError::MonsterNotFound { position: target })?;

        let outcome = combat::attack(&mut self.state.player, &mut defender);
        let attacker = self.state.player.name.clone();
        self.narrate_exchange(&attacker, &defender.name, &outcome);

        if defender.is_alive() {
            self.state.monsters.insert(defender)?;
        }
        self.check_player_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{ActorTemplate, EntityId, GameState, Grid, Tile};

    fn state(rows: Vec<Vec<Tile>>, player: Position) -> GameState {
        let grid = Grid::from_rows(rows).unwrap();
        let player = ActorTemplate::player().spawn(EntityId::PLAYER, player);
        GameState::new(grid, player, &GameConfig::default())
    }

    fn floor(width: usize) -> Vec<Vec<Tile>> {
        vec![vec![Tile::Floor; width]]
    }

    #[test]
    fn moves_onto_free_floor() {
        let mut state = state(floor(3), Position::new(0, 0));

        let outcome = GameEngine::new(&mut state)
            .move_player(CardinalDirection::Right)
            .unwrap();

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.player.position(), Position::new(1, 0));
    }

    #[test]
    fn walls_and_edges_are_no_ops() {
        let mut state = state(
            vec![vec![Tile::Floor, Tile::Wall]],
            Position::new(0, 0),
        );
        let mut engine = GameEngine::new(&mut state);

        assert_eq!(engine.move_player(CardinalDirection::Right).unwrap(), StepOutcome::Bumped);
        assert_eq!(engine.move_player(CardinalDirection::Left).unwrap(), StepOutcome::Bumped);
        assert_eq!(engine.move_player(CardinalDirection::Up).unwrap(), StepOutcome::Bumped);

        assert_eq!(state.player.position(), Position::new(0, 0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn bumping_a_closed_door_opens_it() {
        let mut state = state(
            vec![vec![Tile::Floor, Tile::ClosedDoor, Tile::Floor]],
            Position::new(0, 0),
        );
        let mut engine = GameEngine::new(&mut state);

        let first = engine.move_player(CardinalDirection::Right).unwrap();
        let second = engine.move_player(CardinalDirection::Right).unwrap();

        assert_eq!(first, StepOutcome::OpenedDoor);
        assert_eq!(second, StepOutcome::Moved);
        assert_eq!(state.grid.tile(Position::new(1, 0)), Some(Tile::OpenDoor));
        assert_eq!(state.player.position(), Position::new(1, 0));
        assert_eq!(state.events.latest(), Some("Hero opens the door"));
    }

    #[test]
    fn killing_blow_removes_monster() {
        let mut state = state(floor(2), Position::new(0, 0));
        let rat = ActorTemplate::new("Rat", 'R', 20, 5, 1.0);
        state.spawn_monster(&rat, Position::new(1, 0)).unwrap();

        let outcome = GameEngine::new(&mut state)
            .move_player(CardinalDirection::Right)
            .unwrap();

        assert_eq!(outcome, StepOutcome::Attacked);
        assert!(state.monsters.is_empty());
        assert_eq!(state.player.position(), Position::new(0, 0));
        assert_eq!(state.player.hitpoints, 20);
        assert_eq!(state.player.action_points, -1.0);
    }

    #[test]
    fn counter_strike_can_kill_the_player() {
        let mut state = state(floor(2), Position::new(0, 0));
        state.player.hitpoints = 4;
        let spider = ActorTemplate::new("Spider", 'S', 1000, 4, 1.0);
        state.spawn_monster(&spider, Position::new(1, 0)).unwrap();

        let error = GameEngine::new(&mut state)
            .move_player(CardinalDirection::Right)
            .unwrap_err();

        assert!(error.is_game_over());
        assert_eq!(state.monsters.get(Position::new(1, 0)).unwrap().hitpoints, 980);
    }

    #[test]
    fn find_path_sets_debug_overlay() {
        let mut state = state(floor(4), Position::new(0, 0));
        let mut engine = GameEngine::new(&mut state);

        engine
            .player_action(PlayerCommand::FindPath {
                goal: Position::new(3, 0),
            })
            .unwrap();
        assert_eq!(state.debug_path.as_ref().map(|p| p.steps()), Some(3));
        assert_eq!(state.render_ascii(), "@***\n");

        GameEngine::new(&mut state)
            .player_action(PlayerCommand::FindPath {
                goal: Position::new(9, 9),
            })
            .unwrap();
        assert_eq!(state.debug_path, None);
    }
}
