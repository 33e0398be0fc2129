//! Tick orchestration.
//!
//! The [`GameEngine`] is the only writer of [`GameState`] during play. One
//! call to [`GameEngine::tick`] runs the monster scheduler pass followed by
//! the player's single action, then advances the tick counter.

mod errors;
mod player;
mod turns;

pub use errors::TurnError;

use crate::action::{PlayerCommand, StepOutcome};
use crate::combat::AttackOutcome;
use crate::state::{GameState, Tick};

/// Summary of one completed tick.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Tick counter after the tick completed.
    pub tick: Tick,
    /// How the player's move resolved. `None` for non-move commands.
    pub player_step: Option<StepOutcome>,
    /// Narration emitted during the tick, oldest first. Also appended to the
    /// state's event log.
    pub narration: Vec<String>,
}

/// Drives ticks against a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    narration: Vec<String>,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self {
            state,
            narration: Vec::new(),
        }
    }

    /// Runs one full tick: every monster acts, then the player.
    ///
    /// Returns [`TurnError::PlayerDied`] as soon as the player's hitpoints
    /// reach zero; the state is left as it was at that moment and the tick
    /// counter is not advanced. The error carries the tick's narration.
    pub fn tick(&mut self, command: PlayerCommand) -> Result<TickReport, TurnError> {
        self.narration.clear();

        self.run_monsters()?;
        let player_step = self.player_action(command)?;

        self.state.tick = self.state.tick.next();
        Ok(TickReport {
            tick: self.state.tick,
            player_step,
            narration: std::mem::take(&mut self.narration),
        })
    }

    fn narrate(&mut self, line: String) {
        self.state.events.push(line.clone());
        self.narration.push(line);
    }

    fn narrate_exchange(&mut self, attacker: &str, defender: &str, outcome: &AttackOutcome) {
        self.narrate(format!("{attacker} attacks {defender} for {}", outcome.damage));
        if let Some(counter) = outcome.counter_damage {
            self.narrate(format!("{defender} attacks {attacker} for {counter}"));
        }
        if outcome.defender_died {
            self.narrate(format!("{defender} dies"));
        }
        if outcome.attacker_died {
            self.narrate(format!("{attacker} dies"));
        }
    }

    fn check_player_alive(&self) -> Result<(), TurnError> {
        if self.state.player.is_alive() {
            return Ok(());
        }
        Err(TurnError::PlayerDied {
            position: self.state.player.position,
            tick: self.state.tick,
            narration: self.narration.clone(),
        })
    }
}
