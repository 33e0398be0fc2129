//! Plain-text rendering of runtime events.
use std::io::Write;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use game_core::GameState;
use runtime::GameEvent;

/// Text for one event, or `None` when the event prints nothing.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Narration { line, .. } => Some(line.clone()),
        GameEvent::TickCompleted { state, .. } => Some(render_snapshot(state)),
        GameEvent::GameOver {
            tick,
            position,
            state,
        } => Some(format!(
            "{}\nYou died at {position} on tick {tick}.",
            render_snapshot(state)
        )),
    }
}

/// Map followed by a one-line status bar.
pub fn render_snapshot(state: &GameState) -> String {
    let mut out = state.render_ascii();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!(
        "tick {} | hp {} | monsters {}",
        state.tick,
        state.player.hitpoints,
        state.monsters.len()
    ));
    out
}

/// Prints events to stdout until the runtime closes the channel.
pub async fn print_events(mut events: broadcast::Receiver<GameEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                if let Some(text) = render_event(&event) {
                    let mut stdout = std::io::stdout().lock();
                    if writeln!(stdout, "{text}").is_err() {
                        break;
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Display fell behind, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_core::{ActorTemplate, EntityId, GameConfig, Grid, Position, Tick, Tile};

    use super::*;

    fn state() -> GameState {
        let grid = Grid::from_rows(vec![vec![Tile::Floor; 3]]).unwrap();
        let player = ActorTemplate::player().spawn(EntityId::PLAYER, Position::new(0, 0));
        let mut state = GameState::new(grid, player, &GameConfig::default());
        state
            .spawn_monster(&ActorTemplate::new("Rat", 'R', 5, 0, 1.0), Position::new(2, 0))
            .unwrap();
        state
    }

    #[test]
    fn snapshot_ends_with_status_bar() {
        let text = render_snapshot(&state());
        let last = text.lines().last().unwrap();
        assert_eq!(last, "tick 0 | hp 20 | monsters 1");
        assert!(text.lines().next().unwrap().contains('@'));
    }

    #[test]
    fn narration_prints_verbatim() {
        let event = GameEvent::Narration {
            tick: Tick(1),
            line: "Rat dies".to_string(),
        };
        assert_eq!(render_event(&event).as_deref(), Some("Rat dies"));
    }

    #[test]
    fn game_over_mentions_death_position() {
        let event = GameEvent::GameOver {
            tick: Tick(4),
            position: Position::new(0, 0),
            state: Arc::new(state()),
        };
        let text = render_event(&event).unwrap();
        assert!(text.ends_with("You died at (0, 0) on tick 4."));
    }
}
