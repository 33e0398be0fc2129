//! Line-oriented player input.
//!
//! Each line is one command:
//!
//! | Input | Command |
//! |---|---|
//! | `w` `a` `s` `d`, `up` `left` `down` `right` | move |
//! | `path X Y` | debug path search to `(X, Y)` |
//! | `wait`, `.` or an empty line | wait |
//! | `quit`, `q` or end of input | quit |
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::warn;

use game_core::{CardinalDirection, GameState, PlayerCommand, Position};
use runtime::{InputProvider, RuntimeError};

/// One parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(PlayerCommand),
    Quit,
}

pub fn parse_input(line: &str) -> Result<Input> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Input::Command(PlayerCommand::Wait));
    };

    let input = match head.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Input::Quit,
        "." | "wait" => Input::Command(PlayerCommand::Wait),
        "w" => step(CardinalDirection::Up),
        "a" => step(CardinalDirection::Left),
        "s" => step(CardinalDirection::Down),
        "d" => step(CardinalDirection::Right),
        "path" => {
            let x = parse_coordinate(words.next(), "x")?;
            let y = parse_coordinate(words.next(), "y")?;
            Input::Command(PlayerCommand::FindPath {
                goal: Position::new(x, y),
            })
        }
        other => other
            .parse::<CardinalDirection>()
            .map(step)
            .map_err(|_| anyhow!("unknown command '{other}'"))?,
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument '{extra}'");
    }
    Ok(input)
}

fn parse_coordinate(word: Option<&str>, axis: &str) -> Result<i32> {
    let word = word.with_context(|| format!("path needs an {axis} coordinate"))?;
    word.parse()
        .with_context(|| format!("invalid {axis} coordinate '{word}'"))
}

fn step(direction: CardinalDirection) -> Input {
    Input::Command(PlayerCommand::Move(direction))
}

/// Reads commands line by line from any async reader.
///
/// Unparseable lines are logged and skipped.
pub struct LineProvider<R> {
    reader: Mutex<R>,
}

/// Provider reading from the process's standard input.
pub type StdinProvider = LineProvider<BufReader<Stdin>>;

impl StdinProvider {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> LineProvider<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

#[async_trait]
impl<R> InputProvider for LineProvider<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_command(&self, _state: &GameState) -> runtime::Result<Option<PlayerCommand>> {
        let mut reader = self.reader.lock().await;
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .await
                .map_err(RuntimeError::Provider)?;
            if read == 0 {
                return Ok(None);
            }

            match parse_input(&line) {
                Ok(Input::Command(command)) => return Ok(Some(command)),
                Ok(Input::Quit) => return Ok(None),
                Err(error) => warn!("Ignoring input {:?}: {:#}", line.trim_end(), error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ActorTemplate, EntityId, GameConfig, Grid, Tile};

    use super::*;

    fn state() -> GameState {
        let grid = Grid::from_rows(vec![vec![Tile::Floor; 2]]).unwrap();
        let player = ActorTemplate::player().spawn(EntityId::PLAYER, Position::new(0, 0));
        GameState::new(grid, player, &GameConfig::default())
    }

    fn moves(direction: CardinalDirection) -> Input {
        Input::Command(PlayerCommand::Move(direction))
    }

    #[test]
    fn parses_movement_keys_and_words() {
        assert_eq!(parse_input("w").unwrap(), moves(CardinalDirection::Up));
        assert_eq!(parse_input("a\n").unwrap(), moves(CardinalDirection::Left));
        assert_eq!(parse_input(" S ").unwrap(), moves(CardinalDirection::Down));
        assert_eq!(parse_input("d").unwrap(), moves(CardinalDirection::Right));
        assert_eq!(parse_input("Up").unwrap(), moves(CardinalDirection::Up));
        assert_eq!(parse_input("left").unwrap(), moves(CardinalDirection::Left));
    }

    #[test]
    fn parses_wait_quit_and_path() {
        assert_eq!(
            parse_input("").unwrap(),
            Input::Command(PlayerCommand::Wait)
        );
        assert_eq!(
            parse_input("wait").unwrap(),
            Input::Command(PlayerCommand::Wait)
        );
        assert_eq!(parse_input("q").unwrap(), Input::Quit);
        assert_eq!(
            parse_input("path 4 -2").unwrap(),
            Input::Command(PlayerCommand::FindPath {
                goal: Position::new(4, -2)
            })
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_input("jump").is_err());
        assert!(parse_input("path 3").is_err());
        assert!(parse_input("path x 3").is_err());
        assert!(parse_input("w w").is_err());
    }

    #[tokio::test]
    async fn provider_skips_bad_lines_and_quits_at_eof() {
        let state = state();
        let provider = LineProvider::new("d\nbogus\nwait\n".as_bytes());

        assert_eq!(
            provider.next_command(&state).await.unwrap(),
            Some(PlayerCommand::Move(CardinalDirection::Right))
        );
        assert_eq!(
            provider.next_command(&state).await.unwrap(),
            Some(PlayerCommand::Wait)
        );
        assert_eq!(provider.next_command(&state).await.unwrap(), None);
    }

    #[tokio::test]
    async fn quit_line_ends_input() {
        let state = state();
        let provider = LineProvider::new("quit\nd\n".as_bytes());
        assert_eq!(provider.next_command(&state).await.unwrap(), None);
    }
}
