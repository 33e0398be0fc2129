/// Orthogonal step direction in screen coordinates (y grows downward).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::Up => (0, -1),
            CardinalDirection::Down => (0, 1),
            CardinalDirection::Left => (-1, 0),
            CardinalDirection::Right => (1, 0),
        }
    }
}

/// How a single step attempt by any actor was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// The actor relocated to the target cell.
    Moved,
    /// The target was occupied and the step became an attack.
    Attacked,
    /// The target was a closed door, which is now open.
    OpenedDoor,
    /// Nothing happened (wall, blank, out of range).
    Bumped,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn deltas_follow_screen_axes() {
        assert_eq!(CardinalDirection::Up.delta(), (0, -1));
        assert_eq!(CardinalDirection::Down.delta(), (0, 1));
        assert_eq!(CardinalDirection::Left.delta(), (-1, 0));
        assert_eq!(CardinalDirection::Right.delta(), (1, 0));
    }

    #[test]
    fn deltas_are_unit_steps() {
        for direction in CardinalDirection::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(CardinalDirection::from_str("up"), Ok(CardinalDirection::Up));
        assert_eq!(CardinalDirection::from_str("LEFT"), Ok(CardinalDirection::Left));
        assert!(CardinalDirection::from_str("north").is_err());
        assert_eq!(CardinalDirection::Right.to_string(), "right");
    }
}
