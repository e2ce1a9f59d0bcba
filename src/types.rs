use std::fmt;

use serde::Serialize;

use crate::board::Board;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Row delta of a simple move: One advances down the board, Two up.
    pub fn forward(self) -> i8 {
        match self {
            Self::One => 1,
            Self::Two => -1,
        }
    }

    /// Wire id used in flat board encodings (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("player one"),
            Self::Two => f.write_str("player two"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Owned(player) => Some(player),
        }
    }
}

/// A board coordinate.
///
/// Coordinates are signed so that malformed input (`-1`, `6`, ...) can be
/// represented and rejected by the engine instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        Board::contains(self)
    }

    /// Clamps JS-side coordinates into `i8`. Values that do not fit land on
    /// `i8::MIN` / `i8::MAX`, which are still off the board.
    pub fn from_js(row: i32, col: i32) -> Self {
        Self {
            row: saturate(row),
            col: saturate(col),
        }
    }

    /// Cell jumped over when moving from `self` to `to`.
    pub fn midpoint(self, to: Position) -> Position {
        Position {
            row: average(self.row, to.row),
            col: average(self.col, to.col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returned by a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionAccepted {
    pub position: Position,
}

/// Board and turn after a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub active_player: Player,
    /// Contract:
    /// - Capture: the position of the removed piece.
    /// - Simple move: `None`.
    pub captured: Option<Position>,
}

/// Flat game state handed to the renderer across the wasm boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateView {
    /// Row-major, 0=empty, 1=player one, 2=player two.
    pub board: Vec<u8>,
    pub active_player: u8,
    pub selected: Option<Position>,
    pub phase: &'static str,
    pub player_one_count: u8,
    pub player_two_count: u8,
}

/// Flat move result handed to the renderer across the wasm boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveView {
    pub board: Vec<u8>,
    pub active_player: u8,
    pub captured: Option<Position>,
}

impl From<&MoveOutcome> for MoveView {
    fn from(outcome: &MoveOutcome) -> Self {
        Self {
            board: outcome.board.to_array().to_vec(),
            active_player: outcome.active_player.id(),
            captured: outcome.captured,
        }
    }
}

fn saturate(value: i32) -> i8 {
    i8::try_from(value).unwrap_or(if value < 0 { i8::MIN } else { i8::MAX })
}

// The mean of two `i8`s always fits back into `i8`.
fn average(a: i8, b: i8) -> i8 {
    ((i16::from(a) + i16::from(b)) / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_js_keeps_wide_values_off_the_board() {
        assert_eq!(Position::from_js(2, 3), Position::new(2, 3));
        assert_eq!(Position::from_js(256, 1), Position::new(i8::MAX, 1));
        assert_eq!(Position::from_js(1, -300), Position::new(1, i8::MIN));
        assert!(!Position::from_js(256, 1).in_bounds());
        assert!(!Position::from_js(258, 3).in_bounds());
    }

    #[test]
    fn midpoint_does_not_overflow() {
        assert_eq!(Position::new(0, 1).midpoint(Position::new(2, 3)), Position::new(1, 2));
        assert_eq!(
            Position::new(100, 100).midpoint(Position::new(100, 100)),
            Position::new(100, 100)
        );
        assert_eq!(
            Position::new(i8::MAX, i8::MIN).midpoint(Position::new(i8::MAX, i8::MIN)),
            Position::new(i8::MAX, i8::MIN)
        );
    }
}
