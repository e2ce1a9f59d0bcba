//! Error types for selections and moves.
//!
//! Both kinds are recoverable: the engine leaves its state untouched and the
//! caller surfaces the message and lets the player retry.

use std::fmt;

use thiserror::Error;

use crate::types::Position;

/// Why a cell could not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFault {
    OutOfBounds,
    Empty,
    OpponentPiece,
}

/// Why a destination was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFault {
    /// No origin has been selected yet.
    NoSelection,
    OutOfBounds,
    /// Destination holds a piece of either side.
    Occupied,
    /// Origin does not hold a piece of the active player.
    NotOwnPiece,
    /// Move goes against the player's forward direction.
    WrongDirection,
    /// Jumped cell is empty or holds a friendly piece.
    NothingToCapture,
    /// Neither a one-step nor a two-step diagonal.
    NotDiagonal,
}

/// Selected cell is empty, off the board or owned by the other player.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid selection at {position}: {reason}")]
pub struct InvalidSelection {
    pub position: Position,
    pub reason: SelectionFault,
}

/// Destination breaks one of the movement rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid move to {to}: {reason}")]
pub struct InvalidMove {
    pub from: Option<Position>,
    pub to: Position,
    pub reason: MoveFault,
}

/// Any failure of a player action.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Selection(#[from] InvalidSelection),
    #[error(transparent)]
    Move(#[from] InvalidMove),
}

impl fmt::Display for SelectionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionFault::OutOfBounds => "cell is outside the board",
            SelectionFault::Empty => "cell is empty",
            SelectionFault::OpponentPiece => "piece belongs to the opponent",
        })
    }
}

impl fmt::Display for MoveFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveFault::NoSelection => "no piece selected",
            MoveFault::OutOfBounds => "destination is outside the board",
            MoveFault::Occupied => "destination is occupied",
            MoveFault::NotOwnPiece => "origin does not hold one of your pieces",
            MoveFault::WrongDirection => "pieces only move forward",
            MoveFault::NothingToCapture => "no opposing piece to jump over",
            MoveFault::NotDiagonal => "not a one or two step diagonal",
        })
    }
}
