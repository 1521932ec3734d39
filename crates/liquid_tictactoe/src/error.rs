//! Engine error types.

use super::position::Position;
use super::types::{Mark, Status};
use derive_more::{Display, Error};

/// Error returned when a move cannot be applied.
///
/// Every variant is a caller mistake reported as a value; the engine never
/// panics on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Position is not in 0..=8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] i64),

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl MoveError {
    /// Stable snake_case name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::OutOfRange(_) => "out_of_range",
            MoveError::CellOccupied(_) => "cell_occupied",
            MoveError::GameAlreadyOver => "game_already_over",
        }
    }
}

/// Error parsing a board from its 9-character notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Notation did not have exactly 9 characters.
    #[display("Board notation must have 9 squares, got {}", _0)]
    Length(#[error(not(source))] usize),

    /// Character is not a mark or an empty marker.
    #[display("Unknown square symbol {:?}", _0)]
    Symbol(#[error(not(source))] char),
}

/// Error accepting a [`GameState`](crate::GameState) built outside the engine.
///
/// Raised while deserializing, when the fields could not have come from a
/// game played with [`apply_move`](crate::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameStateError {
    /// One mark has two or more squares than the other.
    #[display("Mark counts are unbalanced (X: {x}, O: {o})")]
    Unbalanced {
        /// Squares holding X.
        x: usize,
        /// Squares holding O.
        o: usize,
    },

    /// Both marks own a line.
    #[display("Both marks own a line")]
    TwoWinners,

    /// The claimed status disagrees with the board.
    #[display("Status {claimed:?} does not match the board ({actual:?})")]
    StatusMismatch {
        /// Status sent by the caller.
        claimed: Status,
        /// Status the board actually has.
        actual: Status,
    },

    /// The mark cannot be the one recorded as `turn` on this board.
    #[display("Player {} cannot hold the turn on this board", _0)]
    WrongTurn(#[error(not(source))] Mark),
}
