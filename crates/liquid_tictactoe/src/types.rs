//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, GameStateError};
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    #[serde(alias = "x")]
    X,
    /// Mark O.
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Notation character for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as its 9-character notation (`"XX...O..O"`), one character
/// per square in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Compact 9-character notation, `.` for empty squares.
    pub fn notation(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    occupied => result.push(occupied.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::Length(chars.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(chars) {
            *square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(BoardParseError::Symbol(other)),
            };
        }
        Ok(Self { squares })
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}

/// Status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Board filled with no winner.
    Draw,
}

impl Status {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "In progress"),
            Status::Won(mark) => write!(f, "Player {} wins", mark),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state: the board, whose move is next and the status.
///
/// Deserializing checks that the fields could come from a played game, so a
/// caller cannot hand back a won board marked as still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    turn: Mark,
    status: Status,
}

impl GameState {
    pub(crate) fn from_parts(board: Board, turn: Mark, status: Status) -> Self {
        Self {
            board,
            turn,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Copy of the current board, for callers keeping an undo history.
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// Rebuilds a state from a board snapshot.
    ///
    /// The mark to move is `first` when an even number of squares is
    /// occupied, its opponent otherwise. The status is recomputed from the
    /// board; on a finished board `turn` is the mark that moved last, as
    /// after [`apply_move`](crate::apply_move).
    #[instrument]
    pub fn restore(board: Board, first: Mark) -> Self {
        let next = if board.occupied() % 2 == 0 {
            first
        } else {
            first.opponent()
        };
        let status = rules::board_status(&board);
        let turn = if status.is_terminal() {
            next.opponent()
        } else {
            next
        };
        Self {
            board,
            turn,
            status,
        }
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    turn: Mark,
    status: Status,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameStateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let RawGameState {
            board,
            turn,
            status,
        } = raw;

        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x.abs_diff(o) > 1 {
            return Err(GameStateError::Unbalanced { x, o });
        }
        if rules::winners(&board).len() > 1 {
            return Err(GameStateError::TwoWinners);
        }

        let actual = rules::board_status(&board);
        if status != actual {
            return Err(GameStateError::StatusMismatch {
                claimed: status,
                actual,
            });
        }

        // The mark with more squares moved last.
        let ahead = match x.cmp(&o) {
            Ordering::Greater => Some(Mark::X),
            Ordering::Less => Some(Mark::O),
            Ordering::Equal => None,
        };
        let turn_ok = match status {
            Status::InProgress => ahead.is_none_or(|last| turn == last.opponent()),
            Status::Won(winner) => turn == winner && ahead.is_none_or(|last| last == winner),
            Status::Draw => ahead == Some(turn),
        };
        if !turn_ok {
            return Err(GameStateError::WrongTurn(turn));
        }

        Ok(Self::from_parts(board, turn, status))
    }
}
