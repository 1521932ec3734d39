//! Game rules for tic-tac-toe.
//!
//! Pure functions that read a [`Board`](crate::Board) and report wins,
//! draws and legal moves. Rules are kept apart from board storage so the
//! engine and the search share one definition of a finished game.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_full, legal_moves};
pub use status::{board_status, evaluate_status};
pub use win::{WIN_LINES, WinLine, has_line, winner, winners, winning_line};
