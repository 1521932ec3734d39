//! Liquid tic-tac-toe engine - rules, state machine and perfect play.
//!
//! The engine is a set of pure functions over explicit values. Callers own
//! the [`GameState`] and thread it through every call; nothing is shared
//! between games.
//!
//! # Example
//!
//! ```
//! use liquid_tictactoe::{apply_move, compute_best_move, new_game, Mark, Status};
//!
//! let state = new_game(Mark::X);
//! let state = apply_move(&state, 4).unwrap();
//! assert_eq!(state.turn(), Mark::O);
//!
//! let reply = compute_best_move(state.board(), Mark::O, Mark::X).unwrap();
//! let state = apply_move(&state, reply.to_index() as i64).unwrap();
//! assert_eq!(state.status(), &Status::InProgress);
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod position;
pub mod rules;
mod search;
mod types;

pub use engine::{apply_move, new_game, place};
pub use error::{BoardParseError, GameStateError, MoveError};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, evaluate_status, is_full, legal_moves, winner, winning_line};
pub use search::{MoveScore, analyze, compute_best_move};
pub use types::{Board, GameState, Mark, Square, Status};
