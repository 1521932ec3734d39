//! Liquid tic-tac-toe sessions and services.
//!
//! This crate is the caller side of the engine:
//!
//! - **Settings**: game mode, marks and start order, loaded from TOML
//! - **Session**: one game with undo history and the computer's replies
//! - **API**: stateless HTTP endpoints over the engine (axum)
//! - **Console**: a line-based interactive game
//!
//! # Example
//!
//! ```
//! use liquid_server::{GameSettings, Session};
//!
//! let mut session = Session::new(GameSettings::default());
//! let turn = session.play(4).unwrap();
//! assert!(turn.reply.is_some());
//! session.undo().unwrap();
//! assert_eq!(session.state().board().occupied(), 0);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod console;
mod history;
mod session;
mod settings;

pub use history::MoveHistory;
pub use session::{Session, SessionError, Turn};
pub use settings::{ConfigError, GameMode, GameSettings, StartOrder};
