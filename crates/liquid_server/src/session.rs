//! A single game session: state, undo history and settings.

use crate::history::MoveHistory;
use crate::settings::{GameMode, GameSettings};
use derive_more::{Display, Error};
use derive_new::new;
use liquid_tictactoe::{
    GameState, Mark, MoveError, Position, Status, compute_best_move, new_game, place,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Error from a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The engine rejected the move.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// The computer is to move.
    #[display("Not your turn. Waiting for the computer")]
    NotYourTurn,

    /// No earlier position to go back to.
    #[display("Nothing to undo")]
    NothingToUndo,
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// Outcome of a player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct Turn {
    /// Where the player moved.
    pub player_move: Position,
    /// The computer's reply, if it had to move.
    pub reply: Option<Position>,
    /// Status after both moves.
    pub status: Status,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Played {}", self.player_move)?;
        if let Some(reply) = self.reply {
            write!(f, ", computer answered {}", reply)?;
        }
        write!(f, ". {}", self.status)
    }
}

/// A game in progress together with its history and settings.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    history: MoveHistory,
    settings: GameSettings,
    first: Mark,
}

impl Session {
    /// Creates a session and starts its first game.
    ///
    /// If the computer opens, its first move is already on the board.
    #[instrument(skip(settings), fields(mode = %settings.mode()))]
    pub fn new(settings: GameSettings) -> Self {
        let first = settings.first_mark();
        let mut session = Self {
            state: new_game(first),
            history: MoveHistory::new(),
            settings,
            first,
        };
        session.reset();
        session
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The mark that opened the current game.
    pub fn first_mark(&self) -> Mark {
        self.first
    }

    /// Number of moves that can be undone one by one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True when the computer must move next.
    pub fn is_computer_turn(&self) -> bool {
        *self.settings.mode() == GameMode::Ai
            && self.state.status() == &Status::InProgress
            && self.state.turn() == self.settings.computer_mark()
    }

    /// Replaces the game with a fresh one.
    ///
    /// Returns the computer's opening move when it starts.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Option<Position> {
        self.history.clear();
        self.first = self.settings.first_mark();
        self.state = new_game(self.first);
        info!(first = %self.first, "New game");

        if self.is_computer_turn() {
            self.computer_move()
        } else {
            None
        }
    }

    /// Plays the player's move at a board index (0-8).
    ///
    /// Against the computer the reply is played straight away unless the
    /// move ended the game.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn play(&mut self, position: i64) -> Result<Turn, SessionError> {
        if self.is_computer_turn() {
            warn!("Player tried to move out of turn");
            return Err(SessionError::NotYourTurn);
        }

        let pos = Position::try_from(position)?;
        let next = place(&self.state, pos).inspect_err(|e| {
            warn!(position, error = %e, "Invalid move");
        })?;
        self.history.push(self.state.snapshot());
        self.state = next;

        let reply = if self.is_computer_turn() {
            self.computer_move()
        } else {
            None
        };

        let turn = Turn::new(pos, reply, *self.state.status());
        info!(%turn, "Turn completed");
        Ok(turn)
    }

    /// Plays the engine's best move for whoever is to move.
    ///
    /// Returns `None` if the game is over.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn computer_move(&mut self) -> Option<Position> {
        let pos = self.hint()?;
        match place(&self.state, pos) {
            Ok(next) => {
                self.history.push(self.state.snapshot());
                self.state = next;
                debug!(%pos, status = %self.state.status(), "Computer moved");
                Some(pos)
            }
            Err(e) => {
                warn!(%pos, error = %e, "Engine proposed a rejected move");
                None
            }
        }
    }

    /// The engine's best move for whoever is to move, without playing it.
    pub fn hint(&self) -> Option<Position> {
        if self.state.status().is_terminal() {
            return None;
        }
        let mover = self.state.turn();
        compute_best_move(self.state.board(), mover, mover.opponent())
    }

    /// Takes back moves.
    ///
    /// Two players step back one move. Against the computer the session
    /// steps back to the last position where the player was to move, so the
    /// computer's reply and the player's move go together. A finished game
    /// becomes active again.
    ///
    /// # Errors
    ///
    /// [`SessionError::NothingToUndo`] if no such position exists; the
    /// session is left unchanged.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let player = *self.settings.player_mark();
        let against_computer = *self.settings.mode() == GameMode::Ai;

        let mut popped = Vec::new();
        while let Some(board) = self.history.pop() {
            popped.push(board);
            let restored = GameState::restore(board, self.first);
            if !against_computer || restored.turn() == player {
                self.state = restored;
                debug!(steps = popped.len(), board = %board, "Undo");
                return Ok(());
            }
        }

        for board in popped.into_iter().rev() {
            self.history.push(board);
        }
        warn!("Nothing to undo");
        Err(SessionError::NothingToUndo)
    }
}
