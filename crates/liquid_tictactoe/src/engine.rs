//! Game state transitions.

use super::error::MoveError;
use super::position::Position;
use super::rules::evaluate_status;
use super::types::{Board, GameState, Mark, Square, Status};
use tracing::{debug, instrument, warn};

/// Starts a game on an empty board with `first` to move.
#[instrument]
pub fn new_game(first: Mark) -> GameState {
    GameState::from_parts(Board::new(), first, Status::InProgress)
}

/// Applies a move at a raw board index (0-8).
///
/// Checks run in order: the index must be in range, the square must be
/// empty and the game must still be in progress. The input state is left
/// untouched; the new state is returned.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `position` is not in 0..=8.
/// - [`MoveError::CellOccupied`] if the square already holds a mark.
/// - [`MoveError::GameAlreadyOver`] if the game was won or drawn.
#[instrument(skip(state), fields(turn = %state.turn()))]
pub fn apply_move(state: &GameState, position: i64) -> Result<GameState, MoveError> {
    let pos = Position::try_from(position).inspect_err(|e| {
        warn!(position, error = %e, "Rejected move");
    })?;
    place(state, pos)
}

/// Applies a move at a typed position.
///
/// Same checks as [`apply_move`] minus the range check.
#[instrument(skip(state), fields(turn = %state.turn()))]
pub fn place(state: &GameState, pos: Position) -> Result<GameState, MoveError> {
    if !state.board().is_empty(pos) {
        warn!(%pos, "Square already occupied");
        return Err(MoveError::CellOccupied(pos));
    }

    if state.status().is_terminal() {
        warn!(status = %state.status(), "Move after game end");
        return Err(MoveError::GameAlreadyOver);
    }

    let mover = state.turn();
    let mut board = state.snapshot();
    board.set(pos, Square::Occupied(mover));

    let status = evaluate_status(&board, mover);
    let turn = match status {
        Status::InProgress => mover.opponent(),
        _ => mover,
    };

    debug!(%pos, %mover, %status, "Move applied");
    Ok(GameState::from_parts(board, turn, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(first: Mark, moves: &[i64]) -> GameState {
        let mut state = new_game(first);
        for &pos in moves {
            state = apply_move(&state, pos).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game() {
        let state = new_game(Mark::O);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.turn(), Mark::O);
        assert_eq!(state.status(), &Status::InProgress);
    }

    #[test]
    fn test_move_flips_turn() {
        let state = apply_move(&new_game(Mark::X), 4).unwrap();
        assert_eq!(
            state.board().get(Position::Center),
            Square::Occupied(Mark::X)
        );
        assert_eq!(state.turn(), Mark::O);
    }

    #[test]
    fn test_input_state_untouched() {
        let before = new_game(Mark::X);
        let _ = apply_move(&before, 0).unwrap();
        assert_eq!(before, new_game(Mark::X));
    }

    #[test]
    fn test_win_keeps_winner_as_turn() {
        let state = play(Mark::X, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), &Status::Won(Mark::X));
        assert_eq!(state.turn(), Mark::X);
    }

    #[test]
    fn test_error_order() {
        let won = play(Mark::X, &[0, 3, 1, 4, 2]);
        assert_eq!(apply_move(&won, 9), Err(MoveError::OutOfRange(9)));
        assert_eq!(
            apply_move(&won, 0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(apply_move(&won, 8), Err(MoveError::GameAlreadyOver));
    }
}
