//! Terminal status evaluation.

use super::{draw::is_full, win::has_line, win::winner};
use crate::{Board, Mark, Status};
use tracing::instrument;

/// Status after `last` placed a mark.
///
/// Only `last` can have completed a line with its move, so only its lines
/// are checked. A win beats a full board: a board that is both full and
/// holds `last`'s line is `Won`, never `Draw`.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate_status(board: &Board, last: Mark) -> Status {
    if has_line(board, last) {
        Status::Won(last)
    } else if is_full(board) {
        Status::Draw
    } else {
        Status::InProgress
    }
}

/// Status of a board without knowing who moved last.
///
/// Used when rebuilding a state from a snapshot.
pub fn board_status(board: &Board) -> Status {
    match winner(board) {
        Some(mark) => Status::Won(mark),
        None if is_full(board) => Status::Draw,
        None => Status::InProgress,
    }
}
