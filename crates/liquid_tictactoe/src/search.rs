//! Perfect-play move selection by exhaustive minimax.
//!
//! The search walks the whole remaining game tree (at most 9 plies). Leaves
//! score `10 - depth` when the mover has won, `depth - 10` when the
//! opponent has won and `0` for a full board, so quick wins beat slow wins
//! and slow losses beat quick ones. `depth` counts plies below the candidate
//! move being scored: the position right after the candidate is depth 0, so
//! an immediate win scores 10 and every reported score sits one above a
//! plies-from-now count. Move ordering is the same either way.

use super::position::Position;
use super::rules::{has_line, is_full};
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score the search assigned to one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveScore {
    /// The candidate square.
    pub position: Position,
    /// Minimax value of playing there, from the mover's point of view.
    pub score: i32,
}

/// Scores every legal move for `mover`, in scan order.
///
/// Empty when the board is full or either mark already owns a line.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, mover: Mark, opponent: Mark) -> Vec<MoveScore> {
    if has_line(board, mover) || has_line(board, opponent) || is_full(board) {
        debug!("Board is terminal, nothing to search");
        return Vec::new();
    }

    let mut work = *board;
    Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| {
            work.set(pos, Square::Occupied(mover));
            let score = minimax(&mut work, 0, false, mover, opponent);
            work.set(pos, Square::Empty);
            MoveScore {
                position: pos,
                score,
            }
        })
        .collect()
}

/// Picks the best move for `mover` against a perfect `opponent`.
///
/// The highest-scoring move wins; ties go to the lowest index. Returns
/// `None` when there is nothing to play (full board or game already won).
/// The board passed in is never modified.
#[instrument(skip(board), fields(board = %board))]
pub fn compute_best_move(board: &Board, mover: Mark, opponent: Mark) -> Option<Position> {
    let mut best: Option<MoveScore> = None;
    for candidate in analyze(board, mover, opponent) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    let best = best?;

    debug!(position = %best.position, score = best.score, "Best move selected");
    Some(best.position)
}

fn minimax(board: &mut Board, depth: i32, maximizing: bool, mover: Mark, opponent: Mark) -> i32 {
    if has_line(board, mover) {
        return 10 - depth;
    }
    if has_line(board, opponent) {
        return depth - 10;
    }
    if is_full(board) {
        return 0;
    }

    let (mark, mut best) = if maximizing {
        (mover, i32::MIN)
    } else {
        (opponent, i32::MAX)
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mark));
        let score = minimax(board, depth + 1, !maximizing, mover, opponent);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_completes_top_row() {
        let b = board("XX..O...O");
        assert_eq!(
            compute_best_move(&b, Mark::X, Mark::O),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // O threatens the middle column; X has nothing faster.
        let b = board("XO..O...X");
        assert_eq!(
            compute_best_move(&b, Mark::X, Mark::O),
            Some(Position::BottomCenter)
        );
    }

    #[test]
    fn test_answers_center_with_corner() {
        let b = board("....X....");
        let best = compute_best_move(&b, Mark::O, Mark::X).unwrap();
        assert!(best.is_corner(), "edge reply {best} loses");
        assert_eq!(best, Position::TopLeft);
    }

    #[test]
    fn test_prefers_quickest_win() {
        // X wins at once on 7; the center also wins, two plies later.
        let b = board("...O.OX.X");
        let scores = analyze(&b, Mark::X, Mark::O);
        let score_of = |p: Position| scores.iter().find(|s| s.position == p).unwrap().score;
        assert_eq!(score_of(Position::Center), 8);
        assert_eq!(score_of(Position::BottomCenter), 10);
        assert_eq!(
            compute_best_move(&b, Mark::X, Mark::O),
            Some(Position::BottomCenter)
        );
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let b = Board::new();
        let scores = analyze(&b, Mark::X, Mark::O);
        assert!(scores.iter().all(|s| s.score == 0));
        assert_eq!(
            compute_best_move(&b, Mark::X, Mark::O),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_does_not_mutate_board() {
        let b = board("X...O....");
        let copy = b;
        let _ = compute_best_move(&b, Mark::X, Mark::O);
        assert_eq!(b, copy);
    }

    #[test]
    fn test_terminal_boards_have_no_move() {
        let full = board("XOXXOOOXX");
        let won = board("XXXOO....");
        assert_eq!(compute_best_move(&full, Mark::X, Mark::O), None);
        assert_eq!(compute_best_move(&won, Mark::O, Mark::X), None);
        assert!(analyze(&won, Mark::X, Mark::O).is_empty());
    }

    #[test]
    fn test_analyze_lists_only_empty_squares() {
        let b = board("XO.XO....");
        let scores = analyze(&b, Mark::X, Mark::O);
        let positions: Vec<usize> = scores.iter().map(|s| s.position.to_index()).collect();
        assert_eq!(positions, vec![2, 5, 6, 7, 8]);
        // Taking 6 completes the left column.
        assert_eq!(
            compute_best_move(&b, Mark::X, Mark::O),
            Some(Position::BottomLeft)
        );
    }
}
