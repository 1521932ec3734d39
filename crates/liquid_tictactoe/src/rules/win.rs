//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};

/// Three positions that win when they hold the same mark.
pub type WinLine = [Position; 3];

/// The 8 winning lines: rows, columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `mark` holds all three squares of some line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let sq = Square::Occupied(mark);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == sq))
}

/// Returns the first completed line in [`WIN_LINES`] order.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line, `None` otherwise.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[pos, _, _]| match board.get(pos) {
        Square::Occupied(mark) => Some(mark),
        Square::Empty => None,
    })
}

/// Every mark that owns a completed line.
///
/// Boards reached through legal play hold at most one; hand-built boards
/// can hold two.
pub fn winners(board: &Board) -> Vec<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .filter(|&mark| has_line(board, mark))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO.O.O.X".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert!(!has_line(&board, Mark::X));
    }

    #[test]
    fn test_winners_reports_both_on_impossible_board() {
        let board: Board = "XXXOOO...".parse().unwrap();
        assert_eq!(winners(&board), vec![Mark::X, Mark::O]);
    }
}
