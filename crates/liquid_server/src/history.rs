//! Undo history of board snapshots.

use liquid_tictactoe::Board;

/// Boards as they were before each move, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the board as it was before a move.
    pub fn push(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Forgets every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_latest_first() {
        let first: Board = ".........".parse().unwrap();
        let second: Board = "....X....".parse().unwrap();

        let mut history = MoveHistory::new();
        history.push(first);
        history.push(second);
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop(), Some(second));
        assert_eq!(history.pop(), Some(first));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.push(Board::new());
        history.clear();
        assert!(history.is_empty());
    }
}
