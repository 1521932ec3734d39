//! Property-based tests using proptest.

use liquid_tictactoe::rules::winners;
use liquid_tictactoe::{
    Board, GameState, Mark, MoveError, Square, Status, apply_move, compute_best_move,
    evaluate_status, legal_moves, new_game,
};
use proptest::prelude::*;

/// Strategy for any square, legal or not.
fn square_strategy() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

/// Strategy for arbitrary hand-built boards.
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square_strategy()).prop_map(Board::from_squares)
}

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

/// Plays `picks` as indices into the legal move list until the game ends.
fn play_out(first: Mark, picks: &[usize]) -> GameState {
    let mut state = new_game(first);
    for &pick in picks {
        if state.status().is_terminal() {
            break;
        }
        let moves = legal_moves(state.board());
        let pos = moves[pick % moves.len()];
        state = apply_move(&state, pos.to_index() as i64).expect("legal move");
    }
    state
}

proptest! {
    /// Property: a reported win belongs to the mark that moved last and owns a line
    #[test]
    fn prop_evaluate_reports_only_last_mark(board in board_strategy(), last in mark_strategy()) {
        match evaluate_status(&board, last) {
            Status::Won(mark) => {
                prop_assert_eq!(mark, last);
                prop_assert!(winners(&board).contains(&last));
            }
            Status::Draw => {
                prop_assert!(!winners(&board).contains(&last));
                prop_assert_eq!(board.occupied(), 9);
            }
            Status::InProgress => {
                prop_assert!(!winners(&board).contains(&last));
                prop_assert!(board.occupied() < 9);
            }
        }
    }

    /// Property: legal play never produces two winners and keeps mark counts balanced
    #[test]
    fn prop_played_boards_have_single_winner(
        first in mark_strategy(),
        picks in prop::collection::vec(0..9usize, 0..9),
    ) {
        let state = play_out(first, &picks);
        let board = state.board();
        prop_assert!(winners(board).len() <= 1);
        prop_assert!(board.count(first) >= board.count(first.opponent()));
        prop_assert!(board.count(first) - board.count(first.opponent()) <= 1);
    }

    /// Property: every state reached by play is accepted back from JSON
    #[test]
    fn prop_played_states_deserialize(
        first in mark_strategy(),
        picks in prop::collection::vec(0..9usize, 0..9),
    ) {
        let state = play_out(first, &picks);
        let json = serde_json::to_value(state).expect("serialize");
        let back: GameState = serde_json::from_value(json).expect("played state is accepted");
        prop_assert_eq!(back, state);
    }

    /// Property: replaying a successful move fails
    #[test]
    fn prop_second_identical_move_fails(
        first in mark_strategy(),
        picks in prop::collection::vec(0..9usize, 0..8),
        target in 0..9i64,
    ) {
        let state = play_out(first, &picks);
        if let Ok(after) = apply_move(&state, target) {
            let again = apply_move(&after, target);
            prop_assert!(matches!(
                again,
                Err(MoveError::CellOccupied(_)) | Err(MoveError::GameAlreadyOver)
            ));
        }
    }

    /// Property: notation parsing inverts formatting
    #[test]
    fn prop_notation_identity(board in board_strategy()) {
        let parsed: Board = board.notation().parse().expect("own notation parses");
        prop_assert_eq!(parsed, board);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: the chosen move is always accepted by apply_move
    #[test]
    fn prop_best_move_is_legal(
        first in mark_strategy(),
        picks in prop::collection::vec(0..9usize, 1..8),
    ) {
        let state = play_out(first, &picks);
        prop_assume!(state.status() == &Status::InProgress);

        let mover = state.turn();
        let before = *state.board();
        let pos = compute_best_move(state.board(), mover, mover.opponent());
        prop_assert_eq!(state.board(), &before);

        let pos = pos.expect("in-progress board has a move");
        prop_assert!(apply_move(&state, pos.to_index() as i64).is_ok());
    }
}
