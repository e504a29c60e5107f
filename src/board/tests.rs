use super::*;
use crate::searcher::Game;

fn state_after(game: &TicTacToe, cells: &[&str]) -> GameState {
    let mut state = game.initial_state();
    for cell in cells {
        state = game.result(&state, cell.parse().unwrap());
    }
    state
}

#[test]
fn test_initial_state() {
    let game = TicTacToe::classic();
    let state = game.initial_state();

    assert_eq!(Mark::X, state.to_move());
    assert_eq!(0, state.utility());
    assert!(state.board().is_empty());
    assert_eq!(9, state.moves().len());
    assert!(!game.terminal_test(&state));
}

#[test]
fn test_result_alternates_turns() {
    let game = TicTacToe::classic();
    let state = state_after(&game, &["b2"]);

    assert_eq!(Mark::O, state.to_move());
    assert_eq!(Some(Mark::X), state.get("b2".parse().unwrap()));
    assert_eq!(8, state.moves().len());
}

#[test]
fn test_moves_and_board_stay_disjoint() {
    let game = TicTacToe::classic();
    let state = state_after(&game, &["a1", "b2", "c3", "a2"]);

    for &cell in state.moves() {
        assert_eq!(None, state.get(cell));
    }
    assert_eq!(9, state.moves().len() + state.board().len());
}

#[test]
fn test_illegal_move_returns_state_unchanged() {
    let game = TicTacToe::classic();
    let state = state_after(&game, &["b2"]);

    // Occupied cell.
    let replayed = game.result(&state, "b2".parse().unwrap());
    assert_eq!(state, replayed);

    // Off the board entirely.
    let off_board = game.result(&state, "e7".parse().unwrap());
    assert_eq!(state, off_board);
}

#[test]
fn test_result_is_pure() {
    let game = TicTacToe::classic();
    let state = state_after(&game, &["a1", "b2"]);
    let mv = "c3".parse().unwrap();

    assert_eq!(game.result(&state, mv), game.result(&state, mv));
}

#[test]
fn test_diagonal_win_detected() {
    let game = TicTacToe::classic();
    // X plays a1, b2, c3; O responds elsewhere.
    let state = state_after(&game, &["a1", "a2", "b2", "b1", "c3"]);

    assert_eq!(1, state.utility());
    assert!(game.terminal_test(&state));
    assert_eq!(1, game.utility(&state, Mark::X));
    assert_eq!(-1, game.utility(&state, Mark::O));
}

#[test]
fn test_win_detected_in_every_direction() {
    let game = TicTacToe::classic();
    let wins: [&[&str]; 4] = [
        &["a1", "a2", "b1", "b2", "c1"],         // horizontal
        &["a1", "b1", "a2", "b2", "a3"],         // vertical
        &["a1", "a2", "b2", "b1", "c3"],         // rising diagonal
        &["a3", "a2", "b2", "b1", "c1"],         // falling diagonal
    ];

    for cells in wins.iter() {
        let state = state_after(&game, cells);
        assert_eq!(1, state.utility(), "line {:?} not detected", cells);
    }
}

#[test]
fn test_win_completed_in_the_middle_of_a_line() {
    let game = TicTacToe::classic();
    // X holds a2 and c2, then fills the gap at b2.
    let state = state_after(&game, &["a2", "a1", "c2", "c1", "b2"]);

    assert_eq!(1, state.utility());
}

#[test]
fn test_o_win_is_negative() {
    let game = TicTacToe::classic();
    let state = state_after(&game, &["a1", "a3", "b1", "b3", "a2", "c3"]);

    assert_eq!(-1, state.utility());
    assert_eq!(-1, game.utility(&state, Mark::X));
    assert_eq!(1, game.utility(&state, Mark::O));
}

#[test]
fn test_drawn_board_is_terminal_with_zero_utility() {
    // x o x        (top row)
    // o o x
    // x x o        (bottom row)
    let game = TicTacToe::classic();
    let state = state_after(
        &game,
        &["a1", "b2", "b1", "c1", "a3", "a2", "c3", "b3", "c2"],
    );

    assert_eq!(0, state.utility());
    assert!(state.moves().is_empty());
    assert!(game.terminal_test(&state));
    assert_eq!(0, game.utility(&state, Mark::X));
    assert_eq!(0, game.utility(&state, Mark::O));
}

#[test]
fn test_win_is_sticky_through_terminal_test() {
    let game = TicTacToe::classic();
    let state = state_after(&game, &["a1", "a2", "b2", "b1", "c3"]);

    // Cells remain open, yet the game is over.
    assert!(!state.moves().is_empty());
    assert!(game.terminal_test(&state));
}

#[test]
fn test_longer_win_length_requires_longer_run() {
    // Three in a row is not enough when k = 4.
    let game = TicTacToe::new(4, 4, 4);
    let state = state_after(&game, &["a1", "a4", "b1", "b4", "c1"]);
    assert_eq!(0, state.utility());

    let state = state_after(
        &game,
        &["a1", "a4", "b1", "b4", "c1", "c4", "d1"],
    );
    assert_eq!(1, state.utility());
}
