//! Compact grid-string notation for positions, e.g. `x.o/.x./...` for a
//! 3x3 board. Rows are written top to bottom, separated by `/`, one of
//! `x`, `o` or `.` per cell.

use thiserror::Error;

use super::cell::Cell;
use super::mark::Mark;
use super::state::{Board, CellList, GameState};
use super::TicTacToe;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("position must have at least one row")]
    Empty,
    #[error("rows must be equal length: row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("at most 26 columns are supported")]
    TooWide,
    #[error("invalid character {ch:?}; cells are `x`, `o` or `.`")]
    InvalidChar { ch: char },
    #[error("impossible position: {x_count} X marks vs {o_count} O marks")]
    ImbalancedMarks { x_count: usize, o_count: usize },
}

/// Parses a grid string into the game it describes and the position
/// itself. `X` moves first, so the side to move is derived from the mark
/// counts: `X` when they are equal, `O` when `X` leads by one; anything
/// else is rejected. A position that already contains a winning line gets
/// its cached utility reconstructed by rescanning the occupied cells.
pub fn parse_grid(grid: &str, win_length: u8) -> Result<(TicTacToe, GameState), GridError> {
    let lines: Vec<&str> = grid.split('/').collect();
    let rows = lines.len();
    let cols = lines[0].chars().count();
    if cols == 0 {
        return Err(GridError::Empty);
    }
    if cols > 26 {
        return Err(GridError::TooWide);
    }

    let mut board = Board::default();
    let mut x_count = 0;
    let mut o_count = 0;

    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != cols {
            return Err(GridError::RaggedRow {
                row: i,
                len,
                expected: cols,
            });
        }
        // The first line of the string is the top row of the board.
        let row = (rows - 1 - i) as u8;
        for (col, ch) in line.chars().enumerate() {
            let mark = match ch {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                '.' => continue,
                _ => return Err(GridError::InvalidChar { ch }),
            };
            match mark {
                Mark::X => x_count += 1,
                Mark::O => o_count += 1,
            }
            board.insert(Cell::new(row, col as u8), mark);
        }
    }

    let to_move = if x_count == o_count {
        Mark::X
    } else if x_count == o_count + 1 {
        Mark::O
    } else {
        return Err(GridError::ImbalancedMarks { x_count, o_count });
    };

    let game = TicTacToe::new(rows as u8, cols as u8, win_length);

    let mut utility = 0;
    for (&cell, &mark) in &board {
        let score = game.compute_utility(&board, cell, mark);
        if score != 0 {
            utility = score;
            break;
        }
    }

    let mut moves = CellList::new();
    for row in 0..rows as u8 {
        for col in 0..cols as u8 {
            let cell = Cell::new(row, col);
            if !board.contains_key(&cell) {
                moves.push(cell);
            }
        }
    }

    Ok((game, GameState::new(to_move, utility, board, moves)))
}

/// Inverse of [`parse_grid`]; useful for logging positions compactly.
pub fn format_grid(game: &TicTacToe, state: &GameState) -> String {
    let mut out = String::new();
    for row in (0..game.rows()).rev() {
        if row + 1 < game.rows() {
            out.push('/');
        }
        for col in 0..game.cols() {
            match state.get(Cell::new(row, col)) {
                Some(Mark::X) => out.push('x'),
                Some(Mark::O) => out.push('o'),
                None => out.push('.'),
            }
        }
    }
    out
}
