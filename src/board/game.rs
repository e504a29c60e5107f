use super::cell::Cell;
use super::mark::Mark;
use super::state::{Board, CellList, GameState};
use crate::searcher::Game;

/// The four line directions through a cell; each is scanned in both
/// orientations, so these cover all eight neighbors.
const LINE_DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Generalized TicTacToe on a `rows x cols` grid: `win_length` contiguous
/// marks along a row, column or diagonal win. `X` moves first.
///
/// The struct carries only the rule parameters; every position is an
/// explicit [`GameState`] value.
pub struct TicTacToe {
    rows: u8,
    cols: u8,
    win_length: u8,
}

impl TicTacToe {
    pub fn new(rows: u8, cols: u8, win_length: u8) -> Self {
        debug_assert!(cols <= 26, "algebraic notation covers columns a-z");
        Self {
            rows,
            cols,
            win_length,
        }
    }

    /// The classic 3x3 game, three in a row to win.
    pub fn classic() -> Self {
        Self::new(3, 3, 3)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn win_length(&self) -> u8 {
        self.win_length
    }

    /// Empty board, full move list in row-major order, `X` to move.
    pub fn initial_state(&self) -> GameState {
        let mut moves = CellList::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                moves.push(Cell::new(row, col));
            }
        }
        GameState::new(Mark::X, 0, Board::default(), moves)
    }

    /// Scores the board right after `mark` played `mv`: `+1` if the move
    /// completed a winning line for `X`, `-1` for `O`, `0` otherwise.
    /// Only lines through `mv` can have changed, so only those are
    /// scanned.
    pub fn compute_utility(&self, board: &Board, mv: Cell, mark: Mark) -> i16 {
        if LINE_DIRECTIONS
            .iter()
            .any(|&delta| self.k_in_row(board, mv, mark, delta))
        {
            mark.win_score()
        } else {
            0
        }
    }

    /// True if the line through `mv` along `delta` holds at least
    /// `win_length` contiguous cells of `mark`. Counts outward in both
    /// orientations; cells off the board are absent from the mapping and
    /// stop the walk.
    fn k_in_row(&self, board: &Board, mv: Cell, mark: Mark, delta: (i16, i16)) -> bool {
        let mut run = 1u8; // the played cell itself
        for dir in [delta, (-delta.0, -delta.1)].iter().copied() {
            let mut cursor = mv.offset(dir);
            while let Some(cell) = cursor {
                if board.get(&cell) != Some(&mark) {
                    break;
                }
                run += 1;
                cursor = cell.offset(dir);
            }
        }
        run >= self.win_length
    }
}

impl Game for TicTacToe {
    type Player = Mark;
    type Move = Cell;
    type State = GameState;
    type MoveList = CellList;

    fn actions(&self, state: &GameState) -> CellList {
        state.moves().iter().copied().collect()
    }

    fn result(&self, state: &GameState, mv: Cell) -> GameState {
        if !state.moves().contains(&mv) {
            // Illegal move has no effect.
            return state.clone();
        }

        let mut board = state.board().clone();
        board.insert(mv, state.to_move());
        let moves = state.moves().iter().copied().filter(|&c| c != mv).collect();

        GameState::new(
            state.to_move().opposite(),
            self.compute_utility(&board, mv, state.to_move()),
            board,
            moves,
        )
    }

    fn utility(&self, state: &GameState, player: Mark) -> i16 {
        match player {
            Mark::X => state.utility(),
            Mark::O => -state.utility(),
        }
    }

    fn to_move(&self, state: &GameState) -> Mark {
        state.to_move()
    }

    /// Won positions are terminal even though empty cells remain.
    fn terminal_test(&self, state: &GameState) -> bool {
        state.utility() != 0 || state.moves().is_empty()
    }
}
