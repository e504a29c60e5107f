use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::cell::Cell;
use super::mark::Mark;

/// Occupied cells only; an absent key is an empty cell.
pub type Board = FxHashMap<Cell, Mark>;

/// Legal moves in enumeration order.
pub type CellList = SmallVec<[Cell; 16]>;

/// An immutable position snapshot. States are only ever created for the
/// initial position or derived through the game's `result`, never
/// mutated in place, so search branches can share a parent by cloning.
#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    to_move: Mark,
    utility: i16,
    board: Board,
    moves: CellList,
}

impl GameState {
    pub fn new(to_move: Mark, utility: i16, board: Board, moves: CellList) -> Self {
        Self {
            to_move,
            utility,
            board,
            moves,
        }
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Cached score of the move that produced this state: nonzero only
    /// once a winning line exists.
    pub fn utility(&self) -> i16 {
        self.utility
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.board.get(&cell).copied()
    }

    pub fn moves(&self) -> &[Cell] {
        &self.moves
    }
}
