//! Generalized m,n,k TicTacToe: the concrete game shipped with the
//! search engine. Pure rules only; rendering and input live in the
//! driver layer.

mod cell;
mod game;
pub mod grid;
mod mark;
mod state;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use game::TicTacToe;
pub use mark::Mark;
pub use state::{Board, CellList, GameState};
