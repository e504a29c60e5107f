//! Generic adversarial search over the [`Game`] contract.
//!
//! Two interchangeable algorithms: exhaustive [`Minimax`] and
//! [`AlphaBeta`]-pruned minimax. Both are deterministic, single-threaded
//! recursive tree walks with no retained history; every intermediate
//! state is owned by the stack frame that derived it and dropped when the
//! branch returns. Both apply the same tie-break (first optimal move in
//! `actions` order), so they select identical moves for any game honoring
//! the contract.

mod alpha_beta;
mod minimax;
mod traits;


pub use alpha_beta::AlphaBeta;
pub use minimax::Minimax;
pub use traits::Game;

/// One-shot exhaustive minimax. See [`Minimax::search`].
pub fn minimax_search<G: Game>(game: &G, state: &G::State) -> Option<G::Move> {
    Minimax::new().search(game, state)
}

/// One-shot alpha-beta search. See [`AlphaBeta::search`].
pub fn alphabeta_search<G: Game>(game: &G, state: &G::State) -> Option<G::Move> {
    AlphaBeta::new().search(game, state)
}
