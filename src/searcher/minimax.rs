use log::debug;

use super::traits::Game;

/// Exhaustive minimax search. Walks the entire game tree below the root,
/// so it is only practical for small games; [`AlphaBeta`] selects the
/// same move while pruning provably irrelevant subtrees.
///
/// [`AlphaBeta`]: super::AlphaBeta
pub struct Minimax {
    visited_state_count: usize,
    last_score: Option<i16>,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimax {
    pub fn new() -> Self {
        Self {
            visited_state_count: 0,
            last_score: None,
        }
    }

    /// Number of states evaluated by the most recent `search` call.
    pub fn visited_state_count(&self) -> usize {
        self.visited_state_count
    }

    /// Backed-up value of the move the most recent `search` selected,
    /// from the root player's perspective.
    pub fn last_score(&self) -> Option<i16> {
        self.last_score
    }

    pub fn reset_stats(&mut self) {
        self.visited_state_count = 0;
        self.last_score = None;
    }

    /// Returns the move a rational player should take from `state`, or
    /// `None` when the position is terminal or has no legal moves.
    ///
    /// Utilities are computed from the perspective of the player to move
    /// at the root, however deep the recursion alternates. Ties resolve
    /// to the first optimal move in `actions(state)` order: only a
    /// strictly greater value displaces the current best.
    pub fn search<G: Game>(&mut self, game: &G, state: &G::State) -> Option<G::Move> {
        self.reset_stats();

        if game.terminal_test(state) {
            return None;
        }

        let player = game.to_move(state);
        let mut best_move = None;
        let mut best_value = i16::MIN;

        for &mv in game.actions(state).as_ref() {
            let value = self.min_value(game, &game.result(state, mv), player);
            debug!("root move {:?} backed up {}", mv, value);
            if best_move.is_none() || value > best_value {
                best_move = Some(mv);
                best_value = value;
            }
        }

        self.last_score = best_move.map(|_| best_value);
        best_move
    }

    fn max_value<G: Game>(&mut self, game: &G, state: &G::State, player: G::Player) -> i16 {
        self.visited_state_count += 1;

        if game.terminal_test(state) {
            return game.utility(state, player);
        }

        let mut v = i16::MIN;
        for &mv in game.actions(state).as_ref() {
            v = v.max(self.min_value(game, &game.result(state, mv), player));
        }
        v
    }

    fn min_value<G: Game>(&mut self, game: &G, state: &G::State, player: G::Player) -> i16 {
        self.visited_state_count += 1;

        if game.terminal_test(state) {
            return game.utility(state, player);
        }

        let mut v = i16::MAX;
        for &mv in game.actions(state).as_ref() {
            v = v.min(self.max_value(game, &game.result(state, mv), player));
        }
        v
    }
}
