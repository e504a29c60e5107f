use log::debug;

use super::traits::Game;

/// Minimax with alpha-beta pruning. Maintains a `[alpha, beta]` window of
/// scores that can still affect the root choice and cuts off any subtree
/// proven to fall outside it. Selects exactly the move [`Minimax`] would:
/// a root child searched under a raised alpha can fail low, but its
/// returned value is then at most alpha and the strict `>` comparison
/// never prefers it over the established best.
///
/// [`Minimax`]: super::Minimax
pub struct AlphaBeta {
    visited_state_count: usize,
    cutoff_count: usize,
    last_score: Option<i16>,
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self {
            visited_state_count: 0,
            cutoff_count: 0,
            last_score: None,
        }
    }

    /// Number of states evaluated by the most recent `search` call.
    pub fn visited_state_count(&self) -> usize {
        self.visited_state_count
    }

    /// Number of subtrees abandoned early by the most recent `search`.
    pub fn cutoff_count(&self) -> usize {
        self.cutoff_count
    }

    /// Backed-up value of the move the most recent `search` selected,
    /// from the root player's perspective.
    pub fn last_score(&self) -> Option<i16> {
        self.last_score
    }

    pub fn reset_stats(&mut self) {
        self.visited_state_count = 0;
        self.cutoff_count = 0;
        self.last_score = None;
    }

    /// Returns the move a rational player should take from `state`, or
    /// `None` when the position is terminal or has no legal moves. Ties
    /// resolve to the first optimal move in `actions(state)` order, the
    /// same rule [`Minimax::search`] applies.
    ///
    /// [`Minimax::search`]: super::Minimax::search
    pub fn search<G: Game>(&mut self, game: &G, state: &G::State) -> Option<G::Move> {
        self.reset_stats();

        if game.terminal_test(state) {
            return None;
        }

        let player = game.to_move(state);
        let mut alpha = i16::MIN;
        let mut best_move = None;
        let mut best_value = i16::MIN;

        for &mv in game.actions(state).as_ref() {
            let value = self.min_value(game, &game.result(state, mv), player, alpha, i16::MAX);
            debug!("root move {:?} backed up {}", mv, value);
            if best_move.is_none() || value > best_value {
                best_move = Some(mv);
                best_value = value;
                alpha = alpha.max(best_value);
            }
        }

        self.last_score = best_move.map(|_| best_value);
        best_move
    }

    fn max_value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: G::Player,
        mut alpha: i16,
        beta: i16,
    ) -> i16 {
        self.visited_state_count += 1;

        if game.terminal_test(state) {
            return game.utility(state, player);
        }

        let mut v = i16::MIN;
        for &mv in game.actions(state).as_ref() {
            v = v.max(self.min_value(game, &game.result(state, mv), player, alpha, beta));
            if v >= beta {
                self.cutoff_count += 1;
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: G::Player,
        alpha: i16,
        mut beta: i16,
    ) -> i16 {
        self.visited_state_count += 1;

        if game.terminal_test(state) {
            return game.utility(state, player);
        }

        let mut v = i16::MAX;
        for &mv in game.actions(state).as_ref() {
            v = v.min(self.max_value(game, &game.result(state, mv), player, alpha, beta));
            if v <= alpha {
                self.cutoff_count += 1;
                return v;
            }
            beta = beta.min(v);
        }
        v
    }
}
