//! Player strategies: uniform `choose_move` contract over any [`Game`],
//! with random, minimax-backed and alpha-beta-backed variants. The
//! interactive human variant lives in the driver layer and implements
//! the same trait.

use std::str::FromStr;

use crate::searcher::{AlphaBeta, Game, Minimax};

/// Picks a move for the side to play. Returns `None` only when
/// `actions(state)` is empty (pass/forfeit the turn).
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Option<G::Move>;

    /// States evaluated while choosing the last move, for strategies
    /// that search.
    fn visited_state_count(&self) -> Option<usize> {
        None
    }
}

/// Uniformly random choice among the legal moves.
pub struct RandomStrategy;

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Option<G::Move> {
        let moves = game.actions(state);
        let moves = moves.as_ref();
        if moves.is_empty() {
            return None;
        }
        Some(moves[fastrand::usize(..moves.len())])
    }
}

/// Optimal play via exhaustive minimax.
pub struct MinimaxStrategy {
    searcher: Minimax,
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self {
            searcher: Minimax::new(),
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for MinimaxStrategy {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Option<G::Move> {
        self.searcher.search(game, state)
    }

    fn visited_state_count(&self) -> Option<usize> {
        Some(self.searcher.visited_state_count())
    }
}

/// Optimal play via alpha-beta pruning; same moves as
/// [`MinimaxStrategy`], fewer visited states.
pub struct AlphaBetaStrategy {
    searcher: AlphaBeta,
}

impl AlphaBetaStrategy {
    pub fn new() -> Self {
        Self {
            searcher: AlphaBeta::new(),
        }
    }
}

impl Default for AlphaBetaStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for AlphaBetaStrategy {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Option<G::Move> {
        self.searcher.search(game, state)
    }

    fn visited_state_count(&self) -> Option<usize> {
        Some(self.searcher.visited_state_count())
    }
}

/// Computer opponent selection, used for parsing cli args.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StrategyKind {
    Random,
    Minimax,
    AlphaBeta,
}

impl StrategyKind {
    pub fn build<G: Game + 'static>(&self) -> Box<dyn Strategy<G>> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new()),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaStrategy::new()),
        }
    }
}

type ParseError = &'static str;
impl FromStr for StrategyKind {
    type Err = ParseError;
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "random" => Ok(StrategyKind::Random),
            "minimax" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" => Ok(StrategyKind::AlphaBeta),
            _ => Err("invalid strategy; options are: random, minimax, alpha-beta"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TicTacToe;

    #[test]
    fn test_random_strategy_plays_a_legal_move() {
        let game = TicTacToe::classic();
        let state = game.initial_state();

        let mv = RandomStrategy
            .choose_move(&game, &state)
            .expect("empty board has moves");
        assert!(state.moves().contains(&mv));
    }

    #[test]
    fn test_search_strategies_agree() {
        let game = TicTacToe::classic();
        let state = game.initial_state();

        let minimax_move = MinimaxStrategy::new().choose_move(&game, &state);
        let alpha_beta_move = AlphaBetaStrategy::new().choose_move(&game, &state);

        assert!(minimax_move.is_some());
        assert_eq!(minimax_move, alpha_beta_move);
    }

    #[test]
    fn test_strategies_report_visited_states() {
        let game = TicTacToe::classic();
        let state = game.initial_state();

        let mut strategy = AlphaBetaStrategy::new();
        Strategy::<TicTacToe>::choose_move(&mut strategy, &game, &state);
        assert!(Strategy::<TicTacToe>::visited_state_count(&strategy).unwrap() > 0);

        assert!(Strategy::<TicTacToe>::visited_state_count(&RandomStrategy).is_none());
    }

    #[test]
    fn test_parse_strategy_kind() {
        assert_eq!(StrategyKind::Random, "random".parse().unwrap());
        assert_eq!(StrategyKind::Minimax, "minimax".parse().unwrap());
        assert_eq!(StrategyKind::AlphaBeta, "alpha-beta".parse().unwrap());
        assert!("montecarlo".parse::<StrategyKind>().is_err());
    }
}
