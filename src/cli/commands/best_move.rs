//! Best-move command - analyze a single position with the search engine.

use std::process;
use std::time::Instant;

use structopt::StructOpt;

use tictactoe::board::grid::parse_grid;
use tictactoe::searcher::{AlphaBeta, Minimax};
use tictactoe::strategy::StrategyKind;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(
        long = "position",
        help = "Grid string, rows top to bottom, e.g. `x.o/.x./...`"
    )]
    pub position: String,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: u8,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub algorithm: StrategyKind,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let (game, state) = match parse_grid(&self.position, self.win_length) {
            Ok(parsed) => parsed,
            Err(error) => {
                eprintln!("invalid position: {}", error);
                process::exit(1);
            }
        };

        let started = Instant::now();
        let (best_move, score, visited) = match self.algorithm {
            StrategyKind::Minimax => {
                let mut searcher = Minimax::new();
                let best = searcher.search(&game, &state);
                (best, searcher.last_score(), searcher.visited_state_count())
            }
            StrategyKind::AlphaBeta => {
                let mut searcher = AlphaBeta::new();
                let best = searcher.search(&game, &state);
                (best, searcher.last_score(), searcher.visited_state_count())
            }
            StrategyKind::Random => {
                eprintln!("best-move requires a search algorithm; options are: minimax, alpha-beta");
                process::exit(1);
            }
        };
        let duration = started.elapsed();

        match best_move {
            Some(mv) => {
                println!("Best move: {}", mv);
                println!(
                    "* Score: {}",
                    score.map_or("-".to_string(), |s| s.to_string())
                );
                println!("* States searched: {} in {:?}", visited, duration);
            }
            None => println!("No legal moves from this position."),
        }
    }
}
