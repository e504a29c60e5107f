//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs, Command,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "A generalized m,n,k TicTacToe engine with exhaustive minimax and alpha-beta search"
)]
pub enum TicTacToeCli {
    #[structopt(
        name = "play",
        about = "Play a game against the computer. Choose its strategy with `--opponent` (random, minimax or alpha-beta; default: alpha-beta). Your mark is chosen at random unless you specify with `--mark`. Board shape is set with `--rows`, `--cols` and `--win-length` (default: the classic 3,3,3 game)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. Each side's strategy is selectable with `--x-strategy` and `--o-strategy`; `--delay` slows the moves down for reading."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Determine the best move from a given position, provided as a grid string with `--position` (e.g. `x.o/.x./...`, rows top to bottom). Reports the selected cell, its backed-up score and the number of states searched."
    )]
    BestMove(BestMoveArgs),
}

impl Command for TicTacToeCli {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::Pvp(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::BestMove(cmd) => cmd.execute(),
        }
    }
}
