//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;

use tictactoe::board::TicTacToe;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::strategy::StrategyKind;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short = "x", long = "x-strategy", default_value = "alpha-beta")]
    pub x_strategy: StrategyKind,
    #[structopt(short = "o", long = "o-strategy", default_value = "minimax")]
    pub o_strategy: StrategyKind,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, default_value = "3")]
    pub rows: u8,
    #[structopt(long, default_value = "3")]
    pub cols: u8,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: u8,
}

impl Command for WatchArgs {
    fn execute(self) {
        let game = TicTacToe::new(self.rows, self.cols, self.win_length);
        GameLoop::new(
            game,
            self.x_strategy.build(),
            self.o_strategy.build(),
            Some(Duration::from_millis(self.delay_ms)),
        )
        .run();
    }
}
