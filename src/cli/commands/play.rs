//! Play command - play a game against the computer.

use structopt::StructOpt;

use tictactoe::board::{Mark, TicTacToe};
use tictactoe::game::human::HumanStrategy;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::strategy::{Strategy, StrategyKind};

use super::util::run_with_replay;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "alpha-beta")]
    pub opponent: StrategyKind,
    #[structopt(short = "m", long = "mark", default_value = "random")]
    pub mark: Mark,
    #[structopt(long, default_value = "3")]
    pub rows: u8,
    #[structopt(long, default_value = "3")]
    pub cols: u8,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: u8,
}

impl Command for PlayArgs {
    fn execute(self) {
        run_with_replay(|| {
            let game = TicTacToe::new(self.rows, self.cols, self.win_length);
            let (x_strategy, o_strategy): (
                Box<dyn Strategy<TicTacToe>>,
                Box<dyn Strategy<TicTacToe>>,
            ) = match self.mark {
                Mark::X => (Box::new(HumanStrategy), self.opponent.build()),
                Mark::O => (self.opponent.build(), Box::new(HumanStrategy)),
            };
            GameLoop::new(game, x_strategy, o_strategy, None).run()
        });
    }
}
