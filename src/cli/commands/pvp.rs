//! Pvp command - play a game against another human.

use structopt::StructOpt;

use tictactoe::board::TicTacToe;
use tictactoe::game::human::HumanStrategy;
use tictactoe::game::r#loop::GameLoop;

use super::util::run_with_replay;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long, default_value = "3")]
    pub rows: u8,
    #[structopt(long, default_value = "3")]
    pub cols: u8,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: u8,
}

impl Command for PvpArgs {
    fn execute(self) {
        run_with_replay(|| {
            let game = TicTacToe::new(self.rows, self.cols, self.win_length);
            GameLoop::new(
                game,
                Box::new(HumanStrategy),
                Box::new(HumanStrategy),
                None,
            )
            .run()
        });
    }
}
