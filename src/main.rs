use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::TicTacToeCli;

mod cli;

fn main() {
    env_logger::init();
    TicTacToeCli::from_args().execute();
}
