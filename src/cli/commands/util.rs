//! Shared utilities for CLI commands.

use tictactoe::game::r#loop::GameOutcome;
use tictactoe::input_handler;

/// Runs games until the player declines the replay prompt, mirroring the
/// classic "type 1 to play again" flow as a plain loop.
pub(crate) fn run_with_replay<F>(mut play_one: F)
where
    F: FnMut() -> GameOutcome,
{
    loop {
        play_one();
        println!("Type 1 to play again (q to quit):");
        match input_handler::parse_replay_input() {
            Ok(true) => continue,
            Ok(false) => break,
            Err(_) => break,
        }
    }
}
