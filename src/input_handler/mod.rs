//! Move input parsing and validation for the interactive modes.

use std::io;
use std::str::FromStr;

use thiserror::Error;

use crate::board::Cell;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exited")]
    UserExit,
}

fn read_line() -> Result<String, InputError> {
    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    if bytes == 0 {
        // stdin closed
        return Err(InputError::UserExit);
    }
    Ok(input.trim().to_string())
}

/// Reads one line from stdin and parses it as a cell in algebraic
/// notation (`b2`). `q` quits.
pub fn parse_move_input() -> Result<Cell, InputError> {
    let input = read_line()?;
    if input.eq_ignore_ascii_case("q") {
        return Err(InputError::UserExit);
    }
    Cell::from_str(&input).map_err(|_| InputError::InvalidInput { input })
}

/// Replay prompt after a finished game: `1` plays again, `q` quits,
/// anything else re-prompts.
pub fn parse_replay_input() -> Result<bool, InputError> {
    loop {
        let input = read_line()?;
        match input.as_str() {
            "1" => return Ok(true),
            "q" | "Q" => return Ok(false),
            _ => println!("Enter a valid input (1 to play again, q to quit):"),
        }
    }
}
