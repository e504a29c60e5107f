use std::process;

use crate::board::{Cell, GameState, TicTacToe};
use crate::input_handler::{self, InputError};
use crate::searcher::Game;
use crate::strategy::Strategy;

/// Interactive strategy backed by stdin. Re-prompts until the entered
/// cell is actually legal, so the game model never sees an illegal move
/// from a human.
pub struct HumanStrategy;

impl Strategy<TicTacToe> for HumanStrategy {
    fn choose_move(&mut self, game: &TicTacToe, state: &GameState) -> Option<Cell> {
        let legal = game.actions(state);
        let legal = legal.as_ref();
        if legal.is_empty() {
            println!("No legal moves: passing turn.");
            return None;
        }

        let listed: Vec<String> = legal.iter().map(|cell| cell.to_string()).collect();
        println!("Available moves: {}", listed.join(" "));
        println!("Your move? (q to quit)");

        loop {
            match input_handler::parse_move_input() {
                Ok(cell) if legal.contains(&cell) => return Some(cell),
                Ok(_) => println!("This is not a legal move, please play again:"),
                Err(InputError::InvalidInput { input }) => {
                    println!("Invalid move {:?}, please enter a valid move:", input)
                }
                Err(InputError::UserExit) => process::exit(0),
                Err(InputError::IOError { error }) => {
                    eprintln!("error reading input: {}", error);
                    process::exit(1);
                }
            }
        }
    }
}
