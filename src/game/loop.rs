use std::fmt;
use std::time::{Duration, Instant};

use crate::board::{Cell, Mark, TicTacToe};
use crate::game::display::GameDisplay;
use crate::searcher::Game;
use crate::strategy::Strategy;

/// Terminal utility mapped to the three possible results.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameOutcome {
    Win(Mark),
    Tie,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{} wins!", mark),
            GameOutcome::Tie => write!(f, "It is a tie."),
        }
    }
}

/// Drives one game: alternates the two strategies, applies `result` to
/// advance, renders between moves and reports the outcome. All rule
/// logic stays behind the [`Game`] contract; the loop itself never
/// touches a board directly.
pub struct GameLoop {
    game: TicTacToe,
    x_strategy: Box<dyn Strategy<TicTacToe>>,
    o_strategy: Box<dyn Strategy<TicTacToe>>,
    display: GameDisplay,
    move_delay: Option<Duration>,
}

impl GameLoop {
    pub fn new(
        game: TicTacToe,
        x_strategy: Box<dyn Strategy<TicTacToe>>,
        o_strategy: Box<dyn Strategy<TicTacToe>>,
        move_delay: Option<Duration>,
    ) -> Self {
        Self {
            game,
            x_strategy,
            o_strategy,
            display: GameDisplay::new(),
            move_delay,
        }
    }

    pub fn run(&mut self) -> GameOutcome {
        let mut state = self.game.initial_state();
        let mut last_move: Option<Cell> = None;
        let mut stats: Option<String> = None;

        loop {
            self.display
                .render_game_state(&self.game, &state, last_move, stats.as_deref());

            if self.game.terminal_test(&state) {
                break;
            }

            let mover = self.game.to_move(&state);
            let strategy = match mover {
                Mark::X => &mut self.x_strategy,
                Mark::O => &mut self.o_strategy,
            };

            let started = Instant::now();
            match strategy.choose_move(&self.game, &state) {
                Some(mv) => {
                    stats = strategy.visited_state_count().map(|count| {
                        format!(
                            "{} searched {} states in {:?}",
                            mover,
                            count,
                            started.elapsed()
                        )
                    });
                    state = self.game.result(&state, mv);
                    last_move = Some(mv);
                    if let Some(delay) = self.move_delay {
                        std::thread::sleep(delay);
                    }
                }
                // No legal moves for the side to play: the game is
                // exhausted, score it as it stands.
                None => break,
            }
        }

        let outcome = match self.game.utility(&state, Mark::X) {
            u if u > 0 => GameOutcome::Win(Mark::X),
            u if u < 0 => GameOutcome::Win(Mark::O),
            _ => GameOutcome::Tie,
        };
        println!("Game over. {}", outcome);
        outcome
    }
}
