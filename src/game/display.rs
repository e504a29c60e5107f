use std::fmt::Write;
use std::io::{self, Write as IoWrite};

use termion::{clear, cursor};

use crate::board::{Cell, GameState, TicTacToe};

/// Buffered terminal renderer for the interactive modes. Builds a frame
/// in memory, then writes it in one shot to avoid flicker.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    pub fn render_game_state(
        &mut self,
        game: &TicTacToe,
        state: &GameState,
        last_move: Option<Cell>,
        stats: Option<&str>,
    ) {
        self.clear();

        let rows = game.rows();
        let cols = game.cols();

        // Column header
        self.buffer.push_str("   ");
        for col in 0..cols {
            self.buffer
                .push_str(&format!("  {} ", (b'a' + col) as char));
        }
        self.buffer.push('\n');

        self.push_border(cols, "  ┌", "───", "┬", "┐\n");

        // Rows from the top down
        for row in (0..rows).rev() {
            self.buffer.push_str(&format!("{:>2} │", row + 1));
            for col in 0..cols {
                let cell_str = match state.get(Cell::new(row, col)) {
                    Some(mark) => mark.to_string(),
                    None => "·".to_string(),
                };
                self.buffer.push_str(&format!(" {} │", cell_str));
            }
            self.buffer.push('\n');

            if row > 0 {
                self.push_border(cols, "  ├", "───", "┼", "┤\n");
            } else {
                self.push_border(cols, "  └", "───", "┴", "┘\n");
            }
        }
        self.buffer.push('\n');

        // Game info
        self.buffer
            .push_str(&format!("Turn: {}\n", state.to_move()));

        if let Some(mv) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", mv));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("{}\n", stats));
        }

        print!("{}", self.buffer);
        let _ = io::stdout().flush();
    }

    fn push_border(&mut self, cols: u8, left: &str, fill: &str, sep: &str, right: &str) {
        self.buffer.push_str(left);
        for col in 0..cols {
            if col > 0 {
                self.buffer.push_str(sep);
            }
            self.buffer.push_str(fill);
        }
        self.buffer.push_str(right);
    }
}
