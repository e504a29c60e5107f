use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-z])([1-9][0-9]?)$").expect("CELL_RE regex should be valid"));

/// A grid coordinate. Zero-indexed internally, rendered in algebraic
/// notation where `a1` is the bottom-left cell (column `a`, row `1`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Steps by `delta` along a line direction. Returns `None` when the
    /// step would leave the `u8` coordinate range; cells beyond the board
    /// edge are simply absent from the board mapping.
    pub fn offset(&self, delta: (i16, i16)) -> Option<Cell> {
        let row = self.row as i16 + delta.0;
        let col = self.col as i16 + delta.1;
        if row < 0 || col < 0 || row > u8::MAX as i16 || col > u8::MAX as i16 {
            return None;
        }
        Some(Cell::new(row as u8, col as u8))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

type ParseError = &'static str;
impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = match CELL_RE.captures(input) {
            Some(captures) => captures,
            None => return Err("invalid cell; use algebraic notation like `b2`"),
        };
        let col = caps[1].as_bytes()[0] - b'a';
        let row: u8 = caps[2].parse().map_err(|_| "invalid row number")?;
        Ok(Cell::new(row - 1, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(Cell::new(1, 1), Cell::from_str("b2").unwrap());
        assert_eq!(Cell::new(0, 0), Cell::from_str("a1").unwrap());
        assert_eq!(Cell::new(9, 2), Cell::from_str("c10").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Cell::from_str("22").is_err());
        assert!(Cell::from_str("b0").is_err());
        assert!(Cell::from_str("bb2").is_err());
        assert!(Cell::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let cell = Cell::new(2, 0);
        assert_eq!("a3", cell.to_string());
        assert_eq!(cell, cell.to_string().parse().unwrap());
    }

    #[test]
    fn test_offset() {
        let cell = Cell::new(1, 1);
        assert_eq!(Some(Cell::new(2, 2)), cell.offset((1, 1)));
        assert_eq!(Some(Cell::new(0, 1)), cell.offset((-1, 0)));
        assert_eq!(None, Cell::new(0, 0).offset((-1, 0)));
    }
}
