use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two players. `X` moves first and is the side whose win is
/// scored positively.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    X = 0,
    O = 1,
}

impl Mark {
    const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn opposite(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Sign of a win for this mark from `X`'s perspective.
    pub fn win_score(&self) -> i16 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark_str = match self {
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{}", mark_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Mark {
    type Err = ParseError;
    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        match mark {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            "random" => Ok(Mark::random()),
            _ => Err("invalid mark; options are: x, o, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Mark::X.opposite(), Mark::O);
        assert_eq!(Mark::O.opposite(), Mark::X);
    }

    #[test]
    fn test_random() {
        assert!(Mark::ALL.contains(&Mark::random()));
    }

    #[test]
    fn test_parse_x() {
        assert_eq!(Mark::X, Mark::from_str("x").unwrap());
    }

    #[test]
    fn test_parse_o() {
        assert_eq!(Mark::O, Mark::from_str("o").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_mark = Mark::from_str("random").unwrap();
        assert!(Mark::ALL.contains(&rand_mark));
    }

    #[test]
    fn test_win_score_antisymmetry() {
        assert_eq!(Mark::X.win_score(), -Mark::O.win_score());
    }
}
