use crate::Error;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

/// Top left quarter of the standard board, including the middle row and column.
const STANDARD_QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

/// A premium square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Premium {
    NoBonus,
    /// The centre square: the first word must cover it, and it doubles the word.
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Premium::{LetterBonus, NoBonus, Start, WordBonus};

impl Premium {
    /// Multiplier for a letter newly placed on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    /// Multiplier for a word with a letter newly placed on this square.
    pub fn word_multiplier(self) -> u32 {
        match self {
            WordBonus(n) => n,
            Start => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Premium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Premium; N]; N];

/// Premium layout of the board, 15x15 squares, indexed `[row][col]`.
///
/// The standard layout has 8 triple word, 17 double word (including the centre),
/// 12 triple letter and 24 double letter squares.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard layout.
    /// ## Example
    /// ```
    /// # use scrabble_engine::{Grid, Premium};
    /// let grid = Grid::default();
    /// assert_eq!(grid[7][7], Premium::Start);
    /// assert_eq!(grid[0][0], Premium::WordBonus(3));
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&STANDARD_QUARTER_BOARD)
    }
}

impl Grid {
    fn empty() -> Grid {
        Grid([[NoBonus; N]; N])
    }

    /// Mirror a quarter board horizontally and vertically.
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut board = Grid::empty();
        for (i, row) in qb.iter().enumerate() {
            for (j, token) in row.split(' ').enumerate() {
                let val = token
                    .parse()
                    .unwrap_or_else(|_| panic!("bad quarter board token {}", token));
                board[i][j] = val;
                board[N - i - 1][j] = val;
                board[i][N - j - 1] = val;
                board[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// Premium at `row`, `col`.
    pub fn premium(&self, row: usize, col: usize) -> Premium {
        self.0[row][col]
    }

    /// Get board squares as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Premium::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements separated by whitespace.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Premium`.
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let tokens: Vec<&str> = row.as_ref().split_whitespace().collect();
            if tokens.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    tokens.len(),
                ));
            }
            for (j, &token) in tokens.iter().enumerate() {
                board[i][j] = token.parse()?;
            }
        }
        Ok(board)
    }
}
