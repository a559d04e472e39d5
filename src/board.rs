use crate::grid::{Grid, Premium};
use crate::labelset::LabelSet;
use crate::tiles::{Cell, Codec, Item, Letter, Letters, List, Row, Tile, Word};
use crate::{Error, Lexicon, Move};

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::trace;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::repeat;
use std::str::FromStr;

/// The dimension of the board: N x N squares
pub const N: usize = 15;

/// Row and column of the centre square.
pub const CENTER: usize = N / 2;

type State = [Row; N];

/// A `(row, col)` coordinate.
pub type Square = (usize, usize);

/// Direction of a word on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Left to right, along a row.
    Across,
    /// Top to bottom, along a column.
    Down,
}

use Direction::{Across, Down};

impl Direction {
    pub fn perpendicular(self) -> Direction {
        match self {
            Across => Down,
            Down => Across,
        }
    }

    /// The line through `(row, col)` in this direction, and the position of the square on it.
    #[inline]
    pub fn line_pos(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Across => (row, col),
            Down => (col, row),
        }
    }

    /// Inverse of [`line_pos`](Direction::line_pos).
    #[inline]
    pub fn square(self, line: usize, pos: usize) -> Square {
        match self {
            Across => (line, pos),
            Down => (pos, line),
        }
    }

    /// The square `k` steps from `(row, col)` in this direction.
    #[inline]
    pub fn step(self, row: usize, col: usize, k: usize) -> Square {
        match self {
            Across => (row, col + k),
            Down => (row + k, col),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Across => write!(f, "across"),
            Down => write!(f, "down"),
        }
    }
}

/// Accepts `across`/`down`, and the short forms `h`/`v`, in any case.
impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "across" | "h" | "horizontal" => Ok(Across),
            "down" | "v" | "vertical" => Ok(Down),
            _ => Err(Error::InvalidDirection(String::from(s))),
        }
    }
}

/// The letters allowed on each empty square, per direction of play.
///
/// For direction `Across` the set holds the letters that form a valid word with the
/// tiles directly above and below the square; for `Down` the tiles to its left and right.
#[derive(Clone, PartialEq)]
pub struct CrossChecks([[[LabelSet; N]; N]; 2]);

impl CrossChecks {
    fn empty() -> CrossChecks {
        CrossChecks([[[LabelSet::new(); N]; N]; 2])
    }

    /// Letters allowed at `(row, col)` for a word played in `direction`.
    /// Empty for an occupied square.
    #[inline]
    pub fn get(&self, row: usize, col: usize, direction: Direction) -> LabelSet {
        let (line, pos) = direction.line_pos(row, col);
        self.0[direction as usize][line][pos]
    }
}

impl fmt::Debug for CrossChecks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let constrained = self
            .0
            .iter()
            .flatten()
            .flatten()
            .filter(|&&set| set != LabelSet::ALL && !set.is_empty())
            .count();
        write!(f, "<CrossChecks: {} constrained>", constrained)
    }
}

/// Represents the state of the board: the premium squares and the tiles played so far.
///
/// The tiles are kept twice: as rows (for words across) and as columns (for words down).
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    horizontal: State,
    vertical: State,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty print the board with row and column numbers.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header: String = (0..N).map(|c| format!("{:>3}", c)).collect();
        writeln!(f, "  {}", header)?;
        for (r, row) in self.horizontal.iter().enumerate() {
            let squares: String = row.iter().map(|cell| format!("{:>3}", cell.to_char())).collect();
            writeln!(f, "{:>2}{}", r, squares)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_text(s)
    }
}

impl Board {
    /// Create a new empty board with the standard premium squares.
    ///
    /// ## Examples
    ///```
    /// use scrabble_engine::Board;
    ///
    /// let board = Board::new();
    /// assert!(board.is_first_move());
    /// assert_eq!(board.anchors(), vec![(7, 7)]);
    ///```
    #[must_use]
    pub fn new() -> Board {
        let empty_row: Row = repeat(Cell::EMPTY).take(N).collect();
        Board {
            grid: Grid::default(),
            horizontal: [empty_row; N],
            vertical: [empty_row; N],
        }
    }

    /// Use `grid` for the premium squares, and return the modified board.
    pub fn with_grid(mut self, grid: Grid) -> Board {
        self.grid = grid;
        self
    }

    /// Set the premium squares from strings, see [`Grid::from_strings`].
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed.
    pub fn with_grid_from_strings<S: AsRef<str>>(self, grid: &[S]) -> Result<Board, Error> {
        Ok(self.with_grid(Grid::from_strings(grid)?))
    }

    /// Parse the board from 15 lines of 15 whitespace separated tokens.
    ///
    /// A token is `.` for an empty square, an uppercase letter for a tile, or a
    /// lowercase letter for a tile played from a blank. Blank lines are ignored.
    /// ## Errors
    /// If the text has the wrong number of rows or columns, or holds another token.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Board, Error};
    /// let mut rows = vec![". . . . . . . . . . . . . . ."; 15];
    /// rows[7] = ". . . . . . C a T . . . . . .";
    /// let board = Board::from_text(&rows.join("\n"))?;
    /// assert!(board.is_occupied(7, 7));
    /// assert_eq!(board.to_text(), rows.join("\n"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_text(text: &str) -> Result<Board, Error> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != N {
            return Err(Error::InvalidRowCount(lines.len()));
        }
        let codec = Codec::default();
        let mut board = Board::new();
        for (r, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != N {
                return Err(Error::InvalidRowLength(String::from(*line), tokens.len()));
            }
            for (c, &token) in tokens.iter().enumerate() {
                let invalid = || Error::InvalidBoardToken(String::from(token));
                if token.chars().count() != 1 {
                    return Err(invalid());
                }
                let code = codec.encode(token).map_err(|_| invalid())?[0];
                let cell = Cell::try_from(code).map_err(|_| invalid())?;
                board.set_cell(r, c, cell);
            }
        }
        Ok(board)
    }

    /// The board as 15 lines of 15 space separated tokens, the inverse of [`from_text`](Board::from_text).
    pub fn to_text(&self) -> String {
        self.horizontal
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Return reference to the premium squares
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Premium of the square at `row`, `col`.
    #[inline]
    pub fn premium(&self, row: usize, col: usize) -> Premium {
        self.grid.premium(row, col)
    }

    /// The row (`Across`) or column (`Down`) with index `index`.
    #[inline]
    pub fn line(&self, direction: Direction, index: usize) -> &Row {
        match direction {
            Across => &self.horizontal[index],
            Down => &self.vertical[index],
        }
    }

    fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.horizontal[row][col] = cell;
        self.vertical[col][row] = cell;
    }

    /// Return tile at `row`, `col`, or None if the square is empty or outside the board.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if row < N && col < N {
            self.horizontal[row][col].tile()
        } else {
            None
        }
    }

    /// Check if the square at `row`, `col` is occupied.
    /// Squares outside the board are never occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_some()
    }

    /// True if no tile has been played yet.
    pub fn is_first_move(&self) -> bool {
        self.horizontal
            .iter()
            .all(|row| row.iter().all(Cell::is_empty))
    }

    fn has_occupied_neighbour(&self, row: usize, col: usize) -> bool {
        (row > 0 && self.is_occupied(row - 1, col))
            || self.is_occupied(row + 1, col)
            || (col > 0 && self.is_occupied(row, col - 1))
            || self.is_occupied(row, col + 1)
    }

    /// The squares a new word must cover one of, in row major order.
    ///
    /// The centre square on an empty board, otherwise every empty square next to a tile.
    pub fn anchors(&self) -> Vec<Square> {
        if self.is_first_move() {
            return vec![(CENTER, CENTER)];
        }
        (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                !self.is_occupied(row, col) && self.has_occupied_neighbour(row, col)
            })
            .collect()
    }

    /// The run of tiles through the occupied square `row`, `col` in `direction`,
    /// with the square where it starts. None if the square is empty.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Board, Direction, Error};
    /// let mut board = Board::new();
    /// board.play_word("CAT", 7, 6, Direction::Across)?;
    /// let (word, start) = board.full_word_at(7, 8, Direction::Across).unwrap();
    /// assert_eq!((word.to_string(), start), ("CAT".to_string(), (7, 6)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn full_word_at(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(Word, Square)> {
        self.tile_at(row, col)?;
        let (index, pos) = direction.line_pos(row, col);
        let line = self.line(direction, index);
        let (start, end) = line.start_end(pos);
        Some((line.tiles(start, end), direction.square(index, start)))
    }

    /// Cross-check sets for one line in `direction`, constrained by the crossing lines.
    #[cfg_attr(feature = "flame_it", flame)]
    fn cross_check_line(&self, lexicon: &Lexicon, direction: Direction, index: usize) -> [LabelSet; N] {
        let crossing = match direction {
            Across => &self.vertical,
            Down => &self.horizontal,
        };
        let mut sets = [LabelSet::new(); N];
        for (pos, line) in crossing.iter().enumerate() {
            if !line[index].is_empty() {
                continue;
            }
            let (before, after) = line.flanking_labels(index);
            sets[pos] = if before.is_empty() && after.is_empty() {
                LabelSet::ALL
            } else {
                lexicon.legal_labels(&before, &after)
            };
        }
        sets
    }

    /// Compute the letters allowed on each empty square, for both directions.
    ///
    /// Must be recomputed after the board changes.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Board, Direction, Lexicon};
    /// let board = Board::new();
    /// let lexicon = Lexicon::from_words(&["cat"]);
    /// let checks = board.cross_checks(&lexicon);
    /// assert_eq!(checks.get(7, 7, Direction::Across).len(), 26);
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn cross_checks(&self, lexicon: &Lexicon) -> CrossChecks {
        let mut checks = CrossChecks::empty();
        for &direction in &[Across, Down] {
            #[cfg(feature = "rayon")]
            let lines: Vec<[LabelSet; N]> = (0..N)
                .into_par_iter()
                .map(|index| self.cross_check_line(lexicon, direction, index))
                .collect();
            #[cfg(not(feature = "rayon"))]
            let lines: Vec<[LabelSet; N]> = (0..N)
                .map(|index| self.cross_check_line(lexicon, direction, index))
                .collect();
            for (index, sets) in lines.into_iter().enumerate() {
                checks.0[direction as usize][index] = sets;
            }
        }
        trace!("{:?}", checks);
        checks
    }

    /// Check that `word` can be put at `row`, `col` in `direction`, and return the
    /// rack letters it takes: the tiles on empty squares, a blank for a lowercase tile.
    /// ## Errors
    /// - If the word does not fit on the board.
    /// - If a tile differs from the letter already on its square.
    pub fn try_word(
        &self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Letters, Error> {
        let len = word.len();
        let (index, pos) = direction.line_pos(row, col);
        if index >= N || pos + len > N {
            return Err(Error::TilePlacementError {
                row,
                col,
                across: direction == Across,
                len,
            });
        }
        let mut used = Letters::new();
        for (k, &tile) in word.iter().enumerate() {
            let (r, c) = direction.step(row, col, k);
            match self.tile_at(r, c) {
                None => used.push(Letter::from_tile(tile)),
                Some(existing) if existing.label() == tile.label() => {}
                Some(_) => return Err(Error::TileReplaceError { row: r, col: c }),
            }
        }
        Ok(used)
    }

    /// Put `word` on the board. Tiles already on the board are kept as they are.
    /// Returns the rack letters used, in the order of use.
    /// ## Errors
    /// See [`try_word`](Board::try_word); the board is not modified on error.
    pub fn place(
        &mut self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Letters, Error> {
        let used = self.try_word(word, row, col, direction)?;
        for (k, &tile) in word.iter().enumerate() {
            let (r, c) = direction.step(row, col, k);
            if !self.is_occupied(r, c) {
                self.set_cell(r, c, tile.into_cell());
            }
        }
        Ok(used)
    }

    /// [`place`](Board::place) a generated move.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Letters, Error> {
        self.place(&mv.word, mv.row, mv.col, mv.direction)
    }

    /// Encode `word` (lowercase for blanks) and [`place`](Board::place) it.
    /// ## Errors
    /// If `word` cannot be encoded as tiles, or cannot be placed.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Board, Direction, Error};
    /// let mut board = Board::new();
    /// let used = board.play_word("qUIz", 7, 7, Direction::Down)?;
    /// assert_eq!(used.to_string(), "*UI*");
    /// assert!(board.is_occupied(10, 7));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play_word(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Letters, Error> {
        let word: Word = Codec::default().encode_items(word)?;
        self.place(&word, row, col, direction)
    }

    /// All tiles on the board, in row major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.horizontal
            .iter()
            .flat_map(|row| row.iter().filter_map(Cell::tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . D . . . . . . .",
        ". . . . . C A T S . . . . . .",
        ". . . . . . . G . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
        ". . . . . . . . . . . . . . .",
    ];

    fn test_board() -> Board {
        Board::from_text(&TEST_STATE.join("\n")).unwrap()
    }

    #[test]
    fn test_state() -> Result<()> {
        let board = test_board();
        assert!(board.is_occupied(7, 5));
        assert!(board.is_occupied(6, 7));
        assert!(!board.is_occupied(0, 0));
        assert!(!board.is_occupied(15, 0));
        assert!(!board.is_first_move());
        assert_eq!(board.line(Across, 7).to_string(), ".....CATS......");
        assert_eq!(board.line(Down, 7).to_string(), "......DTG......");
        assert_eq!(board.to_text(), TEST_STATE.join("\n"));
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        let mut rows: Vec<String> = TEST_STATE.iter().map(|s| s.to_string()).collect();
        rows.pop();
        assert!(matches!(
            Board::from_text(&rows.join("\n")),
            Err(Error::InvalidRowCount(14))
        ));
        rows.push(String::from(". . . ."));
        assert!(matches!(
            Board::from_text(&rows.join("\n")),
            Err(Error::InvalidRowLength(_, 4))
        ));
        for token in &["*", "1", "AB", "?"] {
            rows[14] = format!("{} . . . . . . . . . . . . . .", token);
            assert!(
                matches!(Board::from_text(&rows.join("\n")), Err(Error::InvalidBoardToken(_))),
                "token {} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_blank_lines_ignored() -> Result<()> {
        let text = format!("\n{}\n\n", TEST_STATE.join("\n\n"));
        assert_eq!(text.parse::<Board>()?, test_board());
        Ok(())
    }

    #[test]
    fn test_anchors() {
        let board = test_board();
        let anchors = board.anchors();
        assert_eq!(anchors.len(), 10);
        assert_eq!(anchors[0], (5, 7));
        assert_eq!(anchors[anchors.len() - 1], (9, 7));
        assert!(anchors.contains(&(7, 4)));
        assert!(anchors.contains(&(7, 9)));
        assert!(anchors.contains(&(6, 8)));
        assert!(!anchors.contains(&(7, 7)));
        assert_eq!(Board::new().anchors(), vec![(CENTER, CENTER)]);
    }

    #[test]
    fn test_full_word_at() {
        let board = test_board();
        let (word, start) = board.full_word_at(7, 7, Down).unwrap();
        assert_eq!(word.to_string(), "DTG");
        assert_eq!(start, (6, 7));
        let (word, start) = board.full_word_at(7, 6, Across).unwrap();
        assert_eq!(word.to_string(), "CATS");
        assert_eq!(start, (7, 5));
        let (word, _) = board.full_word_at(7, 5, Down).unwrap();
        assert_eq!(word.to_string(), "C");
        assert!(board.full_word_at(0, 0, Across).is_none());
    }

    #[test]
    fn test_cross_checks() {
        let lexicon = Lexicon::from_words(&["cat", "cats", "at", "as", "ta", "ad"]);
        let board = test_board();
        let checks = board.cross_checks(&lexicon);
        // above A, across: ?A must be a word
        let v: Vec<u8> = checks.get(6, 6, Across).into();
        assert_eq!(v, vec![20]);
        // below A: A? gives AD, AS, AT
        let v: Vec<u8> = checks.get(8, 6, Across).into();
        assert_eq!(v, vec![4, 19, 20]);
        // right of CATS when playing down: CATS? is no word
        assert!(checks.get(7, 9, Down).is_empty());
        // unconstrained square
        assert_eq!(checks.get(0, 0, Across), LabelSet::ALL);
        assert_eq!(checks.get(7, 9, Across), LabelSet::ALL);
        // occupied square
        assert!(checks.get(7, 7, Across).is_empty());
    }

    #[test]
    fn test_center_cross_checks() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let checks = Board::new().cross_checks(&lexicon);
        assert_eq!(checks.get(CENTER, CENTER, Across), LabelSet::ALL);
        assert_eq!(checks.get(CENTER, CENTER, Down), LabelSet::ALL);
    }

    #[test]
    fn test_play_word() -> Result<()> {
        let mut board = test_board();
        let used = board.play_word("CATs", 7, 5, Across)?;
        assert!(used.is_empty());
        // the tile on the board keeps its value
        assert_eq!(board.tile_at(7, 8), Some(Tile::from_label(19)));
        let used = board.play_word("DtGS", 6, 7, Down)?;
        assert_eq!(used.to_string(), "S");
        assert_eq!(board.line(Down, 7).to_string(), "......DTGS.....");
        Ok(())
    }

    #[test]
    fn test_tile_replace_error() {
        let mut board = test_board();
        let before = board.clone();
        let result = board.play_word("DOG", 6, 7, Down);
        assert!(matches!(result, Err(Error::TileReplaceError { row: 7, col: 7 })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_placement_error() {
        let mut board = Board::new();
        assert!(matches!(
            board.play_word("ZEBRA", 7, 12, Across),
            Err(Error::TilePlacementError { len: 5, .. })
        ));
        assert!(board.play_word("ZEBRA", 10, 7, Down).is_ok());
    }

    #[test]
    fn test_direction() -> Result<()> {
        assert_eq!("across".parse::<Direction>()?, Across);
        assert_eq!("V".parse::<Direction>()?, Down);
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Down.to_string(), "down");
        assert_eq!(Across.perpendicular(), Down);
        assert_eq!(Down.step(3, 4, 2), (5, 4));
        Ok(())
    }

    #[test]
    fn test_display() {
        let board = test_board();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), N + 1);
        assert!(lines[8].starts_with(" 7"));
        assert!(lines[8].contains("  C  A  T  S"));
    }
}
