//! Final legality check of a move against the board and the lexicon.
//!
//! The generator follows the lexicon while it builds words, but it does not look at
//! tiles before the start or after the end of a word. The checks here do.
use crate::board::{Board, Direction, Square, N};
use crate::movegen::Move;
use crate::tiles::{Item, Label, List, Tile};
use crate::Lexicon;
use log::trace;
use std::fmt;

/// The outcome of [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// The word does not fit on the board.
    OffBoard,
    /// A tile differs from the tile already on its square.
    Conflict(Square),
    /// All squares of the word are already occupied.
    NoNewTiles,
    /// The word, extended with the tiles directly before and after it, is not a word.
    ExtendedWordInvalid(String),
    /// The word itself is not a word.
    MainWordInvalid(String),
    /// A new tile forms an invalid perpendicular word.
    CrossWordInvalid(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        *self == Verdict::Valid
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::OffBoard => write!(f, "does not fit on the board"),
            Verdict::Conflict((row, col)) => write!(f, "conflicts with tile at ({}, {})", row, col),
            Verdict::NoNewTiles => write!(f, "places no tiles"),
            Verdict::ExtendedWordInvalid(word) => write!(f, "extended word {} is invalid", word),
            Verdict::MainWordInvalid(word) => write!(f, "word {} is invalid", word),
            Verdict::CrossWordInvalid(word) => write!(f, "cross word {} is invalid", word),
        }
    }
}

/// A word formed by a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormedWord {
    /// The word in uppercase.
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

fn labels_to_string(labels: &[Label]) -> String {
    labels.iter().map(|&label| (b'A' + label - 1) as char).collect()
}

/// Labels of the run of tiles that ends right before `start` on the line.
fn run_before(board: &Board, direction: Direction, line: usize, start: usize) -> Vec<Label> {
    let cells = board.line(direction, line);
    let first = cells[0..start]
        .iter()
        .rposition(|cell| cell.is_empty())
        .map_or(0, |p| p + 1);
    cells[first..start].iter().map(Item::label).collect()
}

/// Labels of the run of tiles that starts at `end` on the line.
fn run_after(board: &Board, direction: Direction, line: usize, end: usize) -> Vec<Label> {
    let cells = board.line(direction, line);
    let last = cells[end..N]
        .iter()
        .position(|cell| cell.is_empty())
        .map_or(N, |p| p + end);
    cells[end..last].iter().map(Item::label).collect()
}

/// Check placement on the board: fit, conflicts, and at least one new tile.
fn check_placement(board: &Board, mv: &Move) -> Verdict {
    let len = mv.word.len();
    let (line, pos) = mv.direction.line_pos(mv.row, mv.col);
    if len == 0 || line >= N || pos + len > N {
        return Verdict::OffBoard;
    }
    let mut new_tiles = 0;
    for (k, tile) in mv.word.iter().enumerate() {
        let (r, c) = mv.direction.step(mv.row, mv.col, k);
        match board.tile_at(r, c) {
            None => new_tiles += 1,
            Some(existing) if existing.label() == tile.label() => {}
            Some(_) => return Verdict::Conflict((r, c)),
        }
    }
    if new_tiles == 0 {
        return Verdict::NoNewTiles;
    }
    Verdict::Valid
}

/// The perpendicular run through the new `tile` at `row`, `col`: its labels and start.
/// None if the tile has no neighbours in that direction.
fn cross_run(board: &Board, direction: Direction, row: usize, col: usize, tile: Tile) -> Option<(Vec<Label>, Square)> {
    let cross = direction.perpendicular();
    let (line, pos) = cross.line_pos(row, col);
    let (before, after) = board.line(cross, line).flanking_labels(pos);
    if before.is_empty() && after.is_empty() {
        return None;
    }
    let start = cross.square(line, pos - before.len());
    let mut labels = before;
    labels.push(tile.label());
    labels.extend(after);
    Some((labels, start))
}

/// Check `mv` on `board`, stopping at the first failure.
///
/// 1. The tiles directly before and after the word extend it; if there are any, the
///    extended run must be a word. Otherwise the word itself must be a word.
/// 2. Every perpendicular run of more than one tile through a new tile must be a word.
/// ## Examples
/// ```
/// use scrabble_engine::{validator, Board, Codec, Direction, Lexicon, Move, Verdict};
/// let lexicon = Lexicon::from_words(&["word", "way", "away"]);
/// let mut board = Board::new();
/// board.play_word("B", 7, 6, Direction::Across)?;
/// let mv = Move {
///     word: Codec::default().encode_items("WORD")?,
///     row: 7,
///     col: 7,
///     direction: Direction::Across,
///     score: 0,
///     used: Codec::default().encode_items("WORD")?,
///     equity: 0.0,
/// };
/// assert_eq!(
///     validator::check(&board, &lexicon, &mv),
///     Verdict::ExtendedWordInvalid("BWORD".into())
/// );
/// # Ok::<(), scrabble_engine::Error>(())
/// ```
pub fn check(board: &Board, lexicon: &Lexicon, mv: &Move) -> Verdict {
    let placement = check_placement(board, mv);
    if !placement.is_valid() {
        return placement;
    }
    let (line, pos) = mv.direction.line_pos(mv.row, mv.col);
    let before = run_before(board, mv.direction, line, pos);
    let after = run_after(board, mv.direction, line, pos + mv.word.len());
    let word = mv.word.labels();
    if before.is_empty() && after.is_empty() {
        if !lexicon.is_word_labels(&word) {
            return Verdict::MainWordInvalid(labels_to_string(&word));
        }
    } else {
        let extended: Vec<Label> = before.into_iter().chain(word).chain(after).collect();
        if !lexicon.is_word_labels(&extended) {
            return Verdict::ExtendedWordInvalid(labels_to_string(&extended));
        }
    }
    for (k, &tile) in mv.word.iter().enumerate() {
        let (r, c) = mv.direction.step(mv.row, mv.col, k);
        if board.is_occupied(r, c) {
            continue;
        }
        if let Some((labels, _)) = cross_run(board, mv.direction, r, c, tile) {
            if !lexicon.is_word_labels(&labels) {
                return Verdict::CrossWordInvalid(labels_to_string(&labels));
            }
        }
    }
    Verdict::Valid
}

/// True if `mv` can be played on `board`. See [`check`].
pub fn is_valid(board: &Board, lexicon: &Lexicon, mv: &Move) -> bool {
    let verdict = check(board, lexicon, mv);
    if !verdict.is_valid() {
        trace!("rejected {}: {}", mv, verdict);
    }
    verdict.is_valid()
}

/// The words `mv` forms on `board`: the main word including any tiles it extends, then
/// the perpendicular words through its new tiles. Nothing is checked against a lexicon.
pub fn formed_words(board: &Board, mv: &Move) -> Vec<FormedWord> {
    if !matches!(check_placement(board, mv), Verdict::Valid) {
        return Vec::new();
    }
    let (line, pos) = mv.direction.line_pos(mv.row, mv.col);
    let before = run_before(board, mv.direction, line, pos);
    let after = run_after(board, mv.direction, line, pos + mv.word.len());
    let (row, col) = mv.direction.square(line, pos - before.len());
    let main: Vec<Label> = before
        .into_iter()
        .chain(mv.word.labels())
        .chain(after)
        .collect();
    let mut words = vec![FormedWord {
        word: labels_to_string(&main),
        row,
        col,
        direction: mv.direction,
    }];
    for (k, &tile) in mv.word.iter().enumerate() {
        let (r, c) = mv.direction.step(mv.row, mv.col, k);
        if board.is_occupied(r, c) {
            continue;
        }
        if let Some((labels, (row, col))) = cross_run(board, mv.direction, r, c, tile) {
            words.push(FormedWord {
                word: labels_to_string(&labels),
                row,
                col,
                direction: mv.direction.perpendicular(),
            });
        }
    }
    words
}
