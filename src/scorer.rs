//! Points for a word placed on the board.
//!
//! A newly placed tile gets the letter multiplier of its square, and the word
//! multipliers of all newly covered squares apply to the whole word. Tiles already on
//! the board count at face value. Every perpendicular word formed by a new tile is
//! scored the same way, and playing all seven rack tiles earns a bonus.
use crate::board::{Board, Direction, N};
use crate::tiles::{Item, Label, Letter, List, Tile, Word};
use crate::Error;
#[cfg(feature = "flame_it")]
use flamer::flame;

/// Bonus for playing all tiles of a full rack in one move.
pub const BINGO_BONUS: u32 = 50;

/// Number of new tiles that earns the [`BINGO_BONUS`].
pub const BINGO_TILES: usize = 7;

/// Face value per label, index 0 is the blank.
const POINTS: [u32; 27] = [
    0, // blank
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, // A..J
    5, 1, 3, 1, 1, 3, 10, 1, 1, 1, // K..T
    1, 4, 4, 8, 4, 10, // U..Z
];

/// Face value of letter `label`.
#[inline]
pub fn label_points(label: Label) -> u32 {
    POINTS[label as usize]
}

/// Face value of a rack letter, 0 for a blank.
pub fn letter_points(letter: Letter) -> u32 {
    label_points(letter.label())
}

/// Face value of a tile on the board, 0 if it was played from a blank.
/// ## Example
/// ```
/// use scrabble_engine::{scorer::tile_points, Tile};
/// assert_eq!(tile_points(Tile::from_label(26)), 10);
/// assert_eq!(tile_points(Tile::wildcard_from_label(26)), 0);
/// ```
#[inline]
pub fn tile_points(tile: Tile) -> u32 {
    if tile.is_wildcard() {
        0
    } else {
        label_points(tile.label())
    }
}

/// Calculates the score of `word` placed at `row`, `col` in `direction`.
///
/// Squares that already hold a tile are scored with the tile on the board, without
/// premium. The word is not checked against the lexicon.
/// ## Errors
/// If the word would cross the right or bottom border.
/// ## Examples
/// ```
/// use scrabble_engine::{scorer, Board, Codec, Direction, Error, Word};
/// let board = Board::new();
/// let word: Word = Codec::default().encode_items("CAT")?;
/// // C(3) + A(1) + T(1), doubled by the centre square
/// assert_eq!(scorer::score(&board, 7, 6, Direction::Across, &word)?, 10);
/// # Ok::<(), Error>(())
/// ```
pub fn score(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    word: &Word,
) -> Result<u32, Error> {
    let len = word.len();
    let (index, pos) = direction.line_pos(row, col);
    if index >= N || pos + len > N {
        return Err(Error::TilePlacementError {
            row,
            col,
            across: direction == Direction::Across,
            len,
        });
    }
    Ok(score_unchecked(board, row, col, direction, word))
}

/// Score of the perpendicular word through the new `tile` at `row`, `col`, if any.
fn cross_word_points(board: &Board, row: usize, col: usize, direction: Direction, tile: Tile) -> u32 {
    let cross = direction.perpendicular();
    let (index, pos) = cross.line_pos(row, col);
    let line = board.line(cross, index);
    let (start, end) = line.start_end(pos);
    if end - start < 2 {
        return 0;
    }
    let premium = board.premium(row, col);
    let others: u32 = (start..end)
        .filter(|&p| p != pos)
        .filter_map(|p| line[p].tile())
        .map(tile_points)
        .sum();
    (tile_points(tile) * premium.letter_multiplier() + others) * premium.word_multiplier()
}

/// [`score`] without the placement check.
#[cfg_attr(feature = "flame_it", flame)]
pub(crate) fn score_unchecked(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    word: &Word,
) -> u32 {
    let mut word_multiplier = 1;
    let mut word_points = 0;
    let mut cross_points = 0;
    let mut tiles_used = 0;
    for (k, &tile) in word.iter().enumerate() {
        let (r, c) = direction.step(row, col, k);
        match board.tile_at(r, c) {
            Some(existing) => word_points += tile_points(existing),
            None => {
                tiles_used += 1;
                let premium = board.premium(r, c);
                word_points += tile_points(tile) * premium.letter_multiplier();
                word_multiplier *= premium.word_multiplier();
                cross_points += cross_word_points(board, r, c, direction, tile);
            }
        }
    }
    let mut total = word_points * word_multiplier + cross_points;
    if tiles_used == BINGO_TILES {
        total += BINGO_BONUS;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Codec;
    use Direction::{Across, Down};

    type Result<T> = std::result::Result<T, Error>;

    fn word(s: &str) -> Word {
        Codec::default().encode_items(s).unwrap()
    }

    #[test]
    fn test_points_table() {
        let total: u32 = (1..=26).map(label_points).sum();
        assert_eq!(total, 87);
        assert_eq!(letter_points(Letter::blank()), 0);
        assert_eq!(letter_points(Letter::from_label(17)), 10);
        assert_eq!(letter_points(Letter::from_label(11)), 5);
    }

    #[test]
    fn test_first_word() -> Result<()> {
        let board = Board::new();
        assert_eq!(score(&board, 7, 6, Across, &word("CAT"))?, 10);
        assert_eq!(score(&board, 6, 7, Down, &word("DOG"))?, 10);
        // the blank is worth nothing
        assert_eq!(score(&board, 7, 6, Across, &word("cAT"))?, 4);
        Ok(())
    }

    #[test]
    fn test_bingo_without_premiums() -> Result<()> {
        let plain = vec!["-- -- -- -- -- -- -- -- -- -- -- -- -- -- --"; 15];
        let board = Board::new().with_grid_from_strings(&plain)?;
        // 1 + 3 + 3 + 1 + 1 + 1 + 1
        assert_eq!(score(&board, 3, 2, Across, &word("AMBLERS"))?, 11 + BINGO_BONUS);
        // six tiles is no bingo
        assert_eq!(score(&board, 3, 2, Down, &word("AMBLER"))?, 10);
        Ok(())
    }

    #[test]
    fn test_existing_tiles_no_premium() -> Result<()> {
        let mut board = Board::new();
        board.play_word("CAT", 7, 6, Across)?;
        // CATS: S on (7, 9) is plain, C A T already played
        assert_eq!(score(&board, 7, 6, Across, &word("CATS"))?, 6);
        // blank-marked tile on the board keeps zero value
        let mut board = Board::new();
        board.play_word("cAT", 7, 6, Across)?;
        assert_eq!(score(&board, 7, 6, Across, &word("CATS"))?, 3);
        Ok(())
    }

    #[test]
    fn test_cross_words() -> Result<()> {
        let mut board = Board::new();
        board.play_word("CAT", 7, 6, Across)?;
        // AT down from (6, 8) through the T: A on (6, 8) is a double letter
        // main word: A(1 x 2) + T(1) = 3, no cross word
        assert_eq!(score(&board, 6, 8, Down, &word("AT"))?, 3);
        // TA across at row 8, cols 7..8: T under A forms AT, A under T forms TA
        // (8, 8) is a double letter
        // main TA: 1 + 1 x 2 = 3; cross AT: 1 + 1 = 2; cross TA: 1 + 1 x 2 = 3
        assert_eq!(score(&board, 8, 7, Across, &word("TA"))?, 8);
        Ok(())
    }

    #[test]
    fn test_word_premiums_multiply() -> Result<()> {
        let board = Board::new();
        // (0, 0) and (0, 7) are triple word squares
        let w = word("ABCDEFGH");
        let face: u32 = w.iter().map(|&t| tile_points(t)).sum();
        // D on (0, 3) is a double letter
        let expected = (face + 2) * 9;
        assert_eq!(score(&board, 0, 0, Across, &w)?, expected);
        Ok(())
    }

    #[test]
    fn test_placement_error() {
        let board = Board::new();
        assert!(score(&board, 14, 13, Across, &word("CAT")).is_err());
        assert!(score(&board, 13, 14, Down, &word("AT")).is_ok());
    }
}
