use crate::board::Board;
use crate::rack::letter_symbol;
use crate::tiles::{Codec, Item, Letter, Letters, List, NLETTERS};
use crate::Error;
use multiset::HashMultiSet;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Number of tiles per label in a full set. Index 0 is the blank.
const DISTRIBUTION: [usize; NLETTERS + 1] = [
    2, // blank
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, // A..J
    1, 4, 2, 6, 8, 2, 1, 6, 4, 6, // K..T
    4, 2, 2, 1, 2, 1, // U..Z
];

/// The tiles not yet drawn.
///
/// Tiles are drawn from a uniformly random position, so the order of the bag
/// does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileBag(Vec<Letter>);

fn letter_for(index: usize) -> Letter {
    if index == 0 {
        Letter::blank()
    } else {
        Letter::from_label(index as u8)
    }
}

/// Counts of the full tile set.
fn full_set() -> HashMultiSet<Letter> {
    let mut set = HashMultiSet::new();
    for (index, &count) in DISTRIBUTION.iter().enumerate() {
        set.insert_times(letter_for(index), count);
    }
    set
}

impl TileBag {
    /// A full bag of 100 tiles, blanks included.
    /// ## Example
    /// ```
    /// use scrabble_engine::TileBag;
    /// assert_eq!(TileBag::full().len(), 100);
    /// ```
    pub fn full() -> TileBag {
        let tiles = DISTRIBUTION
            .iter()
            .enumerate()
            .flat_map(|(index, &count)| std::iter::repeat(letter_for(index)).take(count))
            .collect();
        TileBag(tiles)
    }

    /// An empty bag.
    pub fn new() -> TileBag {
        TileBag(Vec::new())
    }

    /// Parse a bag from text, one character per tile, `*` or `?` for a blank.
    /// Whitespace is ignored.
    /// ## Errors
    /// If a character is not a rack letter.
    pub fn from_text(text: &str) -> Result<TileBag, Error> {
        let codec = Codec::default();
        let mut tiles = Vec::new();
        for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
            let code = codec.encode(&ch.to_string())?[0];
            tiles.push(Letter::try_from(code)?);
        }
        Ok(TileBag(tiles))
    }

    /// The tiles that are neither on `board` nor on `rack`: the tiles still in the bag
    /// or on the opponent's rack, sorted with the blanks last.
    /// ## Panics
    /// If the board and the rack hold more of a letter than a full set.
    pub fn unseen(board: &Board, rack: &Letters) -> TileBag {
        let mut set = full_set();
        let seen = board.tiles().map(Letter::from_tile).chain(rack.iter().copied());
        for letter in seen {
            assert!(
                set.remove(&letter),
                "more {} tiles in play than in a full set",
                letter
            );
        }
        let mut tiles: Vec<Letter> = set.iter().copied().collect();
        tiles.sort_by_key(|letter| if letter.is_blank() { 27 } else { letter.label() });
        TileBag(tiles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.0.iter()
    }

    /// Remove a tile from a random position.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Letter> {
        if self.0.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.0.len());
        Some(self.0.swap_remove(index))
    }

    /// Draw tiles until `rack` holds `rack_size` tiles or the bag is empty.
    pub fn refill<R: Rng + ?Sized>(&mut self, rack: &mut Letters, rack_size: usize, rng: &mut R) {
        while rack.len() < rack_size {
            match self.draw(rng) {
                Some(letter) => rack.push(letter),
                None => break,
            }
        }
    }

    /// Return tiles to the bag.
    pub fn put_back(&mut self, letters: &[Letter]) {
        self.0.extend_from_slice(letters);
    }

    /// Counts per letter.
    pub fn counts(&self) -> HashMultiSet<Letter> {
        self.0.iter().copied().collect()
    }

    /// The tiles as symbols: the letter, or the empty string for a blank.
    pub fn to_symbols(&self) -> Vec<String> {
        self.0.iter().map(|&letter| letter_symbol(letter)).collect()
    }
}

impl From<Vec<Letter>> for TileBag {
    fn from(tiles: Vec<Letter>) -> Self {
        TileBag(tiles)
    }
}

impl fmt::Display for TileBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.0.iter().map(|letter| letter.to_char()).collect();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_full() {
        let bag = TileBag::full();
        assert_eq!(bag.len(), 100);
        let counts = bag.counts();
        assert_eq!(counts.count_of(&Letter::blank()), 2);
        assert_eq!(counts.count_of(&Letter::from_label(5)), 12);
        assert_eq!(counts.count_of(&Letter::from_label(26)), 1);
    }

    #[test]
    fn test_draw() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = TileBag::from_text("AB*").unwrap();
        let mut drawn = Vec::new();
        while let Some(letter) = bag.draw(&mut rng) {
            drawn.push(letter);
        }
        assert!(bag.is_empty());
        drawn.sort();
        assert_eq!(
            drawn,
            vec![Letter::from_label(1), Letter::from_label(2), Letter::blank()]
        );
    }

    #[test]
    fn test_refill() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bag = TileBag::full();
        let mut rack = Letters::new();
        bag.refill(&mut rack, 7, &mut rng);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 93);

        let mut small = TileBag::from_text("QZ").unwrap();
        let mut rack = Letters::new();
        small.refill(&mut rack, 7, &mut rng);
        assert_eq!(rack.len(), 2);
        assert!(small.is_empty());
    }

    #[test]
    fn test_unseen() -> Result<(), Error> {
        let mut board = Board::new();
        board.play_word("QuIZ", 7, 7, Direction::Across)?;
        let rack: Letters = Codec::default().encode_items("XE*")?;
        let unseen = TileBag::unseen(&board, &rack);
        assert_eq!(unseen.len(), 100 - 4 - 3);
        let counts = unseen.counts();
        assert_eq!(counts.count_of(&Letter::blank()), 0);
        assert_eq!(counts.count_of(&Letter::from_label(17)), 0);
        assert_eq!(counts.count_of(&Letter::from_label(24)), 0);
        assert_eq!(counts.count_of(&Letter::from_label(26)), 0);
        assert_eq!(counts.count_of(&Letter::from_label(9)), 8);
        assert_eq!(counts.count_of(&Letter::from_label(21)), 4);
        assert_eq!(unseen.iter().next(), Some(&Letter::from_label(1)));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "more Z tiles in play")]
    fn test_unseen_overcount() {
        let mut board = Board::new();
        board.play_word("ZZZ", 7, 7, Direction::Across).unwrap();
        TileBag::unseen(&board, &Letters::new());
    }

    #[test]
    fn test_symbols() {
        let bag = TileBag::from_text("A *").unwrap();
        assert_eq!(bag.to_symbols(), vec!["A", ""]);
        assert_eq!(bag.to_string(), "A*");
        assert!(TileBag::from_text("A1").is_err());
    }
}
