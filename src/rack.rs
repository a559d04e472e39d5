use crate::scorer::letter_points;
use crate::tiles::{Item, Label, Letter, Letters, List, NLETTERS};
use crate::{Codec, Error};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The number of tiles on a full rack.
pub const RACK_SIZE: usize = 7;

/// A multiset of rack letters, as counts per label. Index 0 counts the blanks.
///
/// Taking a letter that is not on the rack is a programming error and panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rack {
    counts: [u8; NLETTERS + 1],
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    #[inline]
    fn index(letter: Letter) -> usize {
        letter.label() as usize
    }

    /// Number of `letter` on the rack.
    #[inline]
    pub fn count(&self, letter: Letter) -> u8 {
        self.counts[Rack::index(letter)]
    }

    /// Number of regular tiles for `label`, 1..=26.
    #[inline]
    pub fn count_label(&self, label: Label) -> u8 {
        self.counts[label as usize]
    }

    #[inline]
    pub fn blanks(&self) -> u8 {
        self.counts[0]
    }

    pub fn len(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn add(&mut self, letter: Letter) {
        self.counts[Rack::index(letter)] += 1;
    }

    /// Remove one `letter`.
    /// ## Panics
    /// If `letter` is not on the rack.
    #[inline]
    pub fn take(&mut self, letter: Letter) {
        let count = &mut self.counts[Rack::index(letter)];
        assert!(*count > 0, "rack has no {}", letter);
        *count -= 1;
    }

    /// The letters on the rack, in label order with the blanks last.
    pub fn letters(&self) -> Letters {
        let regular = (1..=NLETTERS).flat_map(|label| {
            std::iter::repeat(Letter::from_label(label as Label)).take(self.counts[label] as usize)
        });
        let blanks = std::iter::repeat(Letter::blank()).take(self.blanks() as usize);
        regular.chain(blanks).collect()
    }
}

impl From<&Letters> for Rack {
    fn from(letters: &Letters) -> Rack {
        let mut rack = Rack::new();
        for &letter in letters.iter() {
            rack.add(letter);
        }
        rack
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

/// Parse a rack like `"RETAINS"` or `"QI*"`, `*` or `?` being a blank.
/// ## Errors
/// If a character is not a rack letter, or there are more than 7 letters.
impl FromStr for Rack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Letters = Codec::default().encode_items(&s.to_uppercase())?;
        if letters.len() > RACK_SIZE {
            return Err(Error::RackTooLarge(String::from(s), RACK_SIZE));
        }
        Ok(Rack::from(&letters))
    }
}

/// A rack tile in the external move record: the letter in uppercase, or an empty
/// string for a blank, and its face value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RackTile {
    pub letter: String,
    pub points: u32,
}

impl From<Letter> for RackTile {
    fn from(letter: Letter) -> RackTile {
        RackTile {
            letter: letter_symbol(letter),
            points: letter_points(letter),
        }
    }
}

impl TryFrom<&RackTile> for Letter {
    type Error = Error;

    fn try_from(tile: &RackTile) -> Result<Self, Self::Error> {
        let mut chars = tile.letter.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Letter::blank()),
            (Some(ch @ 'A'..='Z'), None) | (Some(ch @ 'a'..='z'), None) => {
                Ok(Letter::from_label(ch.to_ascii_uppercase() as u8 - b'A' + 1))
            }
            _ => Err(Error::EncodeInvalidToken(tile.letter.clone())),
        }
    }
}

/// A letter as it appears in the external records, the empty string for a blank.
pub(crate) fn letter_symbol(letter: Letter) -> String {
    if letter.is_blank() {
        String::new()
    } else {
        letter.to_string()
    }
}
