use super::codes::{Code, Label, IS_WILDCARD, LETTER_MASK, UNINIT};
use super::{Cell, Item, Letter};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// A letter placed (or about to be placed) on the board.
///
/// A tile played from a blank keeps its wildcard flag for good: it is worth 0 points
/// and prints in lowercase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(NonZeroU8);

impl Default for Tile {
    fn default() -> Self {
        Self::new(UNINIT)
    }
}

impl Item for Tile {
    fn code(&self) -> Code {
        self.0.get()
    }

    /// Uppercase letter for a regular tile, lowercase for a blank-marked one.
    fn to_char(self) -> char {
        let ch = (b'A' + self.label() - 1) as char;
        if self.is_wildcard() {
            ch.to_ascii_lowercase()
        } else {
            ch
        }
    }
}

impl Tile {
    pub(super) fn new(code: Code) -> Tile {
        Tile(NonZeroU8::new(code).expect("tile code can't be 0"))
    }

    /// Regular (non-blank) tile for letter `label`.
    /// ## Example
    /// ```
    /// use scrabble_engine::{Item, Tile};
    /// let tile = Tile::from_label(3);
    /// assert_eq!(tile.to_char(), 'C');
    /// ```
    pub fn from_label(label: Label) -> Tile {
        Tile::new(label & LETTER_MASK)
    }

    /// Return a blank-marked tile for letter `label`.
    /// ## Example
    /// ```
    /// use scrabble_engine::{Item, Tile};
    /// let tile = Tile::wildcard_from_label(1);
    /// assert_eq!(tile.code(), 65);
    /// assert_eq!(tile.label(), 1);
    /// assert_eq!(tile.to_char(), 'a');
    /// ```
    pub fn wildcard_from_label(label: Label) -> Tile {
        Tile::new((label & LETTER_MASK) | IS_WILDCARD)
    }

    /// Create `Cell` from tile
    pub fn into_cell(self) -> Cell {
        Cell::from_tile(self)
    }

    /// Check if the tile was played from a blank.
    pub fn is_wildcard(&self) -> bool {
        self.code() & IS_WILDCARD != 0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<Letter> for Tile {
    /// Place a regular rack letter. A blank must be assigned with [`Tile::wildcard_from_label`].
    fn from(letter: Letter) -> Tile {
        debug_assert!(!letter.is_blank(), "an unassigned blank can not be placed");
        Tile::from_label(letter.label())
    }
}

impl TryFrom<Code> for Tile {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            1..=26 | 65..=90 => Ok(Self::new(code)),
            _ => Err(Self::Error::InvalidTileCode(code)),
        }
    }
}

impl From<Tile> for Code {
    fn from(tile: Tile) -> Code {
        tile.0.get()
    }
}
