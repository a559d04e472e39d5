use super::codes::{Code, Label, BLANK, UNINIT};
use super::{Item, Tile};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// A tile on a rack or in the bag.
///
/// Either a regular letter `A`..`Z` or a `blank` that can stand in for any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter(NonZeroU8);

impl Default for Letter {
    fn default() -> Self {
        Self::new(UNINIT)
    }
}

impl Item for Letter {
    fn code(&self) -> Code {
        self.0.get()
    }

    /// `A`..`Z`, or `*` for a blank.
    fn to_char(self) -> char {
        if self.is_blank() {
            '*'
        } else {
            (b'A' + self.label() - 1) as char
        }
    }
}

impl Letter {
    fn new(code: Code) -> Letter {
        Letter(NonZeroU8::new(code).expect("letter code can't be 0"))
    }

    /// Regular letter for `label` 1..=26.
    /// ## Panics
    /// If `label` is not a letter label.
    pub fn from_label(label: Label) -> Letter {
        assert!((1..=26).contains(&label), "invalid letter label {}", label);
        Letter::new(label)
    }

    /// The rack letter a placed `tile` was taken from: a blank for a blank-marked tile.
    pub fn from_tile(tile: Tile) -> Letter {
        if tile.is_wildcard() {
            Letter::blank()
        } else {
            Letter::new(tile.label())
        }
    }

    /// Return new blank
    pub fn blank() -> Letter {
        Letter::new(BLANK)
    }

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        self.code() == BLANK
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<Code> for Letter {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            1..=26 | BLANK => Ok(Self::new(code)),
            _ => Err(Self::Error::InvalidLetterCode(code)),
        }
    }
}

impl From<Letter> for Code {
    fn from(letter: Letter) -> Code {
        letter.0.get()
    }
}
