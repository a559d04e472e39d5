use super::codes::{Code, Label, LETTER_MASK};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt::Debug;

/// Common trait for [`Tile`](crate::Tile), [`Letter`](crate::Letter) and [`Cell`](crate::Cell).
pub trait Item:
    Debug + Clone + Copy + Eq + PartialEq + Default + Into<Code> + TryFrom<Code, Error = Error>
{
    fn code(&self) -> Code;

    /// The character for this item in the text formats.
    fn to_char(self) -> char;

    /// The letter label 1..=26, with any blank flag stripped. 0 for an empty cell or unassigned blank.
    fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }
}
