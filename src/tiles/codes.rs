/// Code 1..=26 for `A`..`Z`, as used in the lexicon.
pub type Label = u8;

/// Tile code used to represent `Tile`, `Letter` or `Cell`. See [`Codec`](crate::Codec).
pub type Code = u8;

/// Number of letters in the alphabet.
pub const NLETTERS: usize = 26;

/// code for EMPTY (no tile)
pub const EMPTY: Code = 0;

/// code for BLANK tile (unassigned, on a rack or in the bag)
pub const BLANK: Code = 0x40;

/// Mask to get label value 0..31
pub const LETTER_MASK: u8 = 0b11111;

/// bitflag for a blank that was assigned a letter
pub const IS_WILDCARD: Code = 0x40;

/// An uninitialized tile
pub(super) const UNINIT: Code = 0x7f;
