use super::{
    codes::{Code, BLANK, EMPTY, IS_WILDCARD, LETTER_MASK},
    DIM,
};
use super::{Item, ItemList};
use crate::error::Error;
use std::convert::TryFrom;

/// Translate between text and tile codes.
///
/// - `.` (or a space): no tile (empty square), code 0
/// - `A` .. `Z`: a regular letter, codes 1 .. 26
/// - `*` or `?`: an unassigned blank tile, code 64
/// - `a` .. `z`: a blank played as `a` .. `z`, codes 65 .. 90
///
/// Which codes are valid depends on the target: a [`Letter`](crate::Letter) is a letter
/// or an unassigned blank, a [`Tile`](crate::Tile) is a letter or a blank-marked letter,
/// and a [`Cell`](crate::Cell) may also be empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec;

impl Codec {
    fn encode_char(ch: char) -> Result<Code, Error> {
        match ch {
            'A'..='Z' => Ok(ch as u8 - b'A' + 1),
            'a'..='z' => Ok((ch as u8 - b'a' + 1) | IS_WILDCARD),
            '.' | ' ' => Ok(EMPTY),
            '*' | '?' => Ok(BLANK),
            _ => Err(Error::EncodeInvalidToken(ch.to_string())),
        }
    }

    fn decode_code(code: Code) -> char {
        match code {
            EMPTY => '.',
            BLANK => '*',
            code if code & IS_WILDCARD != 0 => (b'a' + (code & LETTER_MASK) - 1) as char,
            code => (b'A' + code - 1) as char,
        }
    }

    /// Encode string, and return a list of `u8` codes.
    /// ## Errors
    /// An error is returned if the string is too long or holds an unknown character.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Codec, Error};
    /// let codec = Codec::default();
    /// let codes = codec.encode("AZaz. *")?;
    /// assert_eq!(codes, vec![1, 26, 65, 90, 0, 0, 64]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Code>, Error> {
        if word.chars().count() > DIM {
            return Err(Error::EncodeStringTooLong(String::from(word)));
        }
        word.chars().map(Codec::encode_char).collect()
    }

    /// Encode string straight into a list of items.
    /// ## Errors
    /// If the string can not be encoded, or a code is not valid for `T`.
    pub fn encode_items<T: Item>(&self, word: &str) -> Result<ItemList<T>, Error> {
        ItemList::<T>::try_from(self.encode(word)?)
    }

    /// Decode codes back to text.
    /// ## Examples
    /// ```
    /// use scrabble_engine::Codec;
    /// let codec = Codec::default();
    /// assert_eq!(codec.decode(&[1, 26, 65, 90, 0, 64]), "AZaz.*");
    /// ```
    pub fn decode(&self, codes: &[Code]) -> String {
        codes.iter().map(|&code| Codec::decode_code(code)).collect()
    }
}
