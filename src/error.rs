use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded lexicon
    #[cfg(feature = "bincode")]
    #[error("Lexicon {0} could not be deserialized")]
    LexiconDeserializeError(String),

    /// The string is longer than 16 tokens
    #[error("Encoder: string too long {0}")]
    EncodeStringTooLong(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Code is not valid for `Tile` or `Cell`
    #[error("Invalid code for tile {0}")]
    InvalidTileCode(u8),

    /// Code is not valid for `Letter`
    #[error("Invalid code for letter {0}")]
    InvalidLetterCode(u8),

    /// Error parsing board state or grid from text
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// A board square token must be a single character
    #[error("Invalid board token \"{0}\"")]
    InvalidBoardToken(String),

    /// Error parsing premium square
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Parsing a direction
    #[error("Invalid direction \"{0}\" (expect across or down)")]
    InvalidDirection(String),

    /// A rack holds at most 7 tiles
    #[error("Rack \"{0}\" holds more than {1} tiles")]
    RackTooLarge(String, usize),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} does not fit")]
    TilePlacementError {
        row: usize,
        col: usize,
        across: bool,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },
}
