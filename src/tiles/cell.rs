use super::{codes::Code, item::Item, tile::Tile};
use crate::error::Error;
use std::convert::TryFrom;

/// A square on the board that is either empty or holds a [`Tile`](crate::Tile)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell(Option<Tile>);

impl Item for Cell {
    fn code(&self) -> Code {
        self.0.map_or(0, |tile| tile.code())
    }

    /// `.` when empty.
    fn to_char(self) -> char {
        self.0.map_or('.', Tile::to_char)
    }
}

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(None);

    /// Create new `Cell` from `Tile`
    pub fn from_tile(tile: Tile) -> Cell {
        Cell(Some(tile))
    }

    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        self.0
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl TryFrom<Code> for Cell {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::EMPTY),
            code => Tile::try_from(code).map(Cell::from_tile),
        }
    }
}

impl From<Cell> for Code {
    fn from(cell: Cell) -> Code {
        cell.code()
    }
}
