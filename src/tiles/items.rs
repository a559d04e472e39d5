use super::{list::ItemList, list::Items, Cell, Item, Letter, List, Tile};

/// A collection of [`Tile`](crate::Tile): a word as placed on the board.
pub type Word = ItemList<Tile>;

/// A collection of [`Cell`](crate::Cell): one line of the board.
pub type Row = ItemList<Cell>;

/// A collection of [`Letter`](crate::Letter): a rack, or the tiles used by a move.
pub type Letters = ItemList<Letter>;

impl Letters {
    /// Remove the first occurrence of `letter`. Returns false if it is not present.
    pub fn remove_first(&mut self, letter: Letter) -> bool {
        match self.iter().position(|&l| l == letter) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Word {
    /// The word in uppercase, as it is looked up in the lexicon.
    pub fn to_uppercase(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl Row {
    /// Returns the beginning and the end of the run of tiles containing position `i`,
    /// given that a tile would be placed in `i`.
    pub(crate) fn start_end(&self, i: usize) -> (usize, usize) {
        let start = self.0[..i]
            .iter()
            .rposition(Cell::is_empty)
            .map_or(0, |p| p + 1);

        let end = self.0[i + 1..]
            .iter()
            .position(Cell::is_empty)
            .map_or(self.len(), |p| p + i + 1);

        (start, end)
    }

    /// Labels of the tiles directly before and directly after position `i`, up to the
    /// first empty square in each direction.
    pub(crate) fn flanking_labels(&self, i: usize) -> (Vec<u8>, Vec<u8>) {
        let (start, end) = self.start_end(i);
        let before = self.0[start..i].iter().map(Item::label).collect();
        let after = self.0[i + 1..end].iter().map(Item::label).collect();
        (before, after)
    }

    /// The tiles in `start..end`, which must all be occupied.
    pub(crate) fn tiles(&self, start: usize, end: usize) -> Word {
        let items: Items<Tile> = self.0[start..end]
            .iter()
            .map(|cell| cell.tile().expect("run contains an empty square"))
            .collect();
        ItemList(items)
    }
}
