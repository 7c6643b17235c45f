//! Grid cursor over the cards currently on the table.
//!
//! Cards are laid out row-major in deck order, `columns` per row. The deck
//! shrinks as pairs are removed, so the cursor is clamped against the live
//! card count every time it is used.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    columns: usize,
}

impl Cursor {
    pub fn new(columns: u16) -> Self {
        Self {
            index: 0,
            columns: columns.max(1) as usize,
        }
    }

    /// Deck index under the cursor, clamped to `len` cards.
    ///
    /// Returns `None` when there are no cards.
    pub fn index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.index.min(len - 1))
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// (column, row) of the clamped cursor.
    pub fn position(&self, len: usize) -> Option<(usize, usize)> {
        self.index(len)
            .map(|i| (i % self.columns, i / self.columns))
    }

    /// Move one cell. Moves that would leave the grid are ignored.
    pub fn step(&mut self, dir: Direction, len: usize) {
        let Some(i) = self.index(len) else {
            self.index = 0;
            return;
        };
        let col = i % self.columns;
        self.index = match dir {
            Direction::Left if col > 0 => i - 1,
            Direction::Right if col + 1 < self.columns && i + 1 < len => i + 1,
            Direction::Up if i >= self.columns => i - self.columns,
            // A partial last row: drop onto its last card.
            Direction::Down if i / self.columns < (len - 1) / self.columns => {
                (i + self.columns).min(len - 1)
            }
            _ => i,
        };
    }

    /// Pull the stored index back onto the table after cards were removed.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index(len).unwrap_or(0);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
