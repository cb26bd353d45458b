//! Strongly-typed dot positions within a braille cell.

use serde::{Deserialize, Serialize};

use crate::constants::CELL_DOTS;

/// One of the six dot positions of a cell, numbered in reading order.
///
/// ```text
/// +---+---+
/// | 0 | 1 |
/// +---+---+
/// | 2 | 3 |
/// +---+---+
/// | 4 | 5 |
/// +---+---+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DotPosition(u8);

impl DotPosition {
    /// Returns the position for `index`, or `None` if it is not in `0..6`.
    pub fn new(index: usize) -> Option<Self> {
        if index < CELL_DOTS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// All six positions in reading order.
    pub fn all() -> impl Iterator<Item = DotPosition> {
        (0..CELL_DOTS as u8).map(DotPosition)
    }

    /// Returns the raw index as `usize` for bit and array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Column within the cell (0 = left, 1 = right).
    #[inline]
    pub fn column(self) -> usize {
        self.index() % 2
    }

    /// Row within the cell (0 = top, 2 = bottom).
    #[inline]
    pub fn row(self) -> usize {
        self.index() / 2
    }
}
