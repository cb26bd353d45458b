//! Six-dot braille cell codes.
//!
//! A cell is stored as a 6-bit mask. Bit `i` is dot position `i` in
//! reading order (see [`DotPosition`]), which is also the `i`-th symbol of
//! the textual `"100000"` form used by the dictionary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tactile_types::constants::CELL_DOTS;
use tactile_types::{DotPosition, TactileError, TactileResult};

/// Mask with all six dot bits set.
const CELL_MASK: u8 = (1 << CELL_DOTS) - 1;

/// Unicode braille bit for each reading-order position.
///
/// Unicode numbers dots down the left column first (1, 2, 3) and then
/// down the right column (4, 5, 6).
const UNICODE_BITS: [u8; CELL_DOTS] = [0, 3, 1, 4, 2, 5];

/// Start of the Unicode braille patterns block.
const UNICODE_BRAILLE_BASE: u32 = 0x2800;

/// A braille glyph code: six dots, each raised or flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cell(u8);

impl Cell {
    /// All dots flat. Used as the word separator and the unmapped fallback.
    pub const BLANK: Cell = Cell(0);

    /// Capitalization indicator: a lone raised dot in the bottom-right position.
    pub const CAPITAL: Cell = Cell::from_pattern_const("000001");

    /// Builds a cell from a bitmask. Returns `None` if bits above the sixth are set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !CELL_MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Parses a six-symbol `0`/`1` pattern at compile time.
    ///
    /// Only used for built-in tables; a malformed literal fails const evaluation.
    pub(crate) const fn from_pattern_const(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        assert!(bytes.len() == CELL_DOTS, "glyph pattern must have six symbols");
        let mut bits = 0u8;
        let mut i = 0;
        while i < CELL_DOTS {
            match bytes[i] {
                b'1' => bits |= 1 << i,
                b'0' => {}
                _ => panic!("glyph pattern must only contain '0' and '1'"),
            }
            i += 1;
        }
        Self(bits)
    }

    /// Raw bitmask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the dot at `pos` is raised.
    #[inline]
    pub fn is_raised(self, pos: DotPosition) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Raised dot positions in reading order.
    pub fn raised(self) -> impl Iterator<Item = DotPosition> {
        DotPosition::all().filter(move |&pos| self.is_raised(pos))
    }

    /// Number of raised dots.
    #[inline]
    pub fn dot_count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no dot is raised.
    #[inline]
    pub fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// The textual `"100000"` form.
    pub fn pattern(self) -> String {
        DotPosition::all()
            .map(|pos| if self.is_raised(pos) { '1' } else { '0' })
            .collect()
    }

    /// The matching character from the Unicode braille patterns block (U+2800).
    pub fn to_unicode(self) -> char {
        let mut offset = 0u32;
        for pos in self.raised() {
            offset |= 1 << UNICODE_BITS[pos.index()];
        }
        char::from_u32(UNICODE_BRAILLE_BASE + offset).unwrap_or(' ')
    }
}

impl FromStr for Cell {
    type Err = TactileError;

    fn from_str(pattern: &str) -> TactileResult<Self> {
        let symbols: Vec<char> = pattern.chars().collect();
        if symbols.len() != CELL_DOTS {
            return Err(TactileError::InvalidGlyph(format!(
                "expected {} symbols, got {} in {:?}",
                CELL_DOTS,
                symbols.len(),
                pattern
            )));
        }

        let mut bits = 0u8;
        for (i, symbol) in symbols.into_iter().enumerate() {
            match symbol {
                '1' => bits |= 1 << i,
                '0' => {}
                other => {
                    return Err(TactileError::InvalidGlyph(format!(
                        "symbol {:?} at position {} in {:?} is not '0' or '1'",
                        other, i, pattern
                    )))
                }
            }
        }
        Ok(Self(bits))
    }
}

impl TryFrom<String> for Cell {
    type Error = TactileError;

    fn try_from(pattern: String) -> TactileResult<Self> {
        pattern.parse()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.pattern()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}
