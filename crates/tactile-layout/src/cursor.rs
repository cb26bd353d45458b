//! The layout cursor: current pen position on the page.
//!
//! The cursor tracks an integer column and line and derives `(x, y)` from
//! them, so the position after `n` advances is the same whether it was
//! reached step by step or computed directly with [`LayoutCursor::position_at`].

use serde::{Deserialize, Serialize};
use tactile_types::Millimeters;

use crate::config::PageConfig;

/// Pen position in page millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutCursor {
    column: u32,
    line: u32,
    left_margin: Millimeters,
    top_margin: Millimeters,
    letter_pitch: Millimeters,
    line_pitch: Millimeters,
    wrap_limit: Millimeters,
}

impl LayoutCursor {
    /// Creates a cursor at the top-left margin.
    pub fn new(config: &PageConfig) -> Self {
        Self {
            column: 0,
            line: 0,
            left_margin: config.left_margin,
            top_margin: config.top_margin,
            letter_pitch: config.letter_pitch(),
            line_pitch: config.line_pitch(),
            wrap_limit: config.wrap_limit(),
        }
    }

    /// Current x.
    #[inline]
    pub fn x(&self) -> Millimeters {
        self.x_at(self.column)
    }

    #[inline]
    fn x_at(&self, column: u32) -> Millimeters {
        self.left_margin + column as f32 * self.letter_pitch
    }

    /// Current y.
    #[inline]
    pub fn y(&self) -> Millimeters {
        self.top_margin + self.line as f32 * self.line_pitch
    }

    /// Current position as `(x, y)`.
    #[inline]
    pub fn position(&self) -> (Millimeters, Millimeters) {
        (self.x(), self.y())
    }

    /// Zero-based column on the current line.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based line index.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Moves one letter pitch to the right, wrapping past the right margin.
    ///
    /// Returns true if the advance started a new line.
    pub fn advance(&mut self) -> bool {
        self.column += 1;
        if self.x() > self.wrap_limit {
            self.column = 0;
            self.line += 1;
            true
        } else {
            false
        }
    }

    /// Number of cells that fit on one line before the cursor wraps.
    ///
    /// This is the smallest `n >= 1` for which the `n`-th advance passes the
    /// wrap limit. The first cell of a line always sits at the left margin,
    /// however narrow the printable width is.
    pub fn columns_per_line(config: &PageConfig) -> u32 {
        let cursor = Self::new(config);
        let pitch = cursor.letter_pitch;
        if !(pitch.is_finite() && pitch > 0.0) {
            return u32::MAX;
        }

        let estimate = (config.printable_width() / pitch).floor().max(0.0);
        if estimate >= (u32::MAX - 1) as f32 {
            return u32::MAX;
        }

        let passes = |column: u32| cursor.x_at(column) > cursor.wrap_limit;
        let mut columns = estimate as u32 + 1;
        while columns > 1 && passes(columns - 1) {
            columns -= 1;
        }
        while !passes(columns) {
            columns += 1;
        }
        columns
    }

    /// Position of the token at `index` in a stream, without walking it.
    pub fn position_at(config: &PageConfig, index: usize) -> (Millimeters, Millimeters) {
        let columns = Self::columns_per_line(config) as usize;
        let cursor = Self {
            column: (index % columns) as u32,
            line: (index / columns) as u32,
            ..Self::new(config)
        };
        cursor.position()
    }
}
