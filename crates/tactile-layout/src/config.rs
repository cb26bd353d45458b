//! Page and dot geometry configuration.
//!
//! All lengths are in millimetres. Pitches are given as multiples of the
//! dot spacing, so scaling `dot_spacing` scales the whole layout.

use serde::{Deserialize, Serialize};
use tactile_types::constants;
use tactile_types::{Millimeters, TactileError, TactileResult};

/// Geometry used by the layout builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page width.
    pub page_width: Millimeters,
    /// Page height. Layouts that run past it are flagged, not paginated.
    pub page_height: Millimeters,

    /// Side of the square dot footprint.
    pub dot_diameter: Millimeters,
    /// Height of a raised dot.
    pub dot_height: Millimeters,
    /// Distance between neighbouring dot origins within a cell.
    pub dot_spacing: Millimeters,

    /// Line pitch in units of `dot_spacing`.
    pub line_pitch_multiplier: f32,
    /// Letter pitch in units of `dot_spacing`.
    pub letter_pitch_multiplier: f32,

    /// Left margin; also the x position after a wrap.
    pub left_margin: Millimeters,
    /// Top margin; y position of the first line.
    pub top_margin: Millimeters,
    /// Width reserved at the right edge.
    pub right_margin: Millimeters,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: constants::PAGE_WIDTH,
            page_height: constants::PAGE_HEIGHT,
            dot_diameter: constants::DOT_DIAMETER,
            dot_height: constants::DOT_HEIGHT,
            dot_spacing: constants::DOT_SPACING,
            line_pitch_multiplier: constants::LINE_PITCH_MULTIPLIER,
            letter_pitch_multiplier: constants::LETTER_PITCH_MULTIPLIER,
            left_margin: constants::LEFT_MARGIN,
            top_margin: constants::TOP_MARGIN,
            right_margin: constants::RIGHT_MARGIN,
        }
    }
}

impl PageConfig {
    /// A4 portrait with the default dot geometry.
    pub fn a4() -> Self {
        Self::default()
    }

    /// A4 landscape with the default dot geometry.
    pub fn a4_landscape() -> Self {
        Self {
            page_width: constants::PAGE_HEIGHT,
            page_height: constants::PAGE_WIDTH,
            ..Default::default()
        }
    }

    /// Horizontal advance per cell.
    #[inline]
    pub fn letter_pitch(&self) -> Millimeters {
        self.dot_spacing * self.letter_pitch_multiplier
    }

    /// Vertical advance per line.
    #[inline]
    pub fn line_pitch(&self) -> Millimeters {
        self.dot_spacing * self.line_pitch_multiplier
    }

    /// Rightmost x the cursor may hold before it wraps.
    #[inline]
    pub fn wrap_limit(&self) -> Millimeters {
        self.page_width - self.right_margin
    }

    /// Width between the left margin and the wrap limit.
    #[inline]
    pub fn printable_width(&self) -> Millimeters {
        self.wrap_limit() - self.left_margin
    }

    /// Extent of one cell's dots from the cell origin, `(width, height)`.
    #[inline]
    pub fn cell_extent(&self) -> (Millimeters, Millimeters) {
        (
            self.dot_spacing + self.dot_diameter,
            2.0 * self.dot_spacing + self.dot_diameter,
        )
    }

    /// Checks that the geometry can lay out at least one cell.
    pub fn validate(&self) -> TactileResult<()> {
        let positive = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("dot_diameter", self.dot_diameter),
            ("dot_height", self.dot_height),
            ("dot_spacing", self.dot_spacing),
            ("line_pitch_multiplier", self.line_pitch_multiplier),
            ("letter_pitch_multiplier", self.letter_pitch_multiplier),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TactileError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        let margins = [
            ("left_margin", self.left_margin),
            ("top_margin", self.top_margin),
            ("right_margin", self.right_margin),
        ];
        for (name, value) in margins {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TactileError::InvalidConfig(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }

        if self.dot_diameter > self.dot_spacing {
            return Err(TactileError::InvalidConfig(format!(
                "dot_diameter ({}) exceeds dot_spacing ({}); neighbouring dots would overlap",
                self.dot_diameter, self.dot_spacing
            )));
        }

        if self.printable_width() <= 0.0 {
            return Err(TactileError::InvalidConfig(format!(
                "margins leave no printable width (page {} mm, left {} mm, right {} mm)",
                self.page_width, self.left_margin, self.right_margin
            )));
        }

        let (cell_width, _) = self.cell_extent();
        if self.left_margin + cell_width > self.page_width {
            return Err(TactileError::InvalidConfig(format!(
                "a {cell_width} mm cell does not fit after the {} mm left margin",
                self.left_margin
            )));
        }

        Ok(())
    }
}
