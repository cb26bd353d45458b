//! Page geometry and dot dimension defaults.
//!
//! All lengths are in millimetres.

use crate::scalar::Millimeters;

/// A4 page width.
pub const PAGE_WIDTH: Millimeters = 210.0;

/// A4 page height.
pub const PAGE_HEIGHT: Millimeters = 297.0;

/// Side length of the square footprint of one dot prism.
pub const DOT_DIAMETER: Millimeters = 1.5;

/// Height of one raised dot above the page.
pub const DOT_HEIGHT: Millimeters = 0.5;

/// Centre-to-centre distance between neighbouring dots in a cell.
pub const DOT_SPACING: Millimeters = 2.5;

/// Line pitch as a multiple of [`DOT_SPACING`].
pub const LINE_PITCH_MULTIPLIER: f32 = 5.0;

/// Letter pitch as a multiple of [`DOT_SPACING`].
pub const LETTER_PITCH_MULTIPLIER: f32 = 2.5;

/// Distance from the left page edge to the first cell column.
pub const LEFT_MARGIN: Millimeters = 10.0;

/// Distance from the top page edge to the first cell row.
pub const TOP_MARGIN: Millimeters = 10.0;

/// Width reserved at the right page edge. The cursor wraps once it passes
/// `PAGE_WIDTH - RIGHT_MARGIN`.
pub const RIGHT_MARGIN: Millimeters = 20.0;

/// Number of dot positions in one braille cell (2 columns × 3 rows).
pub const CELL_DOTS: usize = 6;

/// Vertices appended to the mesh for one dot prism.
pub const PRISM_VERTICES: usize = 8;

/// Triangles appended to the mesh for one dot prism.
pub const PRISM_FACES: usize = 12;
