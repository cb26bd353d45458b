//! Token stream → dot prisms.
//!
//! The builder walks the tokens once with a [`LayoutCursor`]. Every token,
//! blank or not, consumes one fixed-pitch column. For each raised dot of a
//! glyph it appends an axis-aligned prism whose base sits on `z = 0`.

use serde::{Deserialize, Serialize};
use tactile_braille::{Cell, GlyphToken};
use tactile_mesh::generators::push_prism;
use tactile_mesh::{TriangleMesh, Vec3};
use tactile_types::constants::{PRISM_FACES, PRISM_VERTICES};
use tactile_types::{Millimeters, TactileResult};

use crate::config::PageConfig;
use crate::cursor::LayoutCursor;

/// Summary of one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Tokens consumed.
    pub tokens: usize,
    /// Tokens that rendered at least one dot.
    pub glyphs: usize,
    /// Raised dots emitted (one prism each).
    pub dots: usize,
    /// Lines touched by the cursor, including a trailing empty line opened
    /// by the final wrap.
    pub lines: u32,
    /// Lowest y reached by any dot (largest coordinate), or the top margin
    /// when no dot was rendered.
    pub max_y: Millimeters,
    /// True if dots extend past the page height.
    pub overflowed: bool,
}

/// The mesh produced by a layout pass together with its stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Accumulated dot prisms.
    pub mesh: TriangleMesh,
    /// Pass summary.
    pub stats: LayoutStats,
}

impl Layout {
    /// Splits the mesh into owned `(vertices, faces)` lists.
    pub fn into_parts(self) -> (Vec<[f32; 3]>, Vec<[u32; 3]>) {
        let vertices = self.mesh.vertices().collect();
        let faces = self.mesh.faces().collect();
        (vertices, faces)
    }
}

/// Lays out glyph tokens on a page and emits their dots as prisms.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    config: PageConfig,
}

impl LayoutBuilder {
    /// Creates a builder after validating `config`.
    pub fn new(config: PageConfig) -> TactileResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The page geometry in use.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Lays out `tokens` from the top-left margin.
    pub fn build(&self, tokens: &[GlyphToken]) -> Layout {
        let dot_total: usize = tokens.iter().map(|t| t.code().dot_count()).sum();
        let mut mesh =
            TriangleMesh::with_capacity(dot_total * PRISM_VERTICES, dot_total * PRISM_FACES);
        let mut cursor = LayoutCursor::new(&self.config);
        let mut stats = LayoutStats {
            tokens: tokens.len(),
            max_y: self.config.top_margin,
            ..Default::default()
        };

        for &token in tokens {
            let cell = token.code();
            if !cell.is_blank() {
                let (x, y) = cursor.position();
                let bottom = self.emit_cell(&mut mesh, cell, x, y);
                stats.glyphs += 1;
                stats.dots += cell.dot_count();
                stats.max_y = stats.max_y.max(bottom);
            }

            if cursor.advance() {
                tracing::trace!(line = cursor.line(), y = cursor.y(), "line wrap");
            }
        }

        stats.lines = if tokens.is_empty() { 0 } else { cursor.line() + 1 };
        stats.overflowed = stats.max_y > self.config.page_height;
        if stats.overflowed {
            tracing::warn!(
                max_y = stats.max_y,
                page_height = self.config.page_height,
                "layout runs past the bottom of the page"
            );
        }

        Layout { mesh, stats }
    }

    /// Appends one prism per raised dot of `cell` anchored at `(x, y)`.
    ///
    /// Returns the largest y covered by the emitted dots.
    fn emit_cell(
        &self,
        mesh: &mut TriangleMesh,
        cell: Cell,
        x: Millimeters,
        y: Millimeters,
    ) -> Millimeters {
        let spacing = self.config.dot_spacing;
        let size = Vec3::new(
            self.config.dot_diameter,
            self.config.dot_diameter,
            self.config.dot_height,
        );

        let mut bottom = y;
        for pos in cell.raised() {
            let origin = Vec3::new(
                x + pos.column() as f32 * spacing,
                y + pos.row() as f32 * spacing,
                0.0,
            );
            push_prism(mesh, origin, size);
            bottom = bottom.max(origin.y + size.y);
        }
        bottom
    }
}
