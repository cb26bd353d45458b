//! Pipeline event types.
//!
//! Events are lightweight value types tagged with the pipeline stage
//! that produced them.

use serde::{Deserialize, Serialize};

/// Pipeline stage that emitted an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Encode,
    Layout,
    Export,
}

/// A pipeline event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineEvent {
    /// Stage that produced the event.
    pub stage: Stage,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Text was encoded.
    TextEncoded {
        /// Words after whitespace splitting.
        words: usize,
        /// Tokens in the stream, separators included.
        tokens: usize,
        /// Characters replaced by blank cells.
        unmapped: usize,
    },

    /// A character had no dictionary entry.
    UnmappableCharacter {
        character: char,
        word: usize,
        offset: usize,
    },

    /// Layout finished.
    LayoutCompleted {
        /// Lines used.
        lines: u32,
        /// Raised dots emitted.
        dots: usize,
        /// Mesh vertex count.
        vertices: usize,
        /// Mesh triangle count.
        triangles: usize,
    },

    /// Dots extend below the page.
    PageOverflow {
        /// Largest y reached (mm).
        max_y: f32,
        /// Page height (mm).
        page_height: f32,
    },

    /// The mesh was written out.
    MeshExported {
        /// Exporter name.
        exporter: String,
        /// Destination path.
        path: String,
        /// Bytes written.
        bytes: u64,
    },
}

impl PipelineEvent {
    /// Creates a new event for the given stage.
    pub fn new(stage: Stage, kind: EventKind) -> Self {
        Self { stage, kind }
    }
}
