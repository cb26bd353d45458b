//! # tactile-layout
//!
//! Places encoded braille cells on a page and emits one rectangular prism
//! per raised dot.
//!
//! ## Key Types
//!
//! - [`PageConfig`] — Page size, margins, dot dimensions and pitches.
//! - [`LayoutCursor`] — Pen position with fixed-pitch advance and line wrap.
//! - [`LayoutBuilder`] — Walks a token stream and fills a
//!   [`TriangleMesh`](tactile_mesh::TriangleMesh).

pub mod builder;
pub mod config;
pub mod cursor;

pub use builder::{Layout, LayoutBuilder, LayoutStats};
pub use config::PageConfig;
pub use cursor::LayoutCursor;
