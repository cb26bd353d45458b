//! # tactile-braille
//!
//! Text-to-braille encoding.
//!
//! ## Key Types
//!
//! - [`Cell`] — A six-dot glyph code stored as a bitmask.
//! - [`CellDictionary`] — Immutable lookup table from characters (and
//!   whole-word contractions) to cells.
//! - [`Encoder`] — Turns text into a [`GlyphToken`] stream, signalling
//!   capitals and separating words with blank cells.

pub mod cell;
pub mod dictionary;
pub mod encoder;

pub use cell::Cell;
pub use dictionary::CellDictionary;
pub use encoder::{Encoder, Encoding, GlyphToken, UnmappableCharacter};
