//! Error types for the tactile pipeline.
//!
//! All crates return `TactileResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the tactile pipeline.
#[derive(Debug, Error)]
pub enum TactileError {
    /// A character has no cell in the dictionary.
    ///
    /// The encoder substitutes a blank cell and keeps going; this variant
    /// only surfaces when the caller asks for strict encoding.
    #[error("Unmappable character {character:?} in word {word} at offset {offset}")]
    UnmappableCharacter {
        character: char,
        word: usize,
        offset: usize,
    },

    /// A glyph code is not six `0`/`1` symbols.
    #[error("Invalid glyph code: {0}")]
    InvalidGlyph(String),

    /// Page geometry or another configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, TactileError>`.
pub type TactileResult<T> = Result<T, TactileError>;
