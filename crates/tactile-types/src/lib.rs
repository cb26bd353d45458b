//! # tactile-types
//!
//! Shared types, error types, and page/dot defaults
//! for the tactile braille relief pipeline.
//!
//! This crate has no encoding or geometry logic. It defines the
//! vocabulary the encoder, layout, and exporter crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{TactileError, TactileResult};
pub use ids::DotPosition;
pub use scalar::Millimeters;
