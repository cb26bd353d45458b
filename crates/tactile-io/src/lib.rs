//! # tactile-io
//!
//! Conversion contract, configuration, and validation.
//!
//! Defines the boundary types that the CLI (or any other caller) uses to
//! drive the encoder and layout builder, and the [`pipeline`] that chains
//! them.

pub mod contract;
pub mod pipeline;
pub mod validator;

pub use contract::{ConversionConfig, ConversionOutput, ConversionReport, OutputConfig};
pub use pipeline::{convert, convert_and_export};
