//! # tactile-telemetry
//!
//! Event bus for pipeline telemetry. Emits structured events
//! (encoding results, layout summary, export) that pluggable
//! sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, PipelineEvent, Stage};
pub use sinks::{EventSink, SharedVecSink, TracingSink, VecSink};
