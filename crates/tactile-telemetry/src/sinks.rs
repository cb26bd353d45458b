//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, PipelineEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &PipelineEvent);

    /// Called when the pipeline ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that collects events into a `Vec`.
#[derive(Debug, Default)]
pub struct VecSink {
    /// Collected events.
    pub events: Vec<PipelineEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &PipelineEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A collecting sink whose buffer stays readable after the sink is boxed
/// into a bus.
#[derive(Debug, Clone, Default)]
pub struct SharedVecSink {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl SharedVecSink {
    /// Creates an empty shared sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out the events received so far.
    pub fn snapshot(&self) -> Vec<PipelineEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for SharedVecSink {
    fn handle(&mut self, event: &PipelineEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "shared_vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Unmappable characters and page overflow are logged at `warn`,
/// everything else at `info`.
#[derive(Debug, Default)]
pub struct TracingSink {
    handled: usize,
}

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &PipelineEvent) {
        self.handled += 1;
        match &event.kind {
            EventKind::UnmappableCharacter { .. } | EventKind::PageOverflow { .. } => {
                tracing::warn!(stage = ?event.stage, event = ?event.kind, "pipeline_event");
            }
            _ => {
                tracing::info!(stage = ?event.stage, event = ?event.kind, "pipeline_event");
            }
        }
    }

    fn finalize(&mut self) {
        tracing::debug!(events = self.handled, "telemetry finished");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
