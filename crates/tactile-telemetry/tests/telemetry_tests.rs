//! Integration tests for tactile-telemetry.

use tactile_telemetry::bus::EventBus;
use tactile_telemetry::events::{EventKind, PipelineEvent, Stage};
use tactile_telemetry::sinks::{EventSink, SharedVecSink, TracingSink, VecSink};

fn encoded(tokens: usize) -> PipelineEvent {
    PipelineEvent::new(
        Stage::Encode,
        EventKind::TextEncoded {
            words: 1,
            tokens,
            unmapped: 0,
        },
    )
}

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = SharedVecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(encoded(3));
    bus.emit(encoded(5));
    assert!(sink.snapshot().is_empty());

    bus.flush();
    let events = sink.snapshot();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], encoded(5));
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = SharedVecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(encoded(1));
    bus.flush();
    assert!(sink.snapshot().is_empty());
}

#[test]
fn multiple_sinks_each_receive() {
    let mut bus = EventBus::new();
    let a = SharedVecSink::new();
    let b = SharedVecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(encoded(2));
    bus.finish();
    assert_eq!(a.snapshot().len(), 1);
    assert_eq!(b.snapshot().len(), 1);
}

#[test]
fn vec_sink_collects() {
    let mut sink = VecSink::new();
    sink.handle(&encoded(4));
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.name(), "vec_sink");
}

#[test]
fn event_serialization() {
    let event = PipelineEvent::new(
        Stage::Layout,
        EventKind::LayoutCompleted {
            lines: 2,
            dots: 14,
            vertices: 112,
            triangles: 168,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: PipelineEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn unmappable_event_serialization() {
    let event = PipelineEvent::new(
        Stage::Encode,
        EventKind::UnmappableCharacter {
            character: '@',
            word: 0,
            offset: 2,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("UnmappableCharacter"));
    assert!(json.contains('@'));
}
