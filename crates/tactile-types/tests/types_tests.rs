//! Integration tests for tactile-types.

use tactile_types::constants;
use tactile_types::{DotPosition, TactileError};

// ─── DotPosition Tests ────────────────────────────────────────

#[test]
fn dot_position_bounds() {
    assert!(DotPosition::new(5).is_some());
    assert!(DotPosition::new(6).is_none());
}

#[test]
fn dot_position_grid() {
    let pos = DotPosition::new(3).unwrap();
    assert_eq!(pos.column(), 1);
    assert_eq!(pos.row(), 1);

    let bottom_left = DotPosition::new(4).unwrap();
    assert_eq!(bottom_left.column(), 0);
    assert_eq!(bottom_left.row(), 2);
}

#[test]
fn all_positions_in_reading_order() {
    let indices: Vec<usize> = DotPosition::all().map(|p| p.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn dot_position_is_serializable() {
    let pos = DotPosition::new(2).unwrap();
    let json = serde_json::to_string(&pos).unwrap();
    let recovered: DotPosition = serde_json::from_str(&json).unwrap();
    assert_eq!(pos, recovered);
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn printable_width_holds_a_cell() {
    let printable = constants::PAGE_WIDTH - constants::RIGHT_MARGIN - constants::LEFT_MARGIN;
    assert!(printable > constants::DOT_SPACING + constants::DOT_DIAMETER);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = TactileError::InvalidGlyph("expected 6 symbols, got \"1010\"".into());
    assert!(err.to_string().contains("expected 6 symbols"));
}

#[test]
fn unmappable_display() {
    let err = TactileError::UnmappableCharacter {
        character: 'é',
        word: 2,
        offset: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("'é'"));
    assert!(msg.contains("word 2"));
    assert!(msg.contains("offset 4"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err: TactileError = io.into();
    assert!(matches!(err, TactileError::Io(_)));
}
