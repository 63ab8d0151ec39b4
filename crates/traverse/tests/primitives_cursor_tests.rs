#![cfg(feature = "dev")]
//! Tests for the cursor and sentinel traits.
//!
//! These tests verify the traversal contract on the slice cursor, the
//! unreachable sentinel, and the distance helper:
//! - Stepping, reading, and end detection
//! - Capability tiers and their ordering
//! - Random-access movement (advance, seek, signed distance)
//! - Distance computation with and without sentinel hints
//!
//! ## Test Organization
//!
//! 1. **Capability Tiers** - Ordering, floor, names
//! 2. **Slice Cursor Movement** - Step, read, end, equality
//! 3. **Random Access** - advance_by, seek, distance_to, step_back
//! 4. **Sentinels and Distance** - Hints, unreachable ends, fallbacks

use traverse::internals::primitives::capability::Capability;
use traverse::internals::primitives::cursor::{
    distance, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, SentinelFor,
    Unreachable,
};
use traverse::internals::primitives::range::IntoRange;
use traverse::internals::primitives::slice::SliceCursor;
use traverse::internals::primitives::testkit::forward_only;

// ============================================================================
// Capability Tier Tests
// ============================================================================

/// Test that capability tiers order from weakest to strongest.
///
/// Verifies that the derived ordering follows the tier ladder.
#[test]
fn test_capability_ordering() {
    assert!(Capability::SinglePass < Capability::Forward);
    assert!(Capability::Forward < Capability::Bidirectional);
    assert!(Capability::Bidirectional < Capability::RandomAccess);
}

/// Test that floor picks the weaker of two tiers.
///
/// Verifies both argument orders and the identical-tier case.
#[test]
fn test_capability_floor() {
    assert_eq!(
        Capability::RandomAccess.floor(Capability::Forward),
        Capability::Forward,
        "floor should pick the weaker tier"
    );
    assert_eq!(
        Capability::Forward.floor(Capability::RandomAccess),
        Capability::Forward,
        "floor should be symmetric"
    );
    assert_eq!(
        Capability::Bidirectional.floor(Capability::Bidirectional),
        Capability::Bidirectional,
        "floor of a tier with itself is that tier"
    );
}

/// Test tier names.
///
/// Verifies the short human-readable name of each tier.
#[test]
fn test_capability_names() {
    assert_eq!(Capability::SinglePass.name(), "single-pass");
    assert_eq!(Capability::Forward.name(), "forward");
    assert_eq!(Capability::Bidirectional.name(), "bidirectional");
    assert_eq!(Capability::RandomAccess.name(), "random-access");
}

/// Test that the slice cursor advertises random access.
#[test]
fn test_slice_cursor_capability() {
    assert_eq!(
        <SliceCursor<'static, i32> as Cursor>::CAPABILITY,
        Capability::RandomAccess,
        "slice cursors should be random access"
    );
}

// ============================================================================
// Slice Cursor Movement Tests
// ============================================================================

/// Test stepping and reading through a slice.
///
/// Verifies that a cursor visits every element in order and then hits the
/// end position.
#[test]
fn test_slice_walk() {
    let data = [10, 20, 30];
    let (mut cursor, end) = (&data[..]).into_parts();

    let mut seen = Vec::new();
    while !end.is_end(&cursor) {
        seen.push(*cursor.read());
        cursor.step();
    }

    assert_eq!(seen, vec![10, 20, 30], "walk should visit all elements");
    assert_eq!(cursor.index(), data.len(), "cursor should rest at the end");
}

/// Test end detection on an empty slice.
///
/// Verifies that the begin cursor of an empty slice is already at the end.
#[test]
fn test_slice_empty() {
    let data: [i32; 0] = [];
    let (cursor, end) = (&data[..]).into_parts();

    assert!(end.is_end(&cursor), "empty slice should start at its end");
    assert_eq!(end.remaining(&cursor), Some(0), "no elements remain");
}

/// Test cursor position equality.
///
/// Verifies that equality tracks position, not element values.
#[test]
fn test_slice_cursor_equality() {
    let data = [5, 5, 5];
    let (a, _) = (&data[..]).into_parts();
    let (mut b, _) = (&data[..]).into_parts();

    assert_eq!(a, b, "cursors at the same position should be equal");
    b.step();
    assert_ne!(a, b, "cursors at different positions should differ");
}

// ============================================================================
// Random Access Tests
// ============================================================================

/// Test constant-size jumps with advance_by.
///
/// Verifies that advancing lands exactly n positions ahead.
#[test]
fn test_slice_advance_by() {
    let data = [0, 1, 2, 3, 4, 5];
    let (mut cursor, _) = (&data[..]).into_parts();

    cursor.advance_by(4);
    assert_eq!(*cursor.read(), 4, "advance_by(4) should land on index 4");

    cursor.advance_by(0);
    assert_eq!(*cursor.read(), 4, "advance_by(0) should not move");
}

/// Test stepping backward.
#[test]
fn test_slice_step_back() {
    let data = [7, 8, 9];
    let (mut cursor, _) = (&data[..]).into_parts();

    cursor.advance_by(2);
    cursor.step_back();
    assert_eq!(*cursor.read(), 8, "step_back should move one position left");
}

/// Test seeking in both directions.
///
/// Verifies positive and negative offsets.
#[test]
fn test_slice_seek() {
    let data = [0, 10, 20, 30, 40];
    let (mut cursor, _) = (&data[..]).into_parts();

    cursor.seek(3);
    assert_eq!(*cursor.read(), 30, "seek(3) should land on index 3");

    cursor.seek(-2);
    assert_eq!(*cursor.read(), 10, "seek(-2) should land back on index 1");
}

/// Test signed cursor-to-cursor distance.
///
/// Verifies sign conventions in both directions.
#[test]
fn test_slice_distance_to() {
    let data = [1, 2, 3, 4];
    let (a, _) = (&data[..]).into_parts();
    let mut b = a;
    b.advance_by(3);

    assert_eq!(a.distance_to(&b), 3, "forward distance should be positive");
    assert_eq!(b.distance_to(&a), -3, "backward distance should be negative");
    assert_eq!(a.distance_to(&a), 0, "distance to self should be zero");
}

// ============================================================================
// Sentinel and Distance Tests
// ============================================================================

/// Test the exact distance hint of the slice sentinel.
#[test]
fn test_slice_remaining_hint() {
    let data = [1, 2, 3, 4, 5];
    let (mut cursor, end) = (&data[..]).into_parts();

    assert_eq!(end.remaining(&cursor), Some(5), "full slice remains");
    cursor.advance_by(2);
    assert_eq!(end.remaining(&cursor), Some(3), "hint should track position");
}

/// Test that the unreachable sentinel never reports the end.
#[test]
fn test_unreachable_never_ends() {
    let data = [1, 2, 3];
    let (mut cursor, _) = (&data[..]).into_parts();
    let nowhere = Unreachable;

    for _ in 0..data.len() {
        assert!(
            !nowhere.is_end(&cursor),
            "unreachable sentinel must never match"
        );
        cursor.step();
    }
}

/// Test the unbounded flag on sentinel types.
///
/// Verifies that only the unreachable sentinel advertises unboundedness.
#[test]
fn test_unbounded_flag() {
    assert!(
        <Unreachable as SentinelFor<SliceCursor<'static, i32>>>::UNBOUNDED,
        "unreachable sentinel is unbounded"
    );
    assert!(
        !<SliceCursor<'static, i32> as SentinelFor<SliceCursor<'static, i32>>>::UNBOUNDED,
        "a slice end is bounded"
    );
}

/// Test distance with a hint available.
#[test]
fn test_distance_with_hint() {
    let data = [9, 9, 9, 9];
    let (cursor, end) = (&data[..]).into_parts();

    assert_eq!(distance(&cursor, &end), 4, "distance should match length");
}

/// Test distance when the hint is withheld.
///
/// Verifies the walking fallback is taken and still counts correctly.
#[test]
fn test_distance_without_hint() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    let (cursor, end) = forward_only(&data[..]);

    assert_eq!(
        end.remaining(&cursor),
        None,
        "forward-only wrapper should withhold the hint"
    );
    assert_eq!(
        distance(&cursor, &end),
        7,
        "walking fallback should count every element"
    );
}

/// Test that the forward-only wrapper pins the tier.
#[test]
fn test_forward_only_capability() {
    let data = [1, 2, 3];
    let (cursor, end) = forward_only(&data[..]);

    let _ = (&cursor, &end);
    assert_eq!(
        <traverse::internals::primitives::testkit::ForwardOnly<SliceCursor<'static, i32>> as Cursor>::CAPABILITY,
        Capability::Forward,
        "wrapper should report the forward tier"
    );
}
