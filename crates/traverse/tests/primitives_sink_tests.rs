#![cfg(feature = "dev")]
//! Tests for output sinks and sink errors.
//!
//! These tests verify the write-side contract:
//! - Growable vector sinks
//! - Fixed-capacity slice sinks, both checked and unchecked writes
//! - The sink-full error payload and its rendering
//!
//! ## Test Organization
//!
//! 1. **Vector Sinks** - Appending and borrowing
//! 2. **Slice Sinks** - Capacity, fill tracking, overflow
//! 3. **Errors** - Payload and display

use traverse::internals::primitives::errors::SinkFull;
use traverse::internals::primitives::sink::{Sink, SliceSink};

// ============================================================================
// Vector Sink Tests
// ============================================================================

/// Test that a vector sink appends in call order.
#[test]
fn test_vec_sink_appends() {
    let mut out = Vec::new();
    out.put(1);
    out.put(2);
    out.put(3);

    assert_eq!(out, vec![1, 2, 3], "puts should append in order");
}

/// Test the borrowed-sink forwarding.
///
/// Verifies that a mutable reference to a sink is itself a sink.
#[test]
fn test_borrowed_sink() {
    fn fill<K: Sink<i32>>(mut sink: K) {
        sink.put(7);
        sink.put(8);
    }

    let mut out = Vec::new();
    fill(&mut out);
    fill(&mut out);

    assert_eq!(out, vec![7, 8, 7, 8], "borrowed sink should write through");
}

// ============================================================================
// Slice Sink Tests
// ============================================================================

/// Test filling a slice sink up to capacity.
#[test]
fn test_slice_sink_fill() {
    let mut buffer = [0i32; 4];
    let mut sink = SliceSink::new(&mut buffer);

    assert_eq!(sink.capacity(), 4, "capacity should match the slice length");
    assert_eq!(sink.written(), 0, "fresh sink should be empty");

    sink.put(10);
    sink.put(20);
    assert_eq!(sink.written(), 2, "two writes should be recorded");

    drop(sink);
    assert_eq!(buffer, [10, 20, 0, 0], "writes should land at the front");
}

/// Test the checked write path.
///
/// Verifies that try_put accepts writes up to capacity and then reports
/// the exhausted capacity without touching earlier writes.
#[test]
fn test_slice_sink_try_put() {
    let mut buffer = [0i32; 2];
    let mut sink = SliceSink::new(&mut buffer);

    assert_eq!(sink.try_put(5), Ok(()));
    assert_eq!(sink.try_put(6), Ok(()));
    assert_eq!(
        sink.try_put(7),
        Err(SinkFull { capacity: 2 }),
        "overflow should report the capacity"
    );
    assert_eq!(sink.written(), 2, "failed write should not advance the fill");

    drop(sink);
    assert_eq!(buffer, [5, 6], "earlier writes should survive the failure");
}

/// Test that an unchecked overflow write panics.
#[test]
#[should_panic(expected = "slice sink is full")]
fn test_slice_sink_overflow_panics() {
    let mut buffer = [0i32; 1];
    let mut sink = SliceSink::new(&mut buffer);

    sink.put(1);
    sink.put(2);
}

/// Test a zero-capacity slice sink.
#[test]
fn test_slice_sink_zero_capacity() {
    let mut buffer: [i32; 0] = [];
    let mut sink = SliceSink::new(&mut buffer);

    assert_eq!(sink.capacity(), 0);
    assert_eq!(
        sink.try_put(1),
        Err(SinkFull { capacity: 0 }),
        "zero-capacity sink should reject the first write"
    );
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test the display form of the sink-full error.
#[test]
fn test_sink_full_display() {
    let err = SinkFull { capacity: 8 };
    assert_eq!(
        err.to_string(),
        "Sink is full: capacity 8 exhausted",
        "display should name the capacity"
    );
}
