#![cfg(feature = "dev")]
//! Tests for sink-directed generation.
//!
//! These tests verify call counts, write order, and state threading:
//! - Exactly `count` generator calls, written in call order
//! - The sink and the generator come back for further use
//! - A zero count touches nothing
//! - A panicking generator leaves completed writes in place
//!
//! ## Test Organization
//!
//! 1. **Basic Generation** - Counts, order, zero
//! 2. **State Threading** - Resuming the returned parts
//! 3. **Bounded Sinks** - Slice destinations
//! 4. **Panics** - Propagation and partial writes

use traverse::internals::algorithms::generate::generate_n;
use traverse::internals::primitives::sink::SliceSink;

// ============================================================================
// Basic Generation Tests
// ============================================================================

/// Test generating into a growable vector.
///
/// Verifies count and order.
#[test]
fn test_generate_into_vec() {
    let mut next = 0;
    let (out, _) = generate_n(Vec::new(), 5, || {
        next += 1;
        next
    });

    assert_eq!(out, vec![1, 2, 3, 4, 5], "writes should follow call order");
}

/// Test that a zero count calls nothing and writes nothing.
#[test]
fn test_generate_zero() {
    let mut calls = 0;
    let (out, _) = generate_n(Vec::<i32>::new(), 0, || {
        calls += 1;
        calls
    });

    assert!(out.is_empty(), "zero count should write nothing");
    assert_eq!(calls, 0, "zero count should call nothing");
}

/// Test the exact number of generator calls.
#[test]
fn test_generate_call_count() {
    let mut calls = 0usize;
    let (_, _) = generate_n(Vec::new(), 7, || {
        calls += 1;
        calls
    });

    assert_eq!(calls, 7, "generator should run exactly count times");
}

// ============================================================================
// State Threading Tests
// ============================================================================

/// Test that the returned generator resumes where it stopped.
///
/// Verifies that captured state survives the handoff.
#[test]
fn test_generate_resumes() {
    let mut value = 1u64;
    let doubler = move || {
        let current = value;
        value *= 2;
        current
    };

    let (first, mut resume) = generate_n(Vec::new(), 3, doubler);
    assert_eq!(first, vec![1, 2, 4], "first batch should start the sequence");

    assert_eq!(resume(), 8, "returned generator should continue the sequence");

    let (second, _) = generate_n(Vec::new(), 2, resume);
    assert_eq!(second, vec![16, 32], "second batch should pick up after that");
}

/// Test generating through a borrowed sink.
///
/// Verifies that one vector can absorb several batches.
#[test]
fn test_generate_through_borrow() {
    let mut out = Vec::new();
    let mut next = 0;

    generate_n(&mut out, 2, || {
        next += 10;
        next
    });
    generate_n(&mut out, 2, || {
        next += 10;
        next
    });

    assert_eq!(out, vec![10, 20, 30, 40], "batches should append in order");
}

// ============================================================================
// Bounded Sink Tests
// ============================================================================

/// Test generating into a fixed-size buffer.
///
/// Verifies the filled prefix and the untouched tail.
#[test]
fn test_generate_into_slice() {
    let mut buffer = [0i32; 5];
    let mut next = 0;
    let (sink, _) = generate_n(SliceSink::new(&mut buffer), 3, || {
        next += 1;
        next * 100
    });

    assert_eq!(sink.written(), 3, "three slots should be filled");
    drop(sink);
    assert_eq!(buffer, [100, 200, 300, 0, 0], "tail should stay untouched");
}

// ============================================================================
// Panic Tests
// ============================================================================

/// Test that a generator panic propagates.
#[test]
#[should_panic(expected = "generator gave out")]
fn test_generate_panic_propagates() {
    let mut calls = 0;
    generate_n(Vec::<i32>::new(), 10, || {
        calls += 1;
        if calls == 4 {
            panic!("generator gave out");
        }
        calls
    });
}

/// Test that completed writes survive a generator panic.
///
/// Verifies the all-or-nothing boundary sits per element, not per batch.
#[test]
fn test_generate_panic_keeps_writes() {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let hits = std::cell::Cell::new(0);
    let mut out: Vec<i32> = Vec::new();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        generate_n(&mut out, 5, || {
            let n = hits.get();
            hits.set(n + 1);
            if n == 2 {
                panic!("third call fails");
            }
            n
        });
    }));

    assert!(outcome.is_err(), "panic should escape the generation loop");
    assert_eq!(out, vec![0, 1], "writes before the panic should remain");
}
