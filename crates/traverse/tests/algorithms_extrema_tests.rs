#![cfg(feature = "dev")]
//! Tests for extremum location.
//!
//! These tests verify position results, tie-breaking, and the comparison
//! budget of both scans:
//! - max_element returns the first of equal maxima in n - 1 comparisons
//! - minmax_element returns the first minimum and the last maximum in a
//!   paired scan of roughly 3n/2 comparisons
//! - Custom relations and projections steer both scans
//!
//! ## Test Organization
//!
//! 1. **Maximum** - Positions, ties, degenerate ranges
//! 2. **Comparison Budget** - Exact and bounded call counts
//! 3. **Both Extremes** - Positions, tie asymmetry, degenerate ranges
//! 4. **Relations and Projections** - Custom orderings and keys

use traverse::internals::algorithms::extrema::{
    max_element, max_element_by, minmax_element, minmax_element_by,
};
use traverse::internals::primitives::cursor::Cursor;
use traverse::internals::primitives::range::IntoRange;
use traverse::internals::primitives::testkit::forward_only;

// ============================================================================
// Maximum Tests
// ============================================================================

/// Test locating the maximum of a plain slice.
#[test]
fn test_max_basic() {
    let data = [3, 1, 4, 1, 5, 9, 2, 6];
    let best = max_element(&data[..]);

    assert_eq!(best.index(), 5, "maximum should sit at index 5");
    assert_eq!(*best.read(), 9, "maximum value should be 9");
}

/// Test that the first of equal maxima wins.
///
/// Verifies the strictly-greater replacement rule.
#[test]
fn test_max_first_tie_wins() {
    let data = [2, 7, 1, 7];
    let best = max_element(&data[..]);

    assert_eq!(best.index(), 1, "earliest maximum should be kept");
}

/// Test the maximum of an empty range.
///
/// Verifies that the returned cursor sits at the end position.
#[test]
fn test_max_empty() {
    let data: [i32; 0] = [];
    let best = max_element(&data[..]);

    assert_eq!(best.index(), 0, "empty range should return the end cursor");
}

/// Test the maximum of a single-element range.
#[test]
fn test_max_single() {
    let data = [42];
    let best = max_element(&data[..]);

    assert_eq!(best.index(), 0, "sole element is the maximum");
}

/// Test the maximum over a forward-only range.
///
/// Verifies that the scan needs nothing beyond stepping and cloning.
#[test]
fn test_max_forward_only() {
    let data = [5, 11, 3];
    let best = max_element(forward_only(&data[..]));

    assert_eq!(*best.read(), 11, "forward-only scan should agree");
}

/// Test the maximum over a cursor/end pair.
#[test]
fn test_max_pair_form() {
    let data = [1, 9, 2];
    let (cursor, end) = (&data[..]).into_parts();
    let best = max_element((cursor, end));

    assert_eq!(best.index(), 1, "pair form should behave like the slice");
}

// ============================================================================
// Comparison Budget Tests
// ============================================================================

/// Test that max_element applies the relation exactly n - 1 times.
#[test]
fn test_max_comparison_count() {
    for n in 1..=16usize {
        let data: Vec<i32> = (0..n as i32).rev().collect();
        let mut calls = 0usize;

        max_element_by(&data, |a, b| {
            calls += 1;
            a < b
        }, |x: &i32| *x);

        assert_eq!(calls, n - 1, "scan of {} elements should compare {} times", n, n - 1);
    }
}

/// Test the paired-scan comparison budget.
///
/// Verifies that locating both extremes stays near 3n/2 calls, well under
/// the 2n of two separate scans.
#[test]
fn test_minmax_comparison_budget() {
    for n in 2..=24usize {
        let data: Vec<i32> = (0..n as i32).map(|i| (i * 7) % 13).collect();
        let mut calls = 0usize;

        minmax_element_by(&data, |a, b| {
            calls += 1;
            a < b
        }, |x: &i32| *x);

        assert!(
            calls <= 3 * n / 2 + 2,
            "paired scan of {} elements took {} calls",
            n,
            calls
        );
    }
}

// ============================================================================
// Both Extremes Tests
// ============================================================================

/// Test locating both extremes of a plain slice.
#[test]
fn test_minmax_basic() {
    let data = [3, 9, 4, 9, 1];
    let (low, high) = minmax_element(&data[..]);

    assert_eq!(low.index(), 4, "minimum should sit at index 4");
    assert_eq!(high.index(), 3, "maximum should sit at the later 9");
}

/// Test the tie asymmetry of the paired scan.
///
/// Verifies that equal elements keep the first minimum and the last
/// maximum.
#[test]
fn test_minmax_tie_asymmetry() {
    let data = [7, 7, 7, 7];
    let (low, high) = minmax_element(&data[..]);

    assert_eq!(low.index(), 0, "first minimum should be kept");
    assert_eq!(high.index(), 3, "last maximum should be kept");
}

/// Test both extremes of an empty range.
#[test]
fn test_minmax_empty() {
    let data: [i32; 0] = [];
    let (low, high) = minmax_element(&data[..]);

    assert_eq!(low.index(), 0, "empty range should return the end cursor");
    assert_eq!(high.index(), 0, "empty range should return the end cursor");
}

/// Test both extremes of a single-element range.
///
/// Verifies that one element holds both titles.
#[test]
fn test_minmax_single() {
    let data = [5];
    let (low, high) = minmax_element(&data[..]);

    assert_eq!(low.index(), 0);
    assert_eq!(high.index(), 0);
    assert_eq!(low, high, "sole element is both extremes");
}

/// Test both extremes of a two-element range.
#[test]
fn test_minmax_two() {
    let data = [5, 3];
    let (low, high) = minmax_element(&data[..]);

    assert_eq!(low.index(), 1, "smaller second element is the minimum");
    assert_eq!(high.index(), 0, "larger first element is the maximum");
}

/// Test both extremes over a forward-only range.
#[test]
fn test_minmax_forward_only() {
    let data = [6, 2, 8, 4];
    let (low, high) = minmax_element(forward_only(&data[..]));

    assert_eq!(*low.read(), 2, "forward-only minimum should agree");
    assert_eq!(*high.read(), 8, "forward-only maximum should agree");
}

// ============================================================================
// Relation and Projection Tests
// ============================================================================

/// Test steering the scan with a reversed relation.
///
/// Verifies that a greater-than relation turns max_element into a
/// first-minimum search.
#[test]
fn test_max_reversed_relation() {
    let data = [4, 1, 6, 1, 3];
    let best = max_element_by(&data, |a, b| b < a, |x: &i32| *x);

    assert_eq!(best.index(), 1, "reversed relation should find the first 1");
}

/// Test projecting onto a key before comparing.
///
/// Verifies that the relation sees projected keys, not raw elements.
#[test]
fn test_max_projection() {
    struct Reading {
        label: &'static str,
        value: f64,
    }
    let data = [
        Reading { label: "a", value: 0.3 },
        Reading { label: "b", value: 1.7 },
        Reading { label: "c", value: 0.9 },
    ];

    let best = max_element_by(&data, |a, b| a < b, |r: &Reading| r.value);
    assert_eq!(best.read().label, "b", "projection should drive the ordering");
}

/// Test both extremes under a projection.
#[test]
fn test_minmax_projection() {
    let data = [(1, 'x'), (9, 'y'), (4, 'z')];
    let (low, high) = minmax_element_by(&data, |a, b| a < b, |p: &(i32, char)| p.0);

    assert_eq!(low.read().1, 'x', "minimum should follow the first field");
    assert_eq!(high.read().1, 'y', "maximum should follow the first field");
}
