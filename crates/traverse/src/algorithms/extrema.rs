//! Extremum location.
//!
//! ## Purpose
//!
//! This module finds the positions of the largest element and of both
//! extremes in a single pass. Results are cursors, so callers can read the
//! element, take its index, or carve a subrange at the hit.
//!
//! ## Design notes
//!
//! * **First maximum wins**: `max_element` replaces its candidate only on a
//!   strictly greater element, so of equal maxima the earliest is returned.
//! * **Paired scanning**: `minmax_element` consumes elements two at a time
//!   and spends at most three relation calls per pair, roughly 3n/2 in
//!   total instead of the 2n of two separate scans.
//! * **Asymmetric ties**: the paired scan returns the *first* minimum and
//!   the *last* maximum among duplicates. Callers that need the first
//!   maximum use `max_element`.
//!
//! ## Invariants
//!
//! * `max_element` applies the relation exactly `n - 1` times.
//! * On an empty range both operations return cursors at the end position.

// Internal dependencies
use crate::order::defaults::{ident, less};
use crate::primitives::cursor::{Cursor, ForwardCursor, Reachable, SentinelFor};
use crate::primitives::range::IntoRange;

// ============================================================================
// Maximum
// ============================================================================

/// Locate the first greatest element of `range`.
///
/// On an empty range the returned cursor sits at the end position.
#[inline]
pub fn max_element<R>(range: R) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    R::Item: PartialOrd,
{
    max_element_by(range, less, ident)
}

/// Locate the first element whose projected key no other key exceeds.
///
/// `relation` must be a strict ordering of the projected keys. The
/// projection runs once per comparison site and is never cached.
pub fn max_element_by<R, K, Rel, Proj>(range: R, mut relation: Rel, mut projection: Proj) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(R::Item) -> K,
{
    let (mut best, end) = range.into_parts();
    if end.is_end(&best) {
        return best;
    }
    let mut probe = best.clone();
    probe.step();
    while !end.is_end(&probe) {
        if relation(&projection(best.read()), &projection(probe.read())) {
            best = probe.clone();
        }
        probe.step();
    }
    best
}

// ============================================================================
// Minimum and Maximum Together
// ============================================================================

/// Locate the first smallest and last greatest elements of `range` in one
/// pass.
///
/// On an empty range both returned cursors sit at the end position.
#[inline]
pub fn minmax_element<R>(range: R) -> (R::Cursor, R::Cursor)
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    R::Item: PartialOrd,
{
    minmax_element_by(range, less, ident)
}

/// Locate both extremes under a caller-supplied relation and projection.
///
/// Elements are consumed in pairs: the two are ordered against each other
/// first, then the smaller challenges the minimum and the larger the
/// maximum. The minimum keeps its earliest holder while the maximum takes
/// its latest, a direct consequence of the pairing.
pub fn minmax_element_by<R, K, Rel, Proj>(
    range: R,
    mut relation: Rel,
    mut projection: Proj,
) -> (R::Cursor, R::Cursor)
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(R::Item) -> K,
{
    let (start, end) = range.into_parts();
    let mut min = start.clone();
    let mut max = start.clone();
    let mut probe = start;

    if end.is_end(&probe) {
        return (min, max);
    }
    probe.step();
    if end.is_end(&probe) {
        return (min, max);
    }

    // Second element settles which extreme the opener holds.
    if relation(&projection(probe.read()), &projection(min.read())) {
        min = probe.clone();
    } else {
        max = probe.clone();
    }

    loop {
        probe.step();
        if end.is_end(&probe) {
            break;
        }
        let first = probe.clone();
        probe.step();
        if end.is_end(&probe) {
            // Odd element out: one challenge per extreme.
            if relation(&projection(first.read()), &projection(min.read())) {
                min = first;
            } else if !relation(&projection(first.read()), &projection(max.read())) {
                max = first;
            }
            break;
        }
        let second = probe.clone();
        if relation(&projection(second.read()), &projection(first.read())) {
            if relation(&projection(second.read()), &projection(min.read())) {
                min = second;
            }
            if !relation(&projection(first.read()), &projection(max.read())) {
                max = first;
            }
        } else {
            if relation(&projection(first.read()), &projection(min.read())) {
                min = first;
            }
            if !relation(&projection(second.read()), &projection(max.read())) {
                max = second;
            }
        }
    }
    (min, max)
}
