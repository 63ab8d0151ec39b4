//! Partition-point searches on sorted ranges.
//!
//! ## Purpose
//!
//! This module locates where a probe value belongs in a range sorted under
//! the caller's relation: the first admissible position (`lower_bound`), the
//! one-past-the-last (`upper_bound`), and the whole equivalence class as a
//! subrange (`equal_range`).
//!
//! ## Design notes
//!
//! * **Compared to the value only**: Elements are ordered against the probe
//!   value, never against each other, so the input needs to be partitioned
//!   with respect to the value rather than totally ordered.
//! * **Halving everywhere**: Every search halves the remaining distance, so
//!   the relation runs O(log n) times regardless of tier. Cursor movement is
//!   constant per probe when the range can jump and report its length, and
//!   linear in total otherwise.
//! * **Combined descent**: `equal_range` walks a single halving loop until
//!   the class straddles the midpoint, then finishes with one bounded
//!   `lower_bound` on the left half and one bounded `upper_bound` on the
//!   right.
//!
//! ## Invariants
//!
//! * An absent value yields an empty subrange positioned where the value
//!   would insert.
//! * Results feed back in: re-running a search on the returned subrange
//!   reproduces it.
//! * Input not sorted under the relation yields an unspecified but safe and
//!   terminating result.

// Internal dependencies
use crate::order::defaults::{ident, less};
use crate::primitives::cursor::{distance, Cursor, ForwardCursor, Reachable};
use crate::primitives::range::{IntoRange, Subrange};

// ============================================================================
// Bounded Searches
// ============================================================================

// First position in the next `n` elements whose key is not less than `value`.
fn lower_bound_n<C, K, Rel, Proj>(
    mut cursor: C,
    mut n: usize,
    value: &K,
    relation: &mut Rel,
    projection: &mut Proj,
) -> C
where
    C: ForwardCursor,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(C::Item) -> K,
{
    while n > 0 {
        let half = n / 2;
        let mut middle = cursor.clone();
        middle.advance_by(half);
        if relation(&projection(middle.read()), value) {
            middle.step();
            cursor = middle;
            n -= half + 1;
        } else {
            n = half;
        }
    }
    cursor
}

// First position in the next `n` elements whose key is greater than `value`.
fn upper_bound_n<C, K, Rel, Proj>(
    mut cursor: C,
    mut n: usize,
    value: &K,
    relation: &mut Rel,
    projection: &mut Proj,
) -> C
where
    C: ForwardCursor,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(C::Item) -> K,
{
    while n > 0 {
        let half = n / 2;
        let mut middle = cursor.clone();
        middle.advance_by(half);
        if !relation(value, &projection(middle.read())) {
            middle.step();
            cursor = middle;
            n -= half + 1;
        } else {
            n = half;
        }
    }
    cursor
}

// ============================================================================
// Lower Bound
// ============================================================================

/// First position at which `value` could be inserted while keeping the
/// range sorted.
#[inline]
pub fn lower_bound<R>(range: R, value: R::Item) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    R::Item: PartialOrd,
{
    lower_bound_by(range, value, less, ident)
}

/// `lower_bound` under a caller-supplied relation and projection.
///
/// The range must be partitioned so that elements whose key is less than
/// `value` all precede the rest.
pub fn lower_bound_by<R, K, Rel, Proj>(
    range: R,
    value: K,
    mut relation: Rel,
    mut projection: Proj,
) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(R::Item) -> K,
{
    let (cursor, end) = range.into_parts();
    let n = distance(&cursor, &end);
    lower_bound_n(cursor, n, &value, &mut relation, &mut projection)
}

// ============================================================================
// Upper Bound
// ============================================================================

/// Last position at which `value` could be inserted while keeping the
/// range sorted.
#[inline]
pub fn upper_bound<R>(range: R, value: R::Item) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    R::Item: PartialOrd,
{
    upper_bound_by(range, value, less, ident)
}

/// `upper_bound` under a caller-supplied relation and projection.
///
/// The range must be partitioned so that elements whose key is not greater
/// than `value` all precede the rest.
pub fn upper_bound_by<R, K, Rel, Proj>(
    range: R,
    value: K,
    mut relation: Rel,
    mut projection: Proj,
) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(R::Item) -> K,
{
    let (cursor, end) = range.into_parts();
    let n = distance(&cursor, &end);
    upper_bound_n(cursor, n, &value, &mut relation, &mut projection)
}

// ============================================================================
// Equal Range
// ============================================================================

/// Subrange of elements equivalent to `value` in a sorted range.
///
/// When the value is absent the result is empty and positioned at the
/// insertion point.
#[inline]
pub fn equal_range<R>(range: R, value: R::Item) -> Subrange<R::Cursor>
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    R::Item: PartialOrd,
{
    equal_range_by(range, value, less, ident)
}

/// `equal_range` under a caller-supplied relation and projection.
pub fn equal_range_by<R, K, Rel, Proj>(
    range: R,
    value: K,
    mut relation: Rel,
    mut projection: Proj,
) -> Subrange<R::Cursor>
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    R::End: Reachable,
    Rel: FnMut(&K, &K) -> bool,
    Proj: FnMut(R::Item) -> K,
{
    let (mut cursor, end) = range.into_parts();
    let mut dist = distance(&cursor, &end);
    while dist > 0 {
        let half = dist / 2;
        let mut middle = cursor.clone();
        middle.advance_by(half);
        let key = projection(middle.read());
        if relation(&key, &value) {
            // Class lies right of the midpoint.
            middle.step();
            cursor = middle;
            dist -= half + 1;
        } else if relation(&value, &key) {
            // Class lies left of the midpoint.
            dist = half;
        } else {
            // Midpoint is inside the class: finish each edge separately.
            let start = lower_bound_n(cursor, half, &value, &mut relation, &mut projection);
            middle.step();
            let finish = upper_bound_n(
                middle,
                dist - (half + 1),
                &value,
                &mut relation,
                &mut projection,
            );
            return Subrange {
                start,
                end: finish,
            };
        }
    }
    Subrange {
        start: cursor.clone(),
        end: cursor,
    }
}
