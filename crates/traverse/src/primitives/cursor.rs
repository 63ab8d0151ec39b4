//! Cursor and sentinel traits for sequence traversal.
//!
//! ## Purpose
//!
//! This module defines the traversal contract every sequence in the crate
//! speaks: a cursor that walks positions and reads elements, paired with a
//! sentinel that answers "is this the end?". Algorithms and views are written
//! against these traits, never against concrete containers.
//!
//! ## Design notes
//!
//! * **Split contract**: The end marker is a separate value with its own
//!   type. A bounded slice and an unbounded counter differ only in their
//!   sentinel type.
//! * **Tiered**: Capability grows through subtraits (forward, bidirectional,
//!   random access). Each algorithm asks for the weakest tier it can use.
//! * **Hints, not impl selection**: [`SentinelFor::remaining`] reports an
//!   exact element count when one is cheaply known. Distance-sensitive
//!   algorithms consult the hint and otherwise fall back to walking.
//! * **Finite by type**: Algorithms that must see a whole sequence bound
//!   their sentinel with [`Reachable`]. [`Unreachable`] lacks that marker,
//!   so unbounded sequences are rejected at compile time while their
//!   `take`-limited prefixes are accepted.
//!
//! ## Key concepts
//!
//! 1. **Cursor**: a position that can `step` forward and `read` an element.
//! 2. **Sentinel**: a value that recognizes the end position of a cursor.
//! 3. **Capability tier**: which movements a cursor type supports.
//! 4. **Reachability**: whether a finite number of steps can hit the end.
//!
//! ## Invariants
//!
//! * `step` and `read` must not be called on a cursor at the end position.
//!   Violations terminate safely (a panic at worst) and never corrupt memory.
//! * A forward cursor that is cloned and replayed visits the same elements.
//! * `remaining` returns either `None` or the exact step count to the end.
//!
//! ## Non-goals
//!
//! * No erased or boxed cursors. Dispatch is static throughout.
//! * No mutation through cursors. Writing goes through sinks instead.

// Internal dependencies
use crate::primitives::capability::Capability;

// ============================================================================
// Core Traversal Traits
// ============================================================================

/// Position in a sequence that can read the current element and step forward.
pub trait Cursor {
    /// Element produced at each position.
    type Item;

    /// Strongest traversal tier this cursor type supports.
    const CAPABILITY: Capability;

    /// Advance to the next position.
    ///
    /// Must not be called when the cursor sits at the end position.
    fn step(&mut self);

    /// Produce the element at the current position.
    ///
    /// Must not be called when the cursor sits at the end position.
    fn read(&self) -> Self::Item;
}

/// End marker paired with a cursor type.
///
/// A sentinel is a value, not a position: it only knows how to recognize
/// cursors that have arrived. Cursors of forward tier and above also act as
/// sentinels for themselves, which is what makes cursor-delimited subranges
/// possible.
pub trait SentinelFor<C: Cursor> {
    /// True only for end markers that no finite number of steps can reach.
    ///
    /// Consulted by adaptors that can turn an unbounded tail into an exact
    /// count of their own.
    const UNBOUNDED: bool = false;

    /// Whether `cursor` sits at the end of the sequence.
    fn is_end(&self, cursor: &C) -> bool;

    /// Exact number of elements between `cursor` and this end, when that
    /// count is cheaply known.
    #[inline]
    fn remaining(&self, _cursor: &C) -> Option<usize> {
        None
    }
}

/// Marker for sentinel types that a finite number of steps always reaches.
///
/// Algorithms that must consume their whole input bound the end type with
/// this marker. [`Unreachable`] deliberately does not implement it.
pub trait Reachable {}

/// Sentinel for unbounded sequences; `is_end` is always false.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Unreachable;

impl<C: Cursor> SentinelFor<C> for Unreachable {
    const UNBOUNDED: bool = true;

    #[inline]
    fn is_end(&self, _cursor: &C) -> bool {
        false
    }
}

// ============================================================================
// Capability Subtraits
// ============================================================================

/// Multi-pass cursor: clonable, position-comparable, and usable as its own
/// end marker.
pub trait ForwardCursor: Cursor + Clone + PartialEq + SentinelFor<Self> + Reachable {
    /// Step `n` times.
    ///
    /// Random-access cursors override this with constant-time arithmetic.
    #[inline]
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}

/// Cursor that can also step backward.
pub trait BidirectionalCursor: ForwardCursor {
    /// Move to the previous position.
    ///
    /// Must not be called when the cursor sits at the start position.
    fn step_back(&mut self);
}

/// Cursor with constant-time jumps and distances.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Jump by `offset` positions; negative offsets move backward.
    fn seek(&mut self, offset: isize);

    /// Signed number of steps from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

// ============================================================================
// Distance
// ============================================================================

/// Number of elements between `cursor` and `end`.
///
/// Uses the sentinel's exact hint when one is available and otherwise walks
/// a clone of the cursor.
pub fn distance<C, S>(cursor: &C, end: &S) -> usize
where
    C: ForwardCursor,
    S: SentinelFor<C> + Reachable,
{
    if let Some(n) = end.remaining(cursor) {
        return n;
    }
    let mut probe = cursor.clone();
    let mut n = 0;
    while !end.is_end(&probe) {
        probe.step();
        n += 1;
    }
    n
}
