//! Range construction and decomposition.
//!
//! ## Purpose
//!
//! This module defines how a "range" comes apart into the cursor/sentinel
//! pair the rest of the crate operates on. Borrowed containers, lazy views,
//! cursor-delimited subranges, and raw `(cursor, sentinel)` pairs all funnel
//! through one trait, so every algorithm accepts every sequence shape with a
//! single entry point.
//!
//! ## Key concepts
//!
//! 1. **[`IntoRange`]**: the decomposition trait. Consuming a range yields
//!    its begin cursor and end sentinel.
//! 2. **[`Subrange`]**: two cursors of the same type delimiting a slice of a
//!    larger sequence. Itself a range again.
//! 3. **[`Elements`]**: the bridge to [`Iterator`], so any range drives a
//!    `for` loop or an iterator chain.
//!
//! ## Invariants
//!
//! * `into_parts` returns a cursor positioned on the first element (or
//!   already at the end for an empty range) and a sentinel that recognizes
//!   the one-past-the-last position.
//! * For `Subrange`, `end` must be reachable from `start` by stepping.

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{distance, Cursor, ForwardCursor, SentinelFor};

// ============================================================================
// Range Decomposition
// ============================================================================

/// Conversion into a begin-cursor/end-sentinel pair.
pub trait IntoRange {
    /// Element type produced by the cursor.
    type Item;

    /// Begin cursor type.
    type Cursor: Cursor<Item = Self::Item>;

    /// End sentinel type.
    type End: SentinelFor<Self::Cursor>;

    /// Decompose into the traversal pair.
    fn into_parts(self) -> (Self::Cursor, Self::End);
}

// A raw (cursor, sentinel) pair is already a range.
impl<C, S> IntoRange for (C, S)
where
    C: Cursor,
    S: SentinelFor<C>,
{
    type Item = C::Item;
    type Cursor = C;
    type End = S;

    #[inline]
    fn into_parts(self) -> (C, S) {
        self
    }
}

/// Capability tier of a range's cursor type.
#[inline]
pub fn capability_of<R: IntoRange>(_range: &R) -> Capability {
    <R::Cursor as Cursor>::CAPABILITY
}

// ============================================================================
// Subrange
// ============================================================================

/// Cursor-delimited slice of a larger sequence.
///
/// Produced by partition searches and usable anywhere a range is expected,
/// so a search result can be fed straight back into another algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Subrange<C> {
    /// First position of the subrange.
    pub start: C,

    /// One-past-the-last position.
    pub end: C,
}

impl<C: ForwardCursor> Subrange<C> {
    /// Number of elements between `start` and `end`.
    #[inline]
    pub fn len(&self) -> usize {
        distance(&self.start, &self.end)
    }

    /// Whether the subrange holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<C: ForwardCursor> IntoRange for Subrange<C> {
    type Item = C::Item;
    type Cursor = C;
    type End = C;

    #[inline]
    fn into_parts(self) -> (C, C) {
        (self.start, self.end)
    }
}

impl<C: ForwardCursor> IntoIterator for Subrange<C> {
    type Item = C::Item;
    type IntoIter = Elements<C, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        elements(self)
    }
}

// ============================================================================
// Iterator Bridge
// ============================================================================

/// Iterator over a decomposed range.
#[derive(Clone, Debug)]
pub struct Elements<C, S> {
    cursor: C,
    end: S,
}

impl<C, S> Iterator for Elements<C, S>
where
    C: Cursor,
    S: SentinelFor<C>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.end.is_end(&self.cursor) {
            return None;
        }
        let value = self.cursor.read();
        self.cursor.step();
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end.remaining(&self.cursor) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<C, S> core::iter::FusedIterator for Elements<C, S>
where
    C: Cursor,
    S: SentinelFor<C>,
{
}

/// Iterate the elements of any range.
#[inline]
pub fn elements<R: IntoRange>(range: R) -> Elements<R::Cursor, R::End> {
    let (cursor, end) = range.into_parts();
    Elements { cursor, end }
}
