//! Borrowed-container ranges.
//!
//! This module makes `&[T]`, `&Vec<T>`, and `&[T; N]` usable as ranges. The
//! cursor is an index into the borrowed slice, so it is `Copy`, random
//! access, and never outlives the data it walks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::ptr;

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Reachable, SentinelFor,
};
use crate::primitives::range::IntoRange;

// ============================================================================
// Slice Cursor
// ============================================================================

/// Random-access cursor over a borrowed slice.
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<T> SliceCursor<'_, T> {
    /// Position of this cursor within the underlying slice.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }
}

// Hand-written so that `T` itself does not need `Clone`.
impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.data.len())
            .finish()
    }
}

// Position equality only. Cursors from different slices must not be mixed.
impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            ptr::eq(self.data, other.data),
            "eq: compared cursors must come from the same slice"
        );
        self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    const CAPABILITY: Capability = Capability::RandomAccess;

    #[inline]
    fn step(&mut self) {
        debug_assert!(self.pos < self.data.len(), "step: already past the slice");
        self.pos += 1;
    }

    #[inline]
    fn read(&self) -> &'a T {
        &self.data[self.pos]
    }
}

impl<'a, T> SentinelFor<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    #[inline]
    fn is_end(&self, cursor: &SliceCursor<'a, T>) -> bool {
        cursor.pos >= self.pos
    }

    #[inline]
    fn remaining(&self, cursor: &SliceCursor<'a, T>) -> Option<usize> {
        Some(self.pos.saturating_sub(cursor.pos))
    }
}

impl<T> Reachable for SliceCursor<'_, T> {}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(
            self.pos + n <= self.data.len(),
            "advance_by: target past the slice"
        );
        self.pos += n;
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.pos > 0, "step_back: already at the slice start");
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        let target = self.pos as isize + offset;
        debug_assert!(
            target >= 0 && target as usize <= self.data.len(),
            "seek: target outside the slice"
        );
        self.pos = target as usize;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            ptr::eq(self.data, other.data),
            "distance_to: cursors must come from the same slice"
        );
        other.pos as isize - self.pos as isize
    }
}

// ============================================================================
// Borrowed Containers as Ranges
// ============================================================================

impl<'a, T> IntoRange for &'a [T] {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline]
    fn into_parts(self) -> (SliceCursor<'a, T>, SliceCursor<'a, T>) {
        (
            SliceCursor { data: self, pos: 0 },
            SliceCursor {
                data: self,
                pos: self.len(),
            },
        )
    }
}

impl<'a, T> IntoRange for &'a Vec<T> {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline]
    fn into_parts(self) -> (SliceCursor<'a, T>, SliceCursor<'a, T>) {
        self.as_slice().into_parts()
    }
}

impl<'a, T, const N: usize> IntoRange for &'a [T; N] {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline]
    fn into_parts(self) -> (SliceCursor<'a, T>, SliceCursor<'a, T>) {
        self.as_slice().into_parts()
    }
}
