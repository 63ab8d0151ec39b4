//! Bounded repetition view.

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Reachable, SentinelFor,
};
use crate::primitives::range::{elements, Elements, IntoRange};

// ============================================================================
// RepeatN View
// ============================================================================

/// Lazy view that yields one value exactly `count` times.
///
/// Each read hands out a fresh clone of the value.
#[must_use = "views are lazy and do nothing unless traversed"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RepeatN<T> {
    value: T,
    count: usize,
}

/// Create the view repeating `value` exactly `count` times.
#[inline]
pub fn repeat_n<T: Clone>(value: T, count: usize) -> RepeatN<T> {
    RepeatN { value, count }
}

// ============================================================================
// Cursor and End Marker
// ============================================================================

/// Cursor over a [`RepeatN`] view; counts the repetitions still owed.
#[derive(Clone, Debug)]
pub struct RepeatNCursor<T> {
    value: T,
    left: usize,
}

/// End marker for [`RepeatN`]; reached when the repetition budget is spent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatNEnd;

impl<T: Clone> Cursor for RepeatNCursor<T> {
    type Item = T;

    const CAPABILITY: Capability = Capability::RandomAccess;

    #[inline]
    fn step(&mut self) {
        debug_assert!(self.left > 0, "step: repetition budget already spent");
        self.left -= 1;
    }

    #[inline]
    fn read(&self) -> T {
        self.value.clone()
    }
}

// Position equality only; the repeated value does not affect position.
impl<T> PartialEq for RepeatNCursor<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left
    }
}

impl<T> Eq for RepeatNCursor<T> {}

impl<T: Clone> SentinelFor<RepeatNCursor<T>> for RepeatNEnd {
    #[inline]
    fn is_end(&self, cursor: &RepeatNCursor<T>) -> bool {
        cursor.left == 0
    }

    #[inline]
    fn remaining(&self, cursor: &RepeatNCursor<T>) -> Option<usize> {
        Some(cursor.left)
    }
}

impl Reachable for RepeatNEnd {}

impl<T: Clone> SentinelFor<RepeatNCursor<T>> for RepeatNCursor<T> {
    #[inline]
    fn is_end(&self, cursor: &RepeatNCursor<T>) -> bool {
        cursor.left <= self.left
    }

    #[inline]
    fn remaining(&self, cursor: &RepeatNCursor<T>) -> Option<usize> {
        Some(cursor.left.saturating_sub(self.left))
    }
}

impl<T> Reachable for RepeatNCursor<T> {}

impl<T: Clone> ForwardCursor for RepeatNCursor<T> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(n <= self.left, "advance_by: target past the repetition budget");
        self.left -= n;
    }
}

impl<T: Clone> BidirectionalCursor for RepeatNCursor<T> {
    #[inline]
    fn step_back(&mut self) {
        self.left += 1;
    }
}

impl<T: Clone> RandomAccessCursor for RepeatNCursor<T> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        if offset >= 0 {
            self.left -= offset as usize;
        } else {
            self.left += offset.unsigned_abs();
        }
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.left as isize - other.left as isize
    }
}

// ============================================================================
// Range Conformance
// ============================================================================

impl<T: Clone> IntoRange for RepeatN<T> {
    type Item = T;
    type Cursor = RepeatNCursor<T>;
    type End = RepeatNEnd;

    #[inline]
    fn into_parts(self) -> (RepeatNCursor<T>, RepeatNEnd) {
        (
            RepeatNCursor {
                value: self.value,
                left: self.count,
            },
            RepeatNEnd,
        )
    }
}

impl<T: Clone> IntoIterator for RepeatN<T> {
    type Item = T;
    type IntoIter = Elements<RepeatNCursor<T>, RepeatNEnd>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        elements(self)
    }
}
