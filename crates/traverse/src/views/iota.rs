//! Unbounded ascending counter view.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Reachable, SentinelFor,
    Unreachable,
};
use crate::primitives::range::{elements, Elements, IntoRange};

// ============================================================================
// Iota View
// ============================================================================

/// Lazy view of the unbounded sequence `start, start + 1, start + 2, ...`.
///
/// The end sentinel is [`Unreachable`], so whole-range algorithms reject an
/// `Iota` until `take` bounds it.
#[must_use = "views are lazy and do nothing unless traversed"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Iota<T> {
    start: T,
}

/// Create the unbounded counting view starting at `start`.
#[inline]
pub fn iota<T: PrimInt>(start: T) -> Iota<T> {
    Iota { start }
}

// ============================================================================
// Cursor
// ============================================================================

/// Cursor over an [`Iota`] view; the position is the counter value itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IotaCursor<T> {
    value: T,
}

impl<T: PrimInt> Cursor for IotaCursor<T> {
    type Item = T;

    const CAPABILITY: Capability = Capability::RandomAccess;

    #[inline]
    fn step(&mut self) {
        self.value = self.value + T::one();
    }

    #[inline]
    fn read(&self) -> T {
        self.value
    }
}

impl<T: PrimInt> SentinelFor<IotaCursor<T>> for IotaCursor<T> {
    #[inline]
    fn is_end(&self, cursor: &IotaCursor<T>) -> bool {
        cursor.value >= self.value
    }

    #[inline]
    fn remaining(&self, cursor: &IotaCursor<T>) -> Option<usize> {
        if cursor.value >= self.value {
            return Some(0);
        }
        (self.value - cursor.value).to_usize()
    }
}

impl<T> Reachable for IotaCursor<T> {}

impl<T: PrimInt> ForwardCursor for IotaCursor<T> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.value = self.value + T::from(n).unwrap();
    }
}

impl<T: PrimInt> BidirectionalCursor for IotaCursor<T> {
    #[inline]
    fn step_back(&mut self) {
        self.value = self.value - T::one();
    }
}

impl<T: PrimInt> RandomAccessCursor for IotaCursor<T> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        if offset >= 0 {
            self.value = self.value + T::from(offset).unwrap();
        } else {
            self.value = self.value - T::from(offset.unsigned_abs()).unwrap();
        }
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        if other.value >= self.value {
            (other.value - self.value).to_isize().unwrap()
        } else {
            -((self.value - other.value).to_isize().unwrap())
        }
    }
}

// ============================================================================
// Range Conformance
// ============================================================================

impl<T: PrimInt> IntoRange for Iota<T> {
    type Item = T;
    type Cursor = IotaCursor<T>;
    type End = Unreachable;

    #[inline]
    fn into_parts(self) -> (IotaCursor<T>, Unreachable) {
        (IotaCursor { value: self.start }, Unreachable)
    }
}

// The iterator never ends; pair with `take` or an explicit break.
impl<T: PrimInt> IntoIterator for Iota<T> {
    type Item = T;
    type IntoIter = Elements<IotaCursor<T>, Unreachable>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        elements(self)
    }
}
