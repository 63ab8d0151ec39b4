//! Finite prefix view.

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Reachable, SentinelFor,
};
use crate::primitives::range::{elements, Elements, IntoRange};

// ============================================================================
// Take View
// ============================================================================

/// Lazy view of at most the first `count` elements of another range.
///
/// The end marker is always reachable, whatever the source's end looks
/// like. This is the adaptor that turns an unbounded sequence into
/// something whole-range algorithms accept.
#[must_use = "views are lazy and do nothing unless traversed"]
#[derive(Copy, Clone, Debug)]
pub struct Take<R> {
    source: R,
    count: usize,
}

/// Limit `range` to at most its first `count` elements.
#[inline]
pub fn take<R: IntoRange>(range: R, count: usize) -> Take<R> {
    Take {
        source: range,
        count,
    }
}

// ============================================================================
// Cursor and End Marker
// ============================================================================

/// Cursor over a [`Take`] view; spends a budget while delegating movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeCursor<C> {
    inner: C,
    left: usize,
}

/// End marker for [`Take`]: the budget runs out or the source ends,
/// whichever comes first.
#[derive(Copy, Clone, Debug)]
pub struct TakeEnd<S> {
    inner: S,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    const CAPABILITY: Capability = C::CAPABILITY;

    #[inline]
    fn step(&mut self) {
        debug_assert!(self.left > 0, "step: take budget already spent");
        self.inner.step();
        self.left -= 1;
    }

    #[inline]
    fn read(&self) -> C::Item {
        self.inner.read()
    }
}

impl<C, S> SentinelFor<TakeCursor<C>> for TakeEnd<S>
where
    C: Cursor,
    S: SentinelFor<C>,
{
    #[inline]
    fn is_end(&self, cursor: &TakeCursor<C>) -> bool {
        cursor.left == 0 || self.inner.is_end(&cursor.inner)
    }

    #[inline]
    fn remaining(&self, cursor: &TakeCursor<C>) -> Option<usize> {
        if S::UNBOUNDED {
            // The source never ends, so the budget is the exact count.
            return Some(cursor.left);
        }
        self.inner
            .remaining(&cursor.inner)
            .map(|n| n.min(cursor.left))
    }
}

// The budget makes this end reachable even over an unbounded source.
impl<S> Reachable for TakeEnd<S> {}

impl<C: ForwardCursor> SentinelFor<TakeCursor<C>> for TakeCursor<C> {
    #[inline]
    fn is_end(&self, cursor: &TakeCursor<C>) -> bool {
        cursor.left <= self.left
    }

    #[inline]
    fn remaining(&self, cursor: &TakeCursor<C>) -> Option<usize> {
        Some(cursor.left.saturating_sub(self.left))
    }
}

impl<C> Reachable for TakeCursor<C> {}

impl<C: ForwardCursor> ForwardCursor for TakeCursor<C> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(n <= self.left, "advance_by: target past the take budget");
        self.inner.advance_by(n);
        self.left -= n;
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for TakeCursor<C> {
    #[inline]
    fn step_back(&mut self) {
        self.inner.step_back();
        self.left += 1;
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for TakeCursor<C> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        self.inner.seek(offset);
        if offset >= 0 {
            self.left -= offset as usize;
        } else {
            self.left += offset.unsigned_abs();
        }
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(&other.inner)
    }
}

// ============================================================================
// Range Conformance
// ============================================================================

impl<R: IntoRange> IntoRange for Take<R> {
    type Item = R::Item;
    type Cursor = TakeCursor<R::Cursor>;
    type End = TakeEnd<R::End>;

    #[inline]
    fn into_parts(self) -> (TakeCursor<R::Cursor>, TakeEnd<R::End>) {
        let (inner, end) = self.source.into_parts();
        (
            TakeCursor {
                inner,
                left: self.count,
            },
            TakeEnd { inner: end },
        )
    }
}

impl<R: IntoRange> IntoIterator for Take<R> {
    type Item = R::Item;
    type IntoIter = Elements<TakeCursor<R::Cursor>, TakeEnd<R::End>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        elements(self)
    }
}
