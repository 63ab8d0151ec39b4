//! Lazy elementwise mapping view.

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Reachable, SentinelFor,
};
use crate::primitives::range::{elements, Elements, IntoRange};

// ============================================================================
// Transform View
// ============================================================================

/// Lazy view applying a function to each element of another range.
///
/// The function runs on every read and its results are never cached;
/// reading the same position twice runs it twice. Each cursor carries its
/// own clone of the function, so independently advanced cursors never share
/// callable state.
#[must_use = "views are lazy and do nothing unless traversed"]
#[derive(Copy, Clone, Debug)]
pub struct Transform<R, F> {
    source: R,
    func: F,
}

/// Map `func` lazily over the elements of `range`.
#[inline]
pub fn transform<R, F, U>(range: R, func: F) -> Transform<R, F>
where
    R: IntoRange,
    F: Fn(R::Item) -> U + Clone,
{
    Transform {
        source: range,
        func,
    }
}

// ============================================================================
// Cursor and End Marker
// ============================================================================

/// Cursor over a [`Transform`] view; owns its copy of the mapping.
#[derive(Clone)]
pub struct TransformCursor<C, F> {
    inner: C,
    func: F,
}

/// End marker for [`Transform`]: delegates to the source's end.
#[derive(Copy, Clone, Debug)]
pub struct TransformEnd<S> {
    inner: S,
}

impl<C: fmt::Debug, F> fmt::Debug for TransformCursor<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformCursor")
            .field("inner", &self.inner)
            .finish()
    }
}

// Position equality only; the mapping does not affect position.
impl<C: PartialEq, F> PartialEq for TransformCursor<C, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Eq, F> Eq for TransformCursor<C, F> {}

impl<C, F, U> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Clone,
{
    type Item = U;

    const CAPABILITY: Capability = C::CAPABILITY;

    #[inline]
    fn step(&mut self) {
        self.inner.step();
    }

    #[inline]
    fn read(&self) -> U {
        (self.func)(self.inner.read())
    }
}

impl<C, F, U, S> SentinelFor<TransformCursor<C, F>> for TransformEnd<S>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Clone,
    S: SentinelFor<C>,
{
    const UNBOUNDED: bool = S::UNBOUNDED;

    #[inline]
    fn is_end(&self, cursor: &TransformCursor<C, F>) -> bool {
        self.inner.is_end(&cursor.inner)
    }

    #[inline]
    fn remaining(&self, cursor: &TransformCursor<C, F>) -> Option<usize> {
        self.inner.remaining(&cursor.inner)
    }
}

impl<S: Reachable> Reachable for TransformEnd<S> {}

impl<C, F, U> SentinelFor<TransformCursor<C, F>> for TransformCursor<C, F>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn is_end(&self, cursor: &TransformCursor<C, F>) -> bool {
        self.inner.is_end(&cursor.inner)
    }

    #[inline]
    fn remaining(&self, cursor: &TransformCursor<C, F>) -> Option<usize> {
        self.inner.remaining(&cursor.inner)
    }
}

impl<C, F> Reachable for TransformCursor<C, F> {}

impl<C, F, U> ForwardCursor for TransformCursor<C, F>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n);
    }
}

impl<C, F, U> BidirectionalCursor for TransformCursor<C, F>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn step_back(&mut self) {
        self.inner.step_back();
    }
}

impl<C, F, U> RandomAccessCursor for TransformCursor<C, F>
where
    C: RandomAccessCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn seek(&mut self, offset: isize) {
        self.inner.seek(offset);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(&other.inner)
    }
}

// ============================================================================
// Range Conformance
// ============================================================================

impl<R, F, U> IntoRange for Transform<R, F>
where
    R: IntoRange,
    F: Fn(R::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = TransformCursor<R::Cursor, F>;
    type End = TransformEnd<R::End>;

    #[inline]
    fn into_parts(self) -> (TransformCursor<R::Cursor, F>, TransformEnd<R::End>) {
        let (inner, end) = self.source.into_parts();
        (
            TransformCursor {
                inner,
                func: self.func,
            },
            TransformEnd { inner: end },
        )
    }
}

impl<R, F, U> IntoIterator for Transform<R, F>
where
    R: IntoRange,
    F: Fn(R::Item) -> U + Clone,
{
    type Item = U;
    type IntoIter = Elements<TransformCursor<R::Cursor, F>, TransformEnd<R::End>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        elements(self)
    }
}
