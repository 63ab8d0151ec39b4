//! Flattening view over a range of ranges.
//!
//! ## Purpose
//!
//! This module concatenates the elements of every inner range produced by an
//! outer range, in outer-then-inner order, without materializing anything.
//!
//! ## Design notes
//!
//! * **Owned descent**: The cursor holds the one inner cursor/sentinel pair
//!   currently being walked, pulled by value out of the outer range. State
//!   is proportional to nesting depth, not to element count.
//! * **Empty inners vanish**: After every inner range is exhausted the
//!   cursor pulls outer elements until it finds a non-empty inner, so a
//!   readable position always has an element under it.
//! * **Forward at best**: Walking backward out of an exhausted inner range
//!   would need the previous inner's end position, which is gone. The
//!   capability tier is therefore capped at forward.
//!
//! ## Invariants
//!
//! * The cursor's inner pair is `None` exactly when the whole flattened
//!   sequence is exhausted; the end marker checks nothing else.
//! * The outer cursor always sits one past the inner range being walked.

// External dependencies
use core::fmt;
use core::marker::PhantomData;

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{Cursor, ForwardCursor, Reachable, SentinelFor};
use crate::primitives::range::{elements, Elements, IntoRange};

// ============================================================================
// Join View
// ============================================================================

/// Lazy view flattening a range whose elements are themselves ranges.
#[must_use = "views are lazy and do nothing unless traversed"]
#[derive(Copy, Clone, Debug)]
pub struct Join<R> {
    source: R,
}

/// Flatten a range of ranges into one sequence.
#[inline]
pub fn join<R>(range: R) -> Join<R>
where
    R: IntoRange,
    R::Item: IntoRange,
{
    Join { source: range }
}

// ============================================================================
// Cursor
// ============================================================================

/// Cursor over a [`Join`] view.
pub struct JoinCursor<C, S>
where
    C: Cursor,
    C::Item: IntoRange,
{
    outer: C,
    outer_end: S,
    inner: Option<(
        <C::Item as IntoRange>::Cursor,
        <C::Item as IntoRange>::End,
    )>,
}

impl<C, S> JoinCursor<C, S>
where
    C: Cursor,
    C::Item: IntoRange,
    S: SentinelFor<C>,
{
    // Pull inner ranges off the outer range until one has an element or the
    // outer range ends.
    fn settle(&mut self) {
        while self.inner.is_none() {
            if self.outer_end.is_end(&self.outer) {
                return;
            }
            let (cursor, end) = self.outer.read().into_parts();
            self.outer.step();
            if !end.is_end(&cursor) {
                self.inner = Some((cursor, end));
            }
        }
    }
}

impl<C, S> Cursor for JoinCursor<C, S>
where
    C: Cursor,
    C::Item: IntoRange,
    S: SentinelFor<C>,
{
    type Item = <C::Item as IntoRange>::Item;

    const CAPABILITY: Capability = C::CAPABILITY
        .floor(<<C::Item as IntoRange>::Cursor as Cursor>::CAPABILITY)
        .floor(Capability::Forward);

    fn step(&mut self) {
        let (cursor, end) = self
            .inner
            .as_mut()
            .expect("step: join already exhausted");
        cursor.step();
        if end.is_end(cursor) {
            self.inner = None;
            self.settle();
        }
    }

    fn read(&self) -> Self::Item {
        let (cursor, _) = self
            .inner
            .as_ref()
            .expect("read: join already exhausted");
        cursor.read()
    }
}

impl<C, S> Clone for JoinCursor<C, S>
where
    C: Cursor + Clone,
    C::Item: IntoRange,
    S: Clone,
    <C::Item as IntoRange>::Cursor: Clone,
    <C::Item as IntoRange>::End: Clone,
{
    fn clone(&self) -> Self {
        JoinCursor {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<C, S> fmt::Debug for JoinCursor<C, S>
where
    C: Cursor + fmt::Debug,
    C::Item: IntoRange,
    S: fmt::Debug,
    <C::Item as IntoRange>::Cursor: fmt::Debug,
    <C::Item as IntoRange>::End: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinCursor")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

// Position equality: same outer position and same spot in the same inner.
impl<C, S> PartialEq for JoinCursor<C, S>
where
    C: Cursor + PartialEq,
    C::Item: IntoRange,
    <C::Item as IntoRange>::Cursor: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.outer != other.outer {
            return false;
        }
        match (&self.inner, &other.inner) {
            (Some((a, _)), Some((b, _))) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<C, S> SentinelFor<JoinCursor<C, S>> for JoinCursor<C, S>
where
    C: ForwardCursor,
    C::Item: IntoRange,
    S: SentinelFor<C> + Clone,
    <C::Item as IntoRange>::Cursor: ForwardCursor,
    <C::Item as IntoRange>::End: Clone,
{
    #[inline]
    fn is_end(&self, cursor: &JoinCursor<C, S>) -> bool {
        cursor == self
    }
}

impl<C, S> Reachable for JoinCursor<C, S>
where
    C: Cursor,
    C::Item: IntoRange,
{
}

impl<C, S> ForwardCursor for JoinCursor<C, S>
where
    C: ForwardCursor,
    C::Item: IntoRange,
    S: SentinelFor<C> + Clone,
    <C::Item as IntoRange>::Cursor: ForwardCursor,
    <C::Item as IntoRange>::End: Clone,
{
}

// ============================================================================
// End Marker
// ============================================================================

/// End marker for [`Join`]: the outer range and the last inner range are
/// both exhausted.
pub struct JoinEnd<R> {
    marker: PhantomData<R>,
}

impl<R> Clone for JoinEnd<R> {
    #[inline]
    fn clone(&self) -> Self {
        JoinEnd {
            marker: PhantomData,
        }
    }
}

impl<R> Copy for JoinEnd<R> {}

impl<R> fmt::Debug for JoinEnd<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JoinEnd")
    }
}

impl<R> SentinelFor<JoinCursor<R::Cursor, R::End>> for JoinEnd<R>
where
    R: IntoRange,
    R::Item: IntoRange,
{
    const UNBOUNDED: bool = <R::End as SentinelFor<R::Cursor>>::UNBOUNDED;

    #[inline]
    fn is_end(&self, cursor: &JoinCursor<R::Cursor, R::End>) -> bool {
        cursor.inner.is_none()
    }
}

impl<R> Reachable for JoinEnd<R>
where
    R: IntoRange,
    R::Item: IntoRange,
    R::End: Reachable,
    <R::Item as IntoRange>::End: Reachable,
{
}

// ============================================================================
// Range Conformance
// ============================================================================

impl<R> IntoRange for Join<R>
where
    R: IntoRange,
    R::Item: IntoRange,
{
    type Item = <R::Item as IntoRange>::Item;
    type Cursor = JoinCursor<R::Cursor, R::End>;
    type End = JoinEnd<R>;

    fn into_parts(self) -> (Self::Cursor, Self::End) {
        let (outer, outer_end) = self.source.into_parts();
        let mut cursor = JoinCursor {
            outer,
            outer_end,
            inner: None,
        };
        cursor.settle();
        (
            cursor,
            JoinEnd {
                marker: PhantomData,
            },
        )
    }
}

impl<R> IntoIterator for Join<R>
where
    R: IntoRange,
    R::Item: IntoRange,
{
    type Item = <R::Item as IntoRange>::Item;
    type IntoIter = Elements<JoinCursor<R::Cursor, R::End>, JoinEnd<R>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        elements(self)
    }
}
