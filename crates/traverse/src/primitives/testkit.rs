//! Capability-restricting wrappers for exercising fallback paths.
//!
//! Wrapping a range in [`forward_only`] caps its cursor at the forward tier
//! and suppresses the sentinel's distance hint. Tests use this to prove that
//! tier-sensitive algorithms produce the same answers when constant-time
//! positioning is unavailable.

// Internal dependencies
use crate::primitives::capability::Capability;
use crate::primitives::cursor::{Cursor, ForwardCursor, Reachable, SentinelFor};
use crate::primitives::range::IntoRange;

// ============================================================================
// Forward-Only Wrapper
// ============================================================================

/// Cursor wrapper pinned to the forward tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardOnly<C>(pub C);

/// End marker for [`ForwardOnly`]; hides the inner distance hint.
#[derive(Clone, Debug)]
pub struct ForwardOnlyEnd<S>(pub S);

impl<C: Cursor> Cursor for ForwardOnly<C> {
    type Item = C::Item;

    const CAPABILITY: Capability = Capability::Forward;

    #[inline]
    fn step(&mut self) {
        self.0.step();
    }

    #[inline]
    fn read(&self) -> C::Item {
        self.0.read()
    }
}

impl<C, S> SentinelFor<ForwardOnly<C>> for ForwardOnlyEnd<S>
where
    C: Cursor,
    S: SentinelFor<C>,
{
    const UNBOUNDED: bool = S::UNBOUNDED;

    #[inline]
    fn is_end(&self, cursor: &ForwardOnly<C>) -> bool {
        self.0.is_end(&cursor.0)
    }

    // `remaining` stays at the default: the hint is deliberately withheld.
}

impl<C: ForwardCursor> SentinelFor<ForwardOnly<C>> for ForwardOnly<C> {
    #[inline]
    fn is_end(&self, cursor: &ForwardOnly<C>) -> bool {
        self.0.is_end(&cursor.0)
    }
}

impl<C> Reachable for ForwardOnly<C> {}

impl<S: Reachable> Reachable for ForwardOnlyEnd<S> {}

impl<C: ForwardCursor> ForwardCursor for ForwardOnly<C> {}

/// Restrict any range to forward traversal with no distance hints.
#[inline]
pub fn forward_only<R: IntoRange>(range: R) -> (ForwardOnly<R::Cursor>, ForwardOnlyEnd<R::End>) {
    let (cursor, end) = range.into_parts();
    (ForwardOnly(cursor), ForwardOnlyEnd(end))
}
