//! Public surface of the crate.
//!
//! ## Purpose
//!
//! This module gathers everything user code touches into one place: the
//! traversal traits, the borrowed-container and view ranges, the algorithm
//! set, and the default comparison suppliers. The crate prelude re-exports
//! from here.
//!
//! ## Key concepts
//!
//! * **Ranges in, cursors out**: Algorithms accept any [`IntoRange`] value,
//!   whether a container borrow, a view pipeline, a [`Subrange`], or a raw
//!   `(cursor, sentinel)` pair, and return cursors or subranges.
//! * **Two spellings per comparison algorithm**: the plain form uses
//!   [`less`] over [`ident`]; the `_by` form takes an explicit relation and
//!   projection.
//! * **Views compose**: Each view factory returns a value that is itself a
//!   range, so factories nest without restriction.

// Traversal model
pub use crate::primitives::capability::Capability;
pub use crate::primitives::cursor::{
    distance, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Reachable,
    SentinelFor, Unreachable,
};
pub use crate::primitives::range::{capability_of, elements, Elements, IntoRange, Subrange};
pub use crate::primitives::slice::SliceCursor;

// Write-side destinations
pub use crate::primitives::errors::SinkFull;
pub use crate::primitives::sink::{Sink, SliceSink};

// Comparison defaults
pub use crate::order::defaults::{ident, less};

// Algorithms
pub use crate::algorithms::extrema::{
    max_element, max_element_by, minmax_element, minmax_element_by,
};
pub use crate::algorithms::generate::generate_n;
pub use crate::algorithms::partition::{
    equal_range, equal_range_by, lower_bound, lower_bound_by, upper_bound, upper_bound_by,
};

// Views
pub use crate::views::iota::{iota, Iota, IotaCursor};
pub use crate::views::join::{join, Join, JoinCursor, JoinEnd};
pub use crate::views::repeat_n::{repeat_n, RepeatN, RepeatNCursor, RepeatNEnd};
pub use crate::views::take::{take, Take, TakeCursor, TakeEnd};
pub use crate::views::transform::{transform, Transform, TransformCursor, TransformEnd};
