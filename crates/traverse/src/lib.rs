//! # Traverse — sequence algorithms over cursors, sentinels, and lazy views
//!
//! Generic sequence algorithms and composable lazy views for **Rust**, built
//! on one uniform abstraction: a *cursor* that walks positions and a
//! *sentinel* that recognizes the end. Containers, raw spans, and lazily
//! computed sequences all traverse the same way, so a single algorithm
//! implementation serves them all.
//!
//! ## What is a range here?
//!
//! Anything that decomposes into a begin cursor and an end sentinel: a
//! borrowed slice or `Vec`, a view pipeline, a cursor-delimited
//! [`Subrange`](prelude::Subrange), or an explicit `(cursor, sentinel)`
//! pair. The sentinel may be a different type than the cursor, which is what
//! lets a bounded buffer and an unbounded counter share one algorithm set.
//!
//! ## Quick Start
//!
//! ### Locating extremes
//!
//! ```rust
//! use traverse::prelude::*;
//!
//! let scores = [3, 9, 4, 9, 1];
//!
//! let best = max_element(&scores[..]);
//! assert_eq!(best.read(), &9);
//! assert_eq!(best.index(), 1); // first of the equal maxima
//!
//! let (low, high) = minmax_element(&scores[..]);
//! assert_eq!((low.read(), high.read()), (&1, &9));
//! ```
//!
//! ### Searching sorted data
//!
//! ```rust
//! use traverse::prelude::*;
//!
//! let sorted = [0, 0, 1, 1, 1, 2, 2, 3];
//!
//! let ones = equal_range(&sorted[..], &1);
//! assert_eq!((ones.start.index(), ones.end.index()), (2, 5));
//! assert_eq!(ones.len(), 3);
//!
//! // Absent values produce an empty subrange at the insertion point.
//! let missing = equal_range(&sorted[..], &5);
//! assert!(missing.is_empty());
//! assert_eq!(missing.start.index(), 8);
//! ```
//!
//! ### Generating values
//!
//! ```rust
//! use traverse::prelude::*;
//!
//! let mut state = (0u64, 1u64);
//! let (seq, _gen) = generate_n(Vec::new(), 6, move || {
//!     let out = state.0;
//!     state = (state.1, state.0 + state.1);
//!     out
//! });
//! assert_eq!(seq, [0, 1, 1, 2, 3, 5]);
//! ```
//!
//! ### Composing lazy views
//!
//! ```rust
//! use traverse::prelude::*;
//!
//! let flat: Vec<i32> =
//!     elements(join(transform(take(iota(0), 4), |i| repeat_n(i, 2)))).collect();
//! assert_eq!(flat, [0, 0, 1, 1, 2, 2, 3, 3]);
//! ```
//!
//! No intermediate sequence is materialized: `iota` counts on demand,
//! `transform` maps on each read, and `join` flattens by holding a single
//! inner cursor at a time.
//!
//! ## Bounded by construction
//!
//! `iota` never ends, and feeding it to a whole-range algorithm like
//! `max_element` is a compile error: its end marker does not implement
//! [`Reachable`](prelude::Reachable). Passing it through `take` first
//! produces a range whose end is always reachable, which every algorithm
//! accepts. The guard costs nothing at run time; it lives entirely in the
//! types.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! traverse = { version = "0.1", default-features = false }
//! ```
//!
//! The cursor model, every algorithm, and every view are allocation-free;
//! only the growable-vector sink and the borrowed-`Vec` range need `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - cursors, sentinels, ranges, and sinks.
mod primitives;

// Layer 2: Order - projection and relation defaults.
mod order;

// Layer 3: Algorithms - extrema, partition searches, and generation.
mod algorithms;

// Layer 4: Views - lazy sequence adaptors.
mod views;

// Aggregated public surface.
mod api;

// Standard traverse prelude.
pub mod prelude {
    pub use crate::api::{
        capability_of, distance, elements, equal_range, equal_range_by, generate_n, ident, iota,
        join, less, lower_bound, lower_bound_by, max_element, max_element_by, minmax_element,
        minmax_element_by, repeat_n, take, transform, upper_bound, upper_bound_by,
        BidirectionalCursor, Capability, Cursor, Elements, ForwardCursor, IntoRange, Iota,
        IotaCursor, Join, JoinCursor, JoinEnd, RandomAccessCursor, Reachable, RepeatN,
        RepeatNCursor, RepeatNEnd, SentinelFor, Sink, SinkFull, SliceCursor, SliceSink, Subrange,
        Take, TakeCursor, TakeEnd, Transform, TransformCursor, TransformEnd, Unreachable,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod order {
        pub use crate::order::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod views {
        pub use crate::views::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
