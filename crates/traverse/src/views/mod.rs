//! Layer 4: Views
//!
//! # Purpose
//!
//! This layer provides lazy sequence adaptors. A view is a cheap value
//! describing a sequence; no element exists until a cursor reads it. Views
//! are ranges themselves, so they nest freely and feed every algorithm in
//! the crate:
//!
//! - **Iota**: unbounded ascending counter
//! - **RepeatN**: bounded repetition of one value
//! - **Take**: finite prefix of another range
//! - **Transform**: lazy elementwise mapping
//! - **Join**: flattening of a range of ranges
//!
//! Adaptors take their source by value, the way iterator adaptors do, while
//! element storage stays borrowed inside the source. Views are `Clone`
//! whenever their parts are, so a pipeline can be traversed more than once.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Views ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Order
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unbounded ascending counter.
pub mod iota;

/// Bounded repetition of one value.
pub mod repeat_n;

/// Finite prefix of another range.
pub mod take;

/// Lazy elementwise mapping.
pub mod transform;

/// Flattening of a range of ranges.
pub mod join;
