//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the traversal model everything else is built on:
//! capability tiers, the cursor and sentinel traits, range decomposition,
//! borrowed-container cursors, and write-side sinks. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Views
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Order
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Traversal capability tiers.
pub mod capability;

/// Cursor and sentinel traits.
pub mod cursor;

/// Range construction and decomposition.
pub mod range;

/// Borrowed-container ranges.
pub mod slice;

/// Write-side destinations.
pub mod sink;

/// Shared error types.
pub mod errors;

/// Capability-restricting wrappers for tests.
#[cfg(feature = "dev")]
pub mod testkit;
