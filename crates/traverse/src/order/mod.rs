//! Layer 2: Order
//!
//! # Purpose
//!
//! This layer fixes the comparison protocol shared by every comparison-based
//! algorithm in the crate. Elements are never compared directly: each one
//! passes through a caller-supplied *projection* that extracts a key, and a
//! strict *relation* orders the keys. A call site always reads
//! `relation(&projection(a), &projection(b))`.
//!
//! Projections are applied at each comparison site and never cached, so a
//! stateful projection observes every probe.
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
//! Layer 2: Order ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Default projection and relation suppliers.
pub mod defaults;
