//! Error types for sink writes.
//!
//! ## Purpose
//!
//! This module defines the one error value the crate produces: a checked
//! write into a capacity-bounded sink that has no room left. Everything else
//! in the core is infallible by construction, and failures inside
//! caller-supplied callables propagate as panics untouched.
//!
//! ## Design notes
//!
//! * **Contextual**: The error carries the capacity that was exhausted.
//! * **No-std**: Usable without the standard library; `std::error::Error` is
//!   implemented only when the `std` feature is enabled.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error produced when a bounded sink cannot accept another value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkFull {
    /// Total capacity of the sink that rejected the write.
    pub capacity: usize,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SinkFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Sink is full: capacity {} exhausted", self.capacity)
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SinkFull {}
