//! Write-side destinations for generated values.
//!
//! ## Purpose
//!
//! This module defines the destination abstraction consumed by value
//! production: an ordered stream of `put` calls. A growable vector appends,
//! a [`SliceSink`] overwrites a borrowed buffer front to back.
//!
//! ## Design notes
//!
//! * **Write-only**: A sink never reads back. Producing and consuming sides
//!   stay decoupled.
//! * **By value or by `&mut`**: Sinks move through algorithms and come back
//!   out, so callers keep state like a fill count. A `&mut` to any sink is
//!   itself a sink for callers who prefer to keep ownership.
//! * **Bounded writes**: `SliceSink::put` panics when the buffer is full;
//!   [`SliceSink::try_put`] reports [`SinkFull`] instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SinkFull;

// ============================================================================
// Sink Trait
// ============================================================================

/// Destination that accepts a stream of values in order.
pub trait Sink<T> {
    /// Accept the next value.
    fn put(&mut self, value: T);
}

impl<T> Sink<T> for Vec<T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.push(value);
    }
}

impl<T, K: Sink<T> + ?Sized> Sink<T> for &mut K {
    #[inline]
    fn put(&mut self, value: T) {
        (**self).put(value);
    }
}

// ============================================================================
// Slice Sink
// ============================================================================

/// Fixed-capacity sink that overwrites a mutable slice front to back.
#[derive(Debug)]
pub struct SliceSink<'a, T> {
    slot: &'a mut [T],
    filled: usize,
}

impl<'a, T> SliceSink<'a, T> {
    /// Wrap a mutable slice; writes start at its first element.
    #[inline]
    pub fn new(slot: &'a mut [T]) -> Self {
        SliceSink { slot, filled: 0 }
    }

    /// Number of values written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.filled
    }

    /// Capacity of the underlying slice.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slot.len()
    }

    /// Checked write; reports [`SinkFull`] instead of panicking at capacity.
    #[inline]
    pub fn try_put(&mut self, value: T) -> Result<(), SinkFull> {
        if self.filled == self.slot.len() {
            return Err(SinkFull {
                capacity: self.slot.len(),
            });
        }
        self.slot[self.filled] = value;
        self.filled += 1;
        Ok(())
    }
}

impl<T> Sink<T> for SliceSink<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        assert!(
            self.filled < self.slot.len(),
            "put: slice sink is full (capacity {})",
            self.slot.len()
        );
        self.slot[self.filled] = value;
        self.filled += 1;
    }
}
