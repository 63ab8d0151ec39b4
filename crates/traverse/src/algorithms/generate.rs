//! In-order value generation.

// Internal dependencies
use crate::primitives::sink::Sink;

// ============================================================================
// Generate N
// ============================================================================

/// Invoke `generator` exactly `count` times, writing each value to `dest`
/// in call order.
///
/// Returns the advanced sink and the generator, whose captured state
/// reflects every call made. A `count` of zero touches neither. A panic
/// inside the generator propagates unmodified; values already written stay
/// written.
pub fn generate_n<T, D, G>(mut dest: D, count: usize, mut generator: G) -> (D, G)
where
    D: Sink<T>,
    G: FnMut() -> T,
{
    for _ in 0..count {
        dest.put(generator());
    }
    (dest, generator)
}
