//! Default projection and ordering relation.
//!
//! These are plain generic functions, so they pass as values wherever a
//! projection or relation parameter is expected and cost nothing to carry.

// ============================================================================
// Default Suppliers
// ============================================================================

/// Identity projection: hands each element through unchanged.
#[inline]
pub fn ident<T>(value: T) -> T {
    value
}

/// Default strict ordering relation.
#[inline]
pub fn less<K: PartialOrd>(a: &K, b: &K) -> bool {
    a < b
}
