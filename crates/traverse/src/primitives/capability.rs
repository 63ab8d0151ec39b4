//! Traversal capability tiers.
//!
//! Every cursor type declares the strongest tier it supports. Adaptors that
//! wrap another cursor compute their own tier from the wrapped one, so a
//! pipeline's tier is the weakest link in its chain.

// ============================================================================
// Capability Tier
// ============================================================================

/// Traversal tier of a cursor type.
///
/// Tiers are ordered from weakest to strongest; `Ord` follows that order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capability {
    /// One forward pass only; positions cannot be revisited.
    SinglePass,

    /// Multi-pass forward traversal; cursors can be saved, cloned, and
    /// compared for position.
    Forward,

    /// Forward traversal plus stepping backward.
    Bidirectional,

    /// Constant-time jumps by arbitrary offsets and constant-time
    /// cursor-to-cursor distance.
    RandomAccess,
}

impl Capability {
    /// The weaker of two tiers.
    #[inline]
    pub const fn floor(self, other: Capability) -> Capability {
        if (self as u8) < (other as u8) {
            self
        } else {
            other
        }
    }

    /// Short human-readable tier name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Capability::SinglePass => "single-pass",
            Capability::Forward => "forward",
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
        }
    }
}
