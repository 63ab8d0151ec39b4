//! Layer 3: Algorithms
//!
//! This layer implements the core sequence algorithms: extremum location,
//! partition-point searches on sorted input, and in-order value generation.
//! Every operation accepts anything that decomposes into a cursor/sentinel
//! pair and requires only the weakest capability tier it can work with.

// Extremum location.
pub mod extrema;

// Partition-point searches.
pub mod partition;

// In-order value generation.
pub mod generate;
