//! Layer 3: Algorithms
//!
//! This layer implements bucketing, largest-triangle selection, regression
//! scoring and dynamic bucket refinement. It contains the downsampling logic
//! but is orchestrated by the engine layer.

// Fixed-width partitioning into buckets.
pub mod bucketing;

// Largest-triangle point selection (LTTB).
pub mod selection;

// Least-squares SSE scoring of buckets.
pub mod regression;

// SSE-driven split/merge refinement (LTD).
pub mod dynamic;
