//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure geometric functions the selection and
//! scoring algorithms are built from: triangle areas, average points and
//! timestamp arithmetic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Triangle area, average point and timestamp deltas.
pub mod geometry;
