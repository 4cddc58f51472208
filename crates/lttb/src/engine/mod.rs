//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a downsampling run by coordinating validation,
//! bucketing, refinement and selection, and packages the outcome.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for downsampling runs.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for downsampling runs.
pub mod output;
