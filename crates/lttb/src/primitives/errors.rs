//! Error types for downsampling operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while
//! downsampling a series, covering input validation, threshold and bucket
//! count constraints, and internal states the bucketing invariants rule out.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (threshold, length, index).
//! * **Classified**: Every variant maps onto an [`ErrorKind`] so callers can
//!   tell contract violations apart from broken internal invariants.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`DownsampleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied input or parameters outside the supported contract.
    InvalidArgument,

    /// An internal invariant was violated (e.g. an empty bucket reached selection).
    Unreachable,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for downsampling operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DownsampleError {
    /// Input series is empty but a reduction was requested.
    EmptyInput,

    /// Threshold cannot produce an output that keeps both endpoints.
    InvalidThreshold {
        /// Requested number of output points.
        threshold: usize,
        /// Number of input points.
        len: usize,
    },

    /// Bucket count is incompatible with the number of points.
    InvalidBucketCount {
        /// Requested number of buckets.
        buckets: usize,
        /// Number of input points.
        len: usize,
    },

    /// Timestamp and value columns must have the same number of elements.
    MismatchedInputs {
        /// Number of timestamps.
        timestamps_len: usize,
        /// Number of values.
        values_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Timestamps decrease at the given index.
    UnorderedTimestamps {
        /// Index of the first point whose timestamp is below its predecessor's.
        index: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A bucket with no points reached a step that needs at least one.
    EmptyBucket {
        /// Index of the bucket within its layout.
        index: usize,
    },
}

impl DownsampleError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyBucket { .. } => ErrorKind::Unreachable,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DownsampleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidThreshold { threshold, len } => {
                write!(
                    f,
                    "Invalid threshold: {threshold} for {len} points (must be 0, at least 2, or >= the input length)"
                )
            }
            Self::InvalidBucketCount { buckets, len } => {
                write!(
                    f,
                    "Invalid bucket count: {buckets} for {len} points (must be between 3 and the input length, or 2 for exactly 2 points)"
                )
            }
            Self::MismatchedInputs {
                timestamps_len,
                values_len,
            } => {
                write!(
                    f,
                    "Length mismatch: {timestamps_len} timestamps, {values_len} values"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnorderedTimestamps { index } => {
                write!(
                    f,
                    "Timestamps must be non-decreasing: point {index} is earlier than point {}",
                    index.saturating_sub(1)
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' must be set before building")
            }
            Self::EmptyBucket { index } => {
                write!(f, "Bucket {index} is empty (bucket layout invariant violated)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DownsampleError {}
