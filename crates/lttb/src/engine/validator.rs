//! Input validation for downsampling configuration and data.
//!
//! ## Purpose
//!
//! This module checks the requirements the algorithms rely on but do not
//! re-check themselves: finite values, non-decreasing timestamps, matching
//! column lengths and a threshold that can keep both endpoints.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not sort, deduplicate, or filter input data.
//! * This module does not perform the downsampling itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DownsampleError;
use crate::primitives::point::Point;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for downsampling configuration and input data.
///
/// All methods return `Result<(), DownsampleError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a series that is about to be reduced.
    pub fn validate_series<T: Float>(points: &[Point<T>]) -> Result<(), DownsampleError> {
        // Check 1: Non-empty series
        if points.is_empty() {
            return Err(DownsampleError::EmptyInput);
        }

        // Check 2: Finite values and non-decreasing timestamps
        let mut previous = points[0].timestamp;
        for (i, p) in points.iter().enumerate() {
            if !p.value.is_finite() {
                return Err(DownsampleError::InvalidNumericValue(format!(
                    "value[{}]={}",
                    i,
                    p.value.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if p.timestamp < previous {
                return Err(DownsampleError::UnorderedTimestamps { index: i });
            }
            previous = p.timestamp;
        }

        Ok(())
    }

    /// Validate split timestamp/value columns.
    pub fn validate_columns<T: Float>(
        timestamps: &[u64],
        values: &[T],
    ) -> Result<(), DownsampleError> {
        if timestamps.len() != values.len() {
            return Err(DownsampleError::MismatchedInputs {
                timestamps_len: timestamps.len(),
                values_len: values.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a threshold that requests an actual reduction (`0 < threshold < len`).
    ///
    /// # Notes
    ///
    /// * A single output point cannot hold both endpoints.
    pub fn validate_threshold(threshold: usize, len: usize) -> Result<(), DownsampleError> {
        if threshold < 2 {
            return Err(DownsampleError::InvalidThreshold { threshold, len });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DownsampleError> {
        if let Some(param) = duplicate_param {
            return Err(DownsampleError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
