#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the checks run before any bucket is built:
//! - Series validation (emptiness, numeric validity, timestamp order)
//! - Column validation (matching lengths)
//! - Parameter validation (threshold, duplicate builder parameters)
//!
//! ## Test Organization
//!
//! 1. **Series Validation** - emptiness, values, ordering
//! 2. **Column Validation** - length checks
//! 3. **Parameter Validation** - threshold and duplicates

use lttb::internals::engine::validator::Validator;
use lttb::internals::primitives::errors::DownsampleError;
use lttb::internals::primitives::point::Point;

// ============================================================================
// Helper Functions
// ============================================================================

fn series(pairs: &[(u64, f64)]) -> Vec<Point<f64>> {
    pairs.iter().map(|&(t, v)| Point::new(t, v)).collect()
}

// ============================================================================
// Series Validation Tests
// ============================================================================

/// Test validation accepts a well-formed series.
#[test]
fn test_validate_series_ok() {
    let points = series(&[(0, 1.0), (5, -2.0), (9, 0.5)]);
    assert!(Validator::validate_series(&points).is_ok());
}

/// Test validation rejects an empty series.
#[test]
fn test_validate_series_empty() {
    let points: Vec<Point<f64>> = Vec::new();
    assert_eq!(
        Validator::validate_series(&points),
        Err(DownsampleError::EmptyInput)
    );
}

/// Test validation rejects NaN and infinite values, naming the first offender.
#[test]
fn test_validate_series_non_finite() {
    let points = series(&[(0, 1.0), (1, f64::NAN), (2, f64::INFINITY)]);
    match Validator::validate_series(&points) {
        Err(DownsampleError::InvalidNumericValue(msg)) => {
            assert!(msg.contains("value[1]"), "unexpected message: {msg}");
        }
        other => panic!("expected InvalidNumericValue, got {other:?}"),
    }

    let points = series(&[(0, 1.0), (1, 2.0), (2, f64::NEG_INFINITY)]);
    assert!(matches!(
        Validator::validate_series(&points),
        Err(DownsampleError::InvalidNumericValue(_))
    ));
}

/// Test validation rejects decreasing timestamps at the offending index.
#[test]
fn test_validate_series_unordered() {
    let points = series(&[(0, 1.0), (4, 1.0), (3, 1.0), (8, 1.0)]);
    assert_eq!(
        Validator::validate_series(&points),
        Err(DownsampleError::UnorderedTimestamps { index: 2 })
    );
}

/// Test validation accepts repeated timestamps.
#[test]
fn test_validate_series_repeated_timestamps() {
    let points = series(&[(0, 1.0), (2, 1.0), (2, 3.0), (3, 1.0)]);
    assert!(Validator::validate_series(&points).is_ok());
}

// ============================================================================
// Column Validation Tests
// ============================================================================

/// Test validation rejects columns of different lengths.
#[test]
fn test_validate_columns_mismatch() {
    let timestamps = [0u64, 1, 2];
    let values = [1.0f64, 2.0];
    assert_eq!(
        Validator::validate_columns(&timestamps, &values),
        Err(DownsampleError::MismatchedInputs {
            timestamps_len: 3,
            values_len: 2
        })
    );
    assert!(Validator::validate_columns(&timestamps, &[1.0f64, 2.0, 3.0]).is_ok());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test validation rejects thresholds that cannot hold both endpoints.
#[test]
fn test_validate_threshold() {
    assert_eq!(
        Validator::validate_threshold(1, 10),
        Err(DownsampleError::InvalidThreshold {
            threshold: 1,
            len: 10
        })
    );
    assert!(Validator::validate_threshold(2, 10).is_ok());
    assert!(Validator::validate_threshold(9, 10).is_ok());
}

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("threshold")),
        Err(DownsampleError::DuplicateParameter {
            parameter: "threshold"
        })
    );
}
