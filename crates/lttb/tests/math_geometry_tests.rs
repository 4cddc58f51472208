#![cfg(feature = "dev")]
//! Tests for geometry helpers.
//!
//! ## Test Organization
//!
//! 1. **Triangle Area** - known areas, symmetry, non-negativity
//! 2. **Average Point** - means, truncation, overflow, empty input
//! 3. **Timestamp Deltas** - signed differences

use approx::assert_relative_eq;

use lttb::internals::math::geometry::{average_point, time_delta, triangle_area};
use lttb::internals::primitives::errors::DownsampleError;
use lttb::internals::primitives::point::Point;

// ============================================================================
// Triangle Area Tests
// ============================================================================

/// Area of a known triangle.
#[test]
fn test_triangle_area_known_value() {
    let a = Point::new(0, 0.0f64);
    let b = Point::new(3, 9.0);
    let c = Point::new(6, 0.0);

    assert_relative_eq!(triangle_area(&a, &b, &c), 27.0, epsilon = 1e-12);
}

/// Area does not depend on vertex order.
#[test]
fn test_triangle_area_vertex_order() {
    let a = Point::new(2, 1.5f64);
    let b = Point::new(5, -4.0);
    let c = Point::new(11, 3.25);

    let reference = triangle_area(&a, &b, &c);
    assert!(reference > 0.0);
    assert_relative_eq!(triangle_area(&a, &c, &b), reference, epsilon = 1e-12);
    assert_relative_eq!(triangle_area(&b, &a, &c), reference, epsilon = 1e-12);
    assert_relative_eq!(triangle_area(&c, &b, &a), reference, epsilon = 1e-12);
}

/// Collinear points span no area.
#[test]
fn test_triangle_area_collinear() {
    let a = Point::new(0, 0.0f64);
    let b = Point::new(1, 2.0);
    let c = Point::new(4, 8.0);

    assert_eq!(triangle_area(&a, &b, &c), 0.0);
}

/// Later-than-anchor points do not wrap around.
#[test]
fn test_triangle_area_reversed_timestamps() {
    let a = Point::new(6, 0.0f64);
    let b = Point::new(3, 9.0);
    let c = Point::new(0, 0.0);

    assert_relative_eq!(triangle_area(&a, &b, &c), 27.0, epsilon = 1e-12);
}

/// Epoch-scale timestamps keep exact deltas.
#[test]
fn test_triangle_area_large_timestamps() {
    let base = u64::MAX - 100;
    let a = Point::new(base, 0.0f64);
    let b = Point::new(base + 3, 9.0);
    let c = Point::new(base + 6, 0.0);

    assert_relative_eq!(triangle_area(&a, &b, &c), 27.0, epsilon = 1e-12);
}

// ============================================================================
// Average Point Tests
// ============================================================================

/// Mean of timestamps and values.
#[test]
fn test_average_point_mean() {
    let points = [Point::new(2, 1.0f64), Point::new(4, 2.0), Point::new(6, 6.0)];
    let avg = average_point(&points).unwrap();

    assert_eq!(avg.timestamp, 4);
    assert_relative_eq!(avg.value, 3.0, epsilon = 1e-12);
}

/// The timestamp mean is truncated to an integer.
#[test]
fn test_average_point_truncates_timestamp() {
    let points = [Point::new(1, 1.0f64), Point::new(2, 2.0)];
    let avg = average_point(&points).unwrap();

    assert_eq!(avg.timestamp, 1);
    assert_relative_eq!(avg.value, 1.5, epsilon = 1e-12);
}

/// Summing large timestamps does not overflow.
#[test]
fn test_average_point_no_overflow() {
    let points = [Point::new(u64::MAX, 1.0f64), Point::new(u64::MAX - 2, 3.0)];
    let avg = average_point(&points).unwrap();

    assert_eq!(avg.timestamp, u64::MAX - 1);
    assert_relative_eq!(avg.value, 2.0, epsilon = 1e-12);
}

/// A single point is its own average.
#[test]
fn test_average_point_single() {
    let p = Point::new(42, -7.5f32);
    assert_eq!(average_point(&[p]).unwrap(), p);
}

/// Empty input is an error, not NaN.
#[test]
fn test_average_point_empty() {
    let points: [Point<f64>; 0] = [];
    assert_eq!(average_point(&points), Err(DownsampleError::EmptyInput));
}

// ============================================================================
// Timestamp Delta Tests
// ============================================================================

/// Deltas are signed.
#[test]
fn test_time_delta_signed() {
    assert_eq!(time_delta::<f64>(3, 10), 7.0);
    assert_eq!(time_delta::<f64>(10, 3), -7.0);
    assert_eq!(time_delta::<f64>(5, 5), 0.0);
    assert_eq!(time_delta::<f64>(u64::MAX, u64::MAX - 1), -1.0);
}
