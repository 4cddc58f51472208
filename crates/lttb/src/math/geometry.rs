//! Planar geometry over time-series points.
//!
//! ## Purpose
//!
//! Points are treated as 2-D coordinates `(timestamp, value)`. This module
//! provides the triangle-area score used to rank candidate points and the
//! average point used as the look-ahead anchor and regression anchor.
//!
//! ## Design notes
//!
//! * **Exact deltas**: Timestamp differences are taken on `u64` before
//!   conversion, so large epoch timestamps keep their relative precision and
//!   earlier-minus-later never wraps around.
//! * **Integer mean**: The average timestamp is the truncated integer mean,
//!   accumulated in `u128` so long series of large timestamps cannot overflow.
//!
//! ## Non-goals
//!
//! * Area is a ranking score only; no units or orientation are exposed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DownsampleError;
use crate::primitives::point::Point;

// ============================================================================
// Timestamp Conversion
// ============================================================================

/// Signed difference `to - from` as a float.
#[inline]
pub fn time_delta<T: Float>(from: u64, to: u64) -> T {
    if to >= from {
        T::from(to - from).unwrap_or_else(T::infinity)
    } else {
        -T::from(from - to).unwrap_or_else(T::infinity)
    }
}

/// Timestamp as a float.
#[inline]
pub fn timestamp_to_float<T: Float>(timestamp: u64) -> T {
    T::from(timestamp).unwrap_or_else(T::infinity)
}

// ============================================================================
// Triangle Area
// ============================================================================

/// Absolute area of the triangle `(a, b, c)`.
///
/// ```text
/// area = 0.5 × |(a.t - c.t)(b.v - a.v) - (a.t - b.t)(c.v - a.v)|
/// ```
#[inline]
pub fn triangle_area<T: Float>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
    let ac: T = time_delta(c.timestamp, a.timestamp);
    let ab: T = time_delta(b.timestamp, a.timestamp);
    let half = T::from(0.5).unwrap_or_else(T::one);

    ((ac * (b.value - a.value) - ab * (c.value - a.value)) * half).abs()
}

// ============================================================================
// Average Point
// ============================================================================

/// Arithmetic mean of a non-empty run of points.
///
/// Returns [`DownsampleError::EmptyInput`] for an empty slice.
pub fn average_point<T: Float>(points: &[Point<T>]) -> Result<Point<T>, DownsampleError> {
    if points.is_empty() {
        return Err(DownsampleError::EmptyInput);
    }

    let mut timestamp_sum: u128 = 0;
    let mut value_sum = T::zero();
    for p in points {
        timestamp_sum += u128::from(p.timestamp);
        value_sum = value_sum + p.value;
    }

    let n = points.len();
    // The mean of u64 values always fits back into u64.
    let timestamp = (timestamp_sum / n as u128) as u64;
    let value = value_sum / T::from(n).unwrap_or_else(T::one);

    Ok(Point::new(timestamp, value))
}
