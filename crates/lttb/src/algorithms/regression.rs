//! Regression scoring for dynamic bucket refinement.
//!
//! ## Purpose
//!
//! This module fits a least-squares line through a bucket (widened by its
//! neighbouring boundary points) and reports the sum of squared residuals
//! (SSE). Refinement uses the SSE as a bucket's "badness": high-SSE buckets
//! get split, low-SSE neighbours get merged.
//!
//! ## Design notes
//!
//! * **Anchored fit**: The line passes through the window's average point.
//! * **Slope form**: The slope is `Σ(tᵢ - t̄)(vᵢ - v̄) / Σ(vᵢ - v̄)(tᵢ - t̄)`, with
//!   the denominator accumulated in that factor order (not `Σ(tᵢ - t̄)²`).
//! * **Zero denominator**: Falls back to a flat line through the anchor
//!   instead of producing NaN/Inf.
//! * **Centered evaluation**: Predictions are evaluated relative to the anchor
//!   timestamp so epoch-scale timestamps do not cancel out.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::geometry::{average_point, time_delta, timestamp_to_float};
use crate::primitives::bucket::BucketLayout;
use crate::primitives::errors::DownsampleError;
use crate::primitives::point::Point;

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (a)
    pub slope: T,

    /// Intercept (b), relative to timestamp zero.
    ///
    /// Informational only: [`LinearFit::predict_at`] and [`LinearFit::sse`]
    /// evaluate around `anchor` and never read it.
    pub intercept: T,

    /// Average point the line passes through
    pub anchor: Point<T>,
}

impl<T: Float> LinearFit<T> {
    /// Fit a line through the average point of `points`.
    pub fn fit_anchored(points: &[Point<T>]) -> Result<Self, DownsampleError> {
        let anchor = average_point(points)?;

        let mut numerator = T::zero();
        let mut denominator = T::zero();
        for p in points {
            let dt: T = time_delta(anchor.timestamp, p.timestamp);
            let dv = p.value - anchor.value;
            numerator = numerator + dt * dv;
            denominator = denominator + dv * dt;
        }

        let slope = if denominator == T::zero() {
            T::zero()
        } else {
            numerator / denominator
        };
        let intercept = anchor.value - slope * timestamp_to_float::<T>(anchor.timestamp);

        Ok(Self {
            slope,
            intercept,
            anchor,
        })
    }

    /// Predict the value at `timestamp`, evaluated relative to the anchor.
    #[inline]
    pub fn predict_at(&self, timestamp: u64) -> T {
        let dt: T = time_delta(self.anchor.timestamp, timestamp);
        self.anchor.value + self.slope * dt
    }

    /// Sum of squared residuals of `points` against this line.
    pub fn sse(&self, points: &[Point<T>]) -> T {
        points.iter().fold(T::zero(), |acc, p| {
            let residual = p.value - self.predict_at(p.timestamp);
            acc + residual * residual
        })
    }
}

// ============================================================================
// SSE Scoring
// ============================================================================

/// SSE of the anchored line fitted through `points`.
pub fn sse_for_bucket<T: Float>(points: &[Point<T>]) -> Result<T, DownsampleError> {
    let fit = LinearFit::fit_anchored(points)?;
    Ok(fit.sse(points))
}

/// Score every interior bucket of `layout`.
///
/// Each interior bucket is scored over the window
/// `[last of previous] + [bucket without its own last point] + [first of next]`.
/// Entry `i - 1` holds bucket `i`'s score; a trailing zero stands in for the
/// last bucket, so the result has `layout.len() - 1` entries.
pub fn sse_for_buckets<T: Float>(
    data: &[Point<T>],
    layout: &BucketLayout,
) -> Result<Vec<T>, DownsampleError> {
    let buckets = layout.as_slice();
    let count = buckets.len();
    if count < 2 {
        return Err(DownsampleError::InvalidBucketCount {
            buckets: count,
            len: data.len(),
        });
    }

    let mut sse = Vec::with_capacity(count - 1);
    let mut window: Vec<Point<T>> = Vec::new();

    for index in 1..count - 1 {
        let previous = buckets[index - 1];
        let current = buckets[index];
        let next = buckets[index + 1];
        if previous.is_empty() {
            return Err(DownsampleError::EmptyBucket { index: index - 1 });
        }
        if current.is_empty() {
            return Err(DownsampleError::EmptyBucket { index });
        }
        if next.is_empty() {
            return Err(DownsampleError::EmptyBucket { index: index + 1 });
        }

        window.clear();
        window.push(data[previous.end - 1]);
        window.extend_from_slice(&data[current.start..current.end - 1]);
        window.push(data[next.start]);

        sse.push(sse_for_bucket(&window)?);
    }

    sse.push(T::zero());
    Ok(sse)
}
