//! Largest-triangle point selection.
//!
//! ## Purpose
//!
//! This module picks one representative point per bucket. Buckets are
//! visited left to right; within each interior bucket the point forming the
//! largest triangle with the previously selected point and the average of
//! the next bucket wins.
//!
//! ## Design notes
//!
//! * **Two entry points, one rule**: [`select_fixed`] derives fixed-width
//!   buckets on the fly, [`select_for_buckets`] walks an explicit layout
//!   (as produced by dynamic refinement). Both feed the same selection loop.
//! * **Indices out**: Selection returns indices into the input slice; the
//!   engine maps them to points.
//! * **Ties**: Only a strictly greater area replaces the current best, so
//!   the earliest point wins a tie.
//!
//! ## Invariants
//!
//! * Index 0 and index `n - 1` are always selected, first and last.
//! * Selected indices are strictly increasing.
//! * Each input point is scored at most once: O(n).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bucketing::BucketBoundaries;
use crate::math::geometry::{average_point, triangle_area};
use crate::primitives::bucket::{Bucket, BucketLayout};
use crate::primitives::errors::DownsampleError;
use crate::primitives::point::Point;

// ============================================================================
// Candidate Scoring
// ============================================================================

/// Position of the candidate with the largest triangle area against
/// `previous` and `anchor`, or `None` for an empty candidate list.
#[inline]
pub fn largest_triangle<T: Float>(
    candidates: &[Point<T>],
    previous: &Point<T>,
    anchor: &Point<T>,
) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;

    for (j, candidate) in candidates.iter().enumerate() {
        let area = triangle_area(previous, candidate, anchor);
        let replace = match best {
            Some((_, max_area)) => area > max_area,
            None => true,
        };
        if replace {
            best = Some((j, area));
        }
    }

    best.map(|(j, _)| j)
}

// ============================================================================
// Selection
// ============================================================================

/// Select `threshold` points using fixed-width buckets.
pub fn select_fixed<T: Float>(
    data: &[Point<T>],
    threshold: usize,
) -> Result<Vec<usize>, DownsampleError> {
    let bounds = BucketBoundaries::new(data.len(), threshold)?;
    select_with(data, threshold, |index| bounds.bucket(index))
}

/// Select one point from every bucket of `layout`.
pub fn select_for_buckets<T: Float>(
    data: &[Point<T>],
    layout: &BucketLayout,
) -> Result<Vec<usize>, DownsampleError> {
    let buckets = layout.as_slice();
    if buckets.len() < 2 {
        return Err(DownsampleError::InvalidBucketCount {
            buckets: buckets.len(),
            len: data.len(),
        });
    }
    select_with(data, buckets.len(), |index| buckets[index])
}

// Shared left-to-right selection over `count` buckets.
fn select_with<T, F>(
    data: &[Point<T>],
    count: usize,
    bucket_at: F,
) -> Result<Vec<usize>, DownsampleError>
where
    T: Float,
    F: Fn(usize) -> Bucket,
{
    let first = bucket_at(0);
    let last = bucket_at(count - 1);
    if first.is_empty() || first.end > data.len() {
        return Err(DownsampleError::EmptyBucket { index: 0 });
    }
    if last.is_empty() || last.end > data.len() {
        return Err(DownsampleError::EmptyBucket { index: count - 1 });
    }

    let mut selected = Vec::with_capacity(count);
    let mut previous = first.start;
    selected.push(previous);

    for index in 1..count - 1 {
        let current = bucket_at(index);
        let next = bucket_at(index + 1);

        let anchor = average_point(next.points(data))
            .map_err(|_| DownsampleError::EmptyBucket { index: index + 1 })?;

        let offset = largest_triangle(current.points(data), &data[previous], &anchor)
            .ok_or(DownsampleError::EmptyBucket { index })?;

        previous = current.start + offset;
        selected.push(previous);
    }

    selected.push(last.start);
    Ok(selected)
}
