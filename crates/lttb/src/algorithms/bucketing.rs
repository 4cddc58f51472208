//! Fixed-width bucketing of a series.
//!
//! ## Purpose
//!
//! This module partitions `n` points into `buckets` contiguous buckets. The
//! first and last buckets each hold a single endpoint; the `n - 2` interior
//! points are spread over the `buckets - 2` interior buckets using a
//! real-valued width.
//!
//! ## Key concepts
//!
//! * **Width**: `w = (n - 2) / (buckets - 2)`.
//! * **Boundaries**: interior bucket `i` covers data indices
//!   `[floor(i·w) + 1, floor((i+1)·w) + 1)`; the `+ 1` skips the pinned
//!   first point.
//! * **Remainder**: the last interior bucket always ends at `n - 1`, absorbing
//!   any floating-point shortfall of the final boundary.
//!
//! ## Invariants
//!
//! * Every bucket is non-empty.
//! * Buckets are contiguous and cover `0..n` exactly once.
//! * Bucket `0` is `[0, 1)`, bucket `buckets - 1` is `[n - 1, n)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;
#[cfg(not(feature = "std"))]
use num_traits::Float;

// Internal dependencies
use crate::primitives::bucket::{Bucket, BucketLayout};
use crate::primitives::errors::DownsampleError;

// ============================================================================
// Boundary Arithmetic
// ============================================================================

/// Boundary calculator for `buckets` fixed-width buckets over `n` points.
#[derive(Copy, Clone, Debug)]
pub struct BucketBoundaries {
    n: usize,
    buckets: usize,
    width: f64,
}

impl BucketBoundaries {
    /// Validate the bucket count and precompute the interior width.
    ///
    /// Requires `2 <= buckets <= n`; two buckets are only valid for exactly
    /// two points, since the endpoint buckets cannot hold interior points.
    pub fn new(n: usize, buckets: usize) -> Result<Self, DownsampleError> {
        if buckets < 2 || buckets > n || (buckets == 2 && n != 2) {
            return Err(DownsampleError::InvalidBucketCount { buckets, len: n });
        }

        let width = if buckets > 2 {
            (n - 2) as f64 / (buckets - 2) as f64
        } else {
            0.0
        };

        Ok(Self { n, buckets, width })
    }

    /// Range of bucket `index` (0 and `buckets - 1` are the endpoints).
    pub fn bucket(&self, index: usize) -> Bucket {
        debug_assert!(index < self.buckets, "bucket: index out of range");

        if index == 0 {
            return Bucket::new(0, 1);
        }
        if index + 1 >= self.buckets {
            return Bucket::new(self.n - 1, self.n);
        }

        let i = index - 1;
        let start = (i as f64 * self.width).floor() as usize + 1;
        let end = if index + 2 == self.buckets {
            self.n - 1
        } else {
            ((i + 1) as f64 * self.width).floor() as usize + 1
        };

        debug_assert!(end >= start, "bucket: end before start");
        Bucket::new(start, end)
    }
}

// ============================================================================
// Bucketing
// ============================================================================

/// Partition `n` points into `buckets` contiguous, non-empty buckets.
pub fn split_into_buckets(n: usize, buckets: usize) -> Result<BucketLayout, DownsampleError> {
    let bounds = BucketBoundaries::new(n, buckets)?;

    let mut layout = Vec::with_capacity(buckets);
    for index in 0..buckets {
        let bucket = bounds.bucket(index);
        if bucket.is_empty() {
            return Err(DownsampleError::EmptyBucket { index });
        }
        layout.push(bucket);
    }

    Ok(BucketLayout::from_buckets(layout))
}
