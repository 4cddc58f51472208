//! Index-range buckets over a borrowed series.
//!
//! ## Purpose
//!
//! A bucket is a half-open range `[start, end)` of indices into the caller's
//! slice. A [`BucketLayout`] is an ordered list of such ranges partitioning
//! the whole series. Splitting and merging only rewrite ranges, the points
//! themselves are never copied or moved.
//!
//! ## Invariants
//!
//! * Buckets produced by the bucketing step are non-empty and contiguous.
//! * `split_at` and `merge_at` preserve coverage: the union of ranges is unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::point::Point;

// Half-open index range `[start, end)` of one bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    // First index (inclusive).
    pub start: usize,

    // One past the last index (exclusive).
    pub end: usize,
}

impl Bucket {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Bucket::new: start must not exceed end");
        Self { start, end }
    }

    // Number of points in the bucket.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    // Borrow the bucket's points from the backing series.
    #[inline]
    pub fn points<'a, T>(&self, data: &'a [Point<T>]) -> &'a [Point<T>] {
        &data[self.start..self.end]
    }
}

/// Ordered partition of a series into contiguous buckets.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BucketLayout {
    buckets: Vec<Bucket>,
}

impl BucketLayout {
    /// Build a layout from ranges already known to be contiguous.
    pub fn from_buckets(buckets: Vec<Bucket>) -> Self {
        debug_assert!(
            buckets.windows(2).all(|w| w[0].end == w[1].start),
            "BucketLayout::from_buckets: buckets must be contiguous"
        );
        Self { buckets }
    }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the layout has no buckets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// All buckets in order.
    #[inline]
    pub fn as_slice(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Total number of points covered.
    pub fn point_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Split the bucket at `index` into two halves.
    ///
    /// An odd-sized bucket gives its extra point to the first half. Buckets
    /// with fewer than two points, and out-of-range indices, are left as is.
    /// Returns whether a split happened.
    pub fn split_at(&mut self, index: usize) -> bool {
        let Some(&bucket) = self.buckets.get(index) else {
            return false;
        };
        if bucket.len() < 2 {
            return false;
        }

        let mid = bucket.start + bucket.len().div_ceil(2);
        self.buckets[index] = Bucket::new(bucket.start, mid);
        self.buckets.insert(index + 1, Bucket::new(mid, bucket.end));
        true
    }

    /// Merge the bucket at `index` with the one after it.
    ///
    /// Out-of-range indices (including the last bucket) are left as is.
    /// Returns whether a merge happened.
    pub fn merge_at(&mut self, index: usize) -> bool {
        if index + 1 >= self.buckets.len() {
            return false;
        }

        let next = self.buckets.remove(index + 1);
        self.buckets[index].end = next.end;
        true
    }
}
