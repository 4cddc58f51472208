//! Dynamic bucket refinement (Largest-Triangle-Dynamic).
//!
//! ## Purpose
//!
//! Starting from the fixed-width layout, this module repeatedly moves bucket
//! boundaries toward regions the regression scorer marks as poorly
//! approximated: the worst bucket is split in two and the best adjacent pair
//! is merged, so the bucket count never changes.
//!
//! ## Key concepts
//!
//! * **Budget**: at most `n * 10 / buckets` rounds.
//! * **Split candidate**: interior bucket with more than one point and the
//!   highest SSE above zero; the first one wins ties.
//! * **Merge candidate**: adjacent interior pair with the lowest summed SSE,
//!   never touching the split candidate.
//!
//! ## Invariants
//!
//! * The layout keeps its bucket count and its coverage of `0..n`.
//! * The endpoint buckets are never split or merged.

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::algorithms::regression::sse_for_buckets;
use crate::primitives::bucket::BucketLayout;
use crate::primitives::errors::DownsampleError;
use crate::primitives::point::Point;

// ============================================================================
// Refinement Outcome
// ============================================================================

/// Why a refinement run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The round budget was used up.
    Budget,

    /// No interior bucket with more than one point had a positive SSE.
    NoSplitCandidate,

    /// No adjacent interior pair was left once the split candidate was excluded.
    NoMergeCandidate,
}

/// Summary of a refinement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refinement {
    /// Rounds that split and merged buckets.
    pub rounds: usize,

    /// Round budget for this input.
    pub budget: usize,

    /// Why the run ended.
    pub stop_reason: StopReason,
}

// ============================================================================
// Candidate Search
// ============================================================================

/// Round budget for `n` points in `buckets` buckets.
#[inline]
pub fn iteration_budget(n: usize, buckets: usize) -> usize {
    if buckets == 0 {
        return 0;
    }
    n.saturating_mul(10) / buckets
}

/// Interior bucket to split, if any.
///
/// `sse` is laid out as returned by `sse_for_buckets`: entry `i - 1` scores bucket `i`.
pub fn find_highest_sse_bucket<T: Float>(layout: &BucketLayout, sse: &[T]) -> Option<usize> {
    let buckets = layout.as_slice();
    let mut max_sse = T::zero();
    let mut max_index = None;

    for index in 1..buckets.len().saturating_sub(1) {
        let score = sse[index - 1];
        if buckets[index].len() > 1 && score > max_sse {
            max_sse = score;
            max_index = Some(index);
        }
    }

    max_index
}

/// First bucket of the adjacent interior pair to merge, if any.
///
/// Pairs containing `ignore` are skipped.
pub fn find_lowest_sse_pair<T: Float>(sse: &[T], ignore: usize) -> Option<usize> {
    // `sse` holds one entry per bucket except the first, so buckets `i` and
    // `i + 1` are both interior while `i + 1 < sse.len()`.
    let mut min_sse = T::max_value();
    let mut min_index = None;

    for index in 1..sse.len().saturating_sub(1) {
        if index == ignore || index + 1 == ignore {
            continue;
        }

        let combined = sse[index - 1] + sse[index];
        if combined < min_sse {
            min_sse = combined;
            min_index = Some(index);
        }
    }

    min_index
}

// ============================================================================
// Refinement Loop
// ============================================================================

/// Reshape `layout` in place by SSE-driven split/merge rounds.
pub fn refine<T: Float>(
    data: &[Point<T>],
    layout: &mut BucketLayout,
) -> Result<Refinement, DownsampleError> {
    let budget = iteration_budget(data.len(), layout.len());

    for round in 0..budget {
        let sse = sse_for_buckets(data, layout)?;

        let Some(high) = find_highest_sse_bucket(layout, &sse) else {
            return Ok(Refinement {
                rounds: round,
                budget,
                stop_reason: StopReason::NoSplitCandidate,
            });
        };

        let Some(mut low) = find_lowest_sse_pair(&sse, high) else {
            return Ok(Refinement {
                rounds: round,
                budget,
                stop_reason: StopReason::NoMergeCandidate,
            });
        };

        layout.split_at(high);
        if low > high {
            low += 1;
        }
        layout.merge_at(low);
        debug_assert_eq!(layout.point_count(), data.len(), "refine: coverage lost");

        trace!(round, split = high, merge = low, "refined bucket layout");
    }

    Ok(Refinement {
        rounds: budget,
        budget,
        stop_reason: StopReason::Budget,
    })
}
