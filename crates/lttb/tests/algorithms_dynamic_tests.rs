#![cfg(feature = "dev")]
//! Tests for dynamic bucket refinement.
//!
//! ## Test Organization
//!
//! 1. **Budget** - round budget arithmetic
//! 2. **Candidate Search** - split and merge candidate selection
//! 3. **Refinement** - stop reasons, coverage, bounds

use lttb::internals::algorithms::bucketing::split_into_buckets;
use lttb::internals::algorithms::dynamic::{
    find_highest_sse_bucket, find_lowest_sse_pair, iteration_budget, refine, StopReason,
};
use lttb::internals::primitives::bucket::{Bucket, BucketLayout};
use lttb::internals::primitives::point::Point;

// ============================================================================
// Helper Functions
// ============================================================================

fn layout(ranges: &[(usize, usize)]) -> BucketLayout {
    BucketLayout::from_buckets(ranges.iter().map(|&(s, e)| Bucket::new(s, e)).collect())
}

fn sine(n: u64) -> Vec<Point<f64>> {
    (0..n)
        .map(|t| Point::new(t, (t as f64 / 25.0).sin()))
        .collect()
}

fn assert_partition(layout: &BucketLayout, n: usize) {
    let slice = layout.as_slice();
    assert_eq!(slice[0], Bucket::new(0, 1));
    assert_eq!(slice[slice.len() - 1], Bucket::new(n - 1, n));
    assert!(slice.iter().all(|b| !b.is_empty()));
    assert!(slice.windows(2).all(|w| w[0].end == w[1].start));
    assert_eq!(layout.point_count(), n);
}

// ============================================================================
// Budget Tests
// ============================================================================

/// Budget is `n * 10 / buckets`, truncated.
#[test]
fn test_iteration_budget() {
    assert_eq!(iteration_budget(1_000, 100), 100);
    assert_eq!(iteration_budget(10, 3), 33);
    assert_eq!(iteration_budget(7, 7), 10);
    assert_eq!(iteration_budget(5, 0), 0);
}

// ============================================================================
// Candidate Search Tests
// ============================================================================

/// Single-point buckets are never split, whatever their score.
#[test]
fn test_highest_sse_skips_single_point() {
    let l = layout(&[(0, 1), (1, 3), (3, 4), (4, 6), (6, 7)]);
    let sse = [1.0, 5.0, 3.0, 0.0];

    assert_eq!(find_highest_sse_bucket(&l, &sse), Some(3));
}

/// Ties keep the first bucket.
#[test]
fn test_highest_sse_tie() {
    let l = layout(&[(0, 1), (1, 3), (3, 5), (5, 6)]);
    let sse = [2.0, 2.0, 0.0];

    assert_eq!(find_highest_sse_bucket(&l, &sse), Some(1));
}

/// Zero scores give no split candidate.
#[test]
fn test_highest_sse_none() {
    let l = layout(&[(0, 1), (1, 3), (3, 5), (5, 6)]);
    let sse = [0.0, 0.0, 0.0];

    assert_eq!(find_highest_sse_bucket(&l, &sse), None);
}

/// The lowest adjacent interior pair is chosen.
#[test]
fn test_lowest_pair() {
    let sse = [1.0, 5.0, 3.0, 0.5, 0.0];

    assert_eq!(find_lowest_sse_pair(&sse, 0), Some(3));
}

/// Pairs touching the split candidate are skipped.
#[test]
fn test_lowest_pair_ignores_split_candidate() {
    let sse = [1.0, 5.0, 3.0, 0.5, 0.0];

    assert_eq!(find_lowest_sse_pair(&sse, 4), Some(1));
    assert_eq!(find_lowest_sse_pair(&sse, 3), Some(1));
    assert_eq!(find_lowest_sse_pair(&sse, 2), Some(3));
}

/// A single interior bucket has no pair.
#[test]
fn test_lowest_pair_none() {
    assert_eq!(find_lowest_sse_pair(&[4.0, 0.0], 0), None);
    assert_eq!(find_lowest_sse_pair(&[1.0, 2.0, 0.0], 1), None);
}

// ============================================================================
// Refinement Tests
// ============================================================================

/// Three buckets leave nothing to merge.
#[test]
fn test_refine_three_buckets() {
    let data: Vec<Point<f64>> = [(0, 0.0), (1, 5.0), (2, 1.0), (3, 9.0), (4, 2.0), (5, 8.0), (6, 0.0)]
        .into_iter()
        .map(|(t, v)| Point::new(t, v))
        .collect();
    let mut l = split_into_buckets(data.len(), 3).unwrap();
    let before = l.clone();

    let refinement = refine(&data, &mut l).unwrap();

    assert_eq!(refinement.rounds, 0);
    assert_eq!(refinement.stop_reason, StopReason::NoMergeCandidate);
    assert_eq!(l, before);
}

/// Flat data has nothing to split.
#[test]
fn test_refine_flat() {
    let data: Vec<Point<f64>> = (0..40u64).map(|t| Point::new(t, 3.0)).collect();
    let mut l = split_into_buckets(data.len(), 8).unwrap();
    let before = l.clone();

    let refinement = refine(&data, &mut l).unwrap();

    assert_eq!(refinement.rounds, 0);
    assert_eq!(refinement.budget, 50);
    assert_eq!(refinement.stop_reason, StopReason::NoSplitCandidate);
    assert_eq!(l, before);
}

/// Refinement never exceeds its budget and keeps the partition intact.
#[test]
fn test_refine_bounded() {
    let data = sine(1_000);
    let mut l = split_into_buckets(data.len(), 100).unwrap();

    let refinement = refine(&data, &mut l).unwrap();

    assert_eq!(refinement.budget, 100);
    assert!(refinement.rounds <= 100);
    assert_eq!(l.len(), 100);
    assert_partition(&l, data.len());
}

/// Refinement moves boundaries on uneven data.
#[test]
fn test_refine_moves_boundaries() {
    // Flat, then a burst of oscillation, then flat again.
    let data: Vec<Point<f64>> = (0..200u64)
        .map(|t| {
            let v = if (80..120).contains(&t) {
                if t % 2 == 0 { 10.0 } else { -10.0 }
            } else {
                0.0
            };
            Point::new(t, v)
        })
        .collect();
    let mut l = split_into_buckets(data.len(), 20).unwrap();
    let before = l.clone();

    let refinement = refine(&data, &mut l).unwrap();

    assert!(refinement.rounds > 0);
    assert_ne!(l, before);
    assert_eq!(l.len(), 20);
    assert_partition(&l, data.len());
}
