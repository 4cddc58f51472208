//! Time-series point type.
//!
//! A point pairs an integer timestamp with a floating-point value. Points are
//! plain `Copy` values: the algorithms select points from the caller's slice
//! or synthesize transient ones (bucket averages), never mutate them.

// External dependencies
use num_traits::Float;

/// A single sample of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    /// Sample time, non-decreasing across a series.
    pub timestamp: u64,

    /// Sample value.
    pub value: T,
}

impl<T: Float> Point<T> {
    /// Create a point from a timestamp and a value.
    #[inline]
    pub fn new(timestamp: u64, value: T) -> Self {
        Self { timestamp, value }
    }
}

impl<T: Float> From<(u64, T)> for Point<T> {
    #[inline]
    fn from((timestamp, value): (u64, T)) -> Self {
        Self::new(timestamp, value)
    }
}
