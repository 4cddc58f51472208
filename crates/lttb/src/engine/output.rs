//! Output types for downsampling runs.
//!
//! ## Purpose
//!
//! This module defines [`DownsampleResult`], which bundles the downsampled
//! series with the indices it was drawn from and run metadata.
//!
//! ## Invariants
//!
//! * `points[k] == input[indices[k]]` for every `k`.
//! * `indices` is strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::dynamic::Refinement;
use crate::engine::executor::Method;
use crate::primitives::point::Point;

// ============================================================================
// Result Structure
// ============================================================================

/// Downsampled series and run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DownsampleResult<T> {
    /// Selected points, in input order.
    pub points: Vec<Point<T>>,

    /// Input index of each selected point.
    pub indices: Vec<usize>,

    /// Algorithm that produced the result.
    pub method: Method,

    /// Requested number of output points.
    pub threshold: usize,

    /// Number of input points.
    pub input_len: usize,

    /// Bucket refinement summary (LTD only).
    pub refinement: Option<Refinement>,
}

impl<T: Float> DownsampleResult<T> {
    /// Whether the input was returned unchanged.
    pub fn is_identity(&self) -> bool {
        self.points.len() == self.input_len
    }

    /// Number of refinement rounds performed, if refinement ran.
    pub fn iterations_used(&self) -> Option<usize> {
        self.refinement.map(|r| r.rounds)
    }

    /// Fraction of input points kept.
    pub fn retention(&self) -> T {
        if self.input_len == 0 {
            return T::one();
        }
        let kept = T::from(self.points.len()).unwrap_or_else(T::zero);
        let total = T::from(self.input_len).unwrap_or_else(T::one);
        kept / total
    }

    /// Consume the result, keeping only the points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for DownsampleResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Method:      {}", self.method)?;
        writeln!(f, "  Input:       {} points", self.input_len)?;
        writeln!(f, "  Threshold:   {}", self.threshold)?;
        writeln!(f, "  Output:      {} points", self.points.len())?;

        if let Some(refinement) = &self.refinement {
            writeln!(
                f,
                "  Refinement:  {} of {} rounds ({:?})",
                refinement.rounds, refinement.budget, refinement.stop_reason
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Downsampled Data:")?;
        writeln!(f, "{:>8} {:>20} {:>14}", "Index", "Timestamp", "Value")?;
        writeln!(f, "{:-<width$}", "", width = 44)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.points.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_row = 0;
        for (i, &row) in rows.iter().enumerate() {
            if i > 0 && row != prev_row + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_row = row;

            let p = &self.points[row];
            writeln!(
                f,
                "{:>8} {:>20} {:>14.6}",
                self.indices[row], p.timestamp, p.value
            )?;
        }

        Ok(())
    }
}
