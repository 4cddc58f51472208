//! Execution engine for downsampling runs.
//!
//! ## Purpose
//!
//! This module orchestrates a single downsampling run: it applies the
//! identity and two-point shortcuts, validates the series, builds and (for
//! LTD) refines the bucket layout, and runs the largest-triangle selection.
//!
//! ## Design notes
//!
//! * Identity path: `threshold == 0` or `threshold >= n` returns the input
//!   verbatim without inspecting it.
//! * `threshold == 2` keeps only the endpoints.
//! * Every other threshold goes through validation, then the selected method.
//!
//! ## Invariants
//!
//! * Selected indices are strictly increasing and start/end at `0`/`n - 1`.
//! * The input slice is only ever borrowed immutably.
//!
//! ## Non-goals
//!
//! * This module does not format results (see `output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::bucketing::split_into_buckets;
use crate::algorithms::dynamic::{Refinement, refine};
use crate::algorithms::selection::{select_fixed, select_for_buckets};
use crate::engine::validator::Validator;
use crate::primitives::errors::DownsampleError;
use crate::primitives::point::Point;

// ============================================================================
// Method
// ============================================================================

/// Downsampling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Largest-Triangle-Three-Buckets: fixed-width buckets.
    #[default]
    Lttb,

    /// Largest-Triangle-Dynamic: SSE-refined buckets, then LTTB selection.
    Ltd,
}

impl Method {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lttb => "LTTB",
            Self::Ltd => "LTD",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Configuration and Output
// ============================================================================

/// Configuration for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownsampleConfig {
    /// Requested number of output points.
    pub threshold: usize,

    /// Algorithm to run.
    pub method: Method,
}

/// Output from a run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput {
    /// Indices of the selected points in the input.
    pub indices: Vec<usize>,

    /// Refinement summary (LTD runs that reached the refinement loop).
    pub refinement: Option<Refinement>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified downsampling executor.
pub struct DownsampleExecutor;

impl DownsampleExecutor {
    /// Run `config` over `points` and return the selected indices.
    pub fn run<T: Float>(
        points: &[Point<T>],
        config: &DownsampleConfig,
    ) -> Result<ExecutorOutput, DownsampleError> {
        let n = points.len();
        let threshold = config.threshold;

        if threshold == 0 || (threshold >= n && n > 0) {
            debug!(n, threshold, "threshold does not reduce the series; returning input");
            return Ok(ExecutorOutput {
                indices: (0..n).collect(),
                refinement: None,
            });
        }

        Validator::validate_series(points)?;
        Validator::validate_threshold(threshold, n)?;

        debug!(n, threshold, method = config.method.name(), "downsampling series");

        if threshold == 2 {
            return Ok(ExecutorOutput {
                indices: Vec::from([0, n - 1]),
                refinement: None,
            });
        }

        let output = match config.method {
            Method::Lttb => ExecutorOutput {
                indices: select_fixed(points, threshold)?,
                refinement: None,
            },
            Method::Ltd => {
                let mut layout = split_into_buckets(n, threshold)?;
                let refinement = refine(points, &mut layout)?;
                debug!(
                    rounds = refinement.rounds,
                    budget = refinement.budget,
                    stop_reason = ?refinement.stop_reason,
                    "bucket refinement finished"
                );
                ExecutorOutput {
                    indices: select_for_buckets(points, &layout)?,
                    refinement: Some(refinement),
                }
            }
        };

        Ok(output)
    }

    /// Run `config` and collect the selected points.
    pub fn run_points<T: Float>(
        points: &[Point<T>],
        config: &DownsampleConfig,
    ) -> Result<Vec<Point<T>>, DownsampleError> {
        let output = Self::run(points, config)?;
        Ok(output.indices.iter().map(|&i| points[i]).collect())
    }
}
