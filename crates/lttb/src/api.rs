//! High-level API for downsampling.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: two one-call
//! functions, [`downsample_fixed`] (LTTB) and [`downsample_adaptive`] (LTD),
//! and a fluent builder for callers that want run metadata or split-column
//! input.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible default method (LTTB).
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` value types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DownsampleBuilder`] via `Downsample::new()`.
//! 2. Chain configuration methods (`.threshold()`, `.method()`).
//! 3. Call `.build()` to get a [`Downsampler`], then `.run(&points)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{DownsampleConfig, DownsampleExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::dynamic::{Refinement, StopReason};
pub use crate::engine::executor::Method;
pub use crate::engine::output::DownsampleResult;
pub use crate::primitives::errors::{DownsampleError, ErrorKind};
pub use crate::primitives::point::Point;

// ============================================================================
// One-call Entry Points
// ============================================================================

/// Downsample `points` to `threshold` points with fixed-width buckets (LTTB).
///
/// `threshold == 0` or `threshold >= points.len()` returns the input unchanged.
pub fn downsample_fixed<T: Float>(
    points: &[Point<T>],
    threshold: usize,
) -> Result<Vec<Point<T>>, DownsampleError> {
    let config = DownsampleConfig {
        threshold,
        method: Method::Lttb,
    };
    DownsampleExecutor::run_points(points, &config)
}

/// Downsample `points` to `threshold` points with SSE-refined buckets (LTD).
///
/// `threshold == 0` or `threshold >= points.len()` returns the input unchanged.
pub fn downsample_adaptive<T: Float>(
    points: &[Point<T>],
    threshold: usize,
) -> Result<Vec<Point<T>>, DownsampleError> {
    let config = DownsampleConfig {
        threshold,
        method: Method::Ltd,
    };
    DownsampleExecutor::run_points(points, &config)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a downsampler.
#[derive(Debug, Clone, Default)]
pub struct DownsampleBuilder {
    /// Requested number of output points.
    pub threshold: Option<usize>,

    /// Algorithm (default: LTTB).
    pub method: Option<Method>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DownsampleBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of output points.
    pub fn threshold(mut self, threshold: usize) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set the downsampling algorithm.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Build the downsampler.
    pub fn build(self) -> Result<Downsampler, DownsampleError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let threshold = self.threshold.ok_or(DownsampleError::MissingParameter {
            parameter: "threshold",
        })?;

        Ok(Downsampler {
            config: DownsampleConfig {
                threshold,
                method: self.method.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// Downsampler
// ============================================================================

/// Configured downsampler, reusable across series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Downsampler {
    config: DownsampleConfig,
}

impl Downsampler {
    /// Requested number of output points.
    pub fn threshold(&self) -> usize {
        self.config.threshold
    }

    /// Configured algorithm.
    pub fn method(&self) -> Method {
        self.config.method
    }

    /// Downsample `points`.
    pub fn run<T: Float>(
        &self,
        points: &[Point<T>],
    ) -> Result<DownsampleResult<T>, DownsampleError> {
        let output = DownsampleExecutor::run(points, &self.config)?;

        Ok(DownsampleResult {
            points: output.indices.iter().map(|&i| points[i]).collect(),
            indices: output.indices,
            method: self.config.method,
            threshold: self.config.threshold,
            input_len: points.len(),
            refinement: output.refinement,
        })
    }

    /// Downsample a series given as separate timestamp and value columns.
    pub fn run_xy<T: Float>(
        &self,
        timestamps: &[u64],
        values: &[T],
    ) -> Result<DownsampleResult<T>, DownsampleError> {
        Validator::validate_columns(timestamps, values)?;

        let points: Vec<Point<T>> = timestamps
            .iter()
            .zip(values)
            .map(|(&timestamp, &value)| Point::new(timestamp, value))
            .collect();

        self.run(&points)
    }
}
