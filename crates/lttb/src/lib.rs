//! # LTTB: Largest-Triangle downsampling for Rust
//!
//! Shape-preserving downsampling of time series for plotting and transfer,
//! with two algorithms sharing one selection rule:
//!
//! - **LTTB** (Largest-Triangle-Three-Buckets): fixed-width buckets.
//! - **LTD** (Largest-Triangle-Dynamic): buckets are first reshaped toward
//!   poorly approximated regions using linear-regression SSE, then the same
//!   largest-triangle selection runs over the refined layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use lttb::prelude::*;
//!
//! let series: Vec<Point<f64>> = [(0, 0.0), (1, 5.0), (2, 1.0), (3, 9.0), (4, 2.0), (5, 8.0), (6, 0.0)]
//!     .into_iter()
//!     .map(|(t, v)| Point::new(t, v))
//!     .collect();
//!
//! let sampled = downsample_fixed(&series, 3)?;
//! assert_eq!(sampled, vec![series[0], series[3], series[6]]);
//! # Result::<(), DownsampleError>::Ok(())
//! ```
//!
//! ### Builder and Run Metadata
//!
//! ```rust
//! use lttb::prelude::*;
//!
//! let series: Vec<Point<f64>> = (0..1_000u64)
//!     .map(|t| Point::new(t, (t as f64 / 25.0).sin()))
//!     .collect();
//!
//! let downsampler = Downsample::new().threshold(100).method(Ltd).build()?;
//! let result = downsampler.run(&series)?;
//!
//! assert_eq!(result.points.len(), 100);
//! assert!(result.iterations_used().unwrap() <= 100);
//! println!("{}", result);
//! # Result::<(), DownsampleError>::Ok(())
//! ```
//!
//! ## Degenerate thresholds
//!
//! - `threshold == 0` or `threshold >= len`: the input is returned unchanged.
//! - `threshold == 1`: rejected, one point cannot hold both endpoints.
//! - `threshold == 2`: the first and last points.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! lttb = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Steinarsson, S. (2013). "Downsampling Time Series for Visual Representation"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure geometric functions.
mod math;

// Layer 3: Algorithms - bucketing, selection, scoring, refinement.
mod algorithms;

// Layer 4: Engine - orchestration and validation.
mod engine;

// High-level API.
mod api;

pub use api::{
    downsample_adaptive, downsample_fixed, DownsampleBuilder, DownsampleError, DownsampleResult,
    Downsampler, ErrorKind, Method, Point, Refinement, StopReason,
};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        downsample_adaptive, downsample_fixed, DownsampleBuilder as Downsample, DownsampleError,
        DownsampleResult, Downsampler, ErrorKind, Method,
        Method::{Ltd, Lttb},
        Point, Refinement, StopReason,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
