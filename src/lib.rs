//! # anofox-trend
//!
//! Adaptive piecewise-linear trend segmentation.
//!
//! A series is split into a small number of contiguous intervals, each
//! approximated by one straight line. Boundaries are placed at local extrema
//! rather than at fixed windows, and a threshold search tunes how aggressively
//! extrema are merged.
//!
//! Two variants are provided:
//! - **Correlation**: extrema runs grow while their straight-line correlation
//!   stays above a cutoff; lines come from a continuous piecewise least-squares
//!   fit.
//! - **Distance**: alternating extrema become boundaries once their area of
//!   change exceeds a cutoff; lines join consecutive boundaries.
//!
//! # Example
//!
//! ```
//! use anofox_trend::prelude::*;
//!
//! let x: Vec<f64> = (0..40).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v * 0.5).sin() * 5.0 + v).collect();
//!
//! let series = build(&x, &y).unwrap();
//! let result = fit(&series, Method::Distance, &ThresholdConfig::default()).unwrap();
//!
//! assert_eq!(result.segments.first().unwrap().start_x, 0.0);
//! assert_eq!(result.segments.last().unwrap().end_x, 39.0);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod detection;
pub mod error;
pub mod search;
pub mod segment;
pub mod turning;
pub mod utils;

pub use error::{Result, SegmentError};

pub mod prelude {
    pub use crate::core::{build, PointKind, Sample, TaggedSeries};
    pub use crate::error::{Result, SegmentError};
    pub use crate::search::{fit, Method, SegmentationResult, Segmenter, ThresholdConfig};
    pub use crate::segment::Segment;
}
