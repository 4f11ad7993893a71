//! Threshold search: pick the selector threshold that yields a compact
//! segmentation.
//!
//! # Available Methods
//!
//! - **Correlation**: sweeps a correlation cutoff upward from the baseline
//!   correlation of all extrema towards 1.0
//! - **Distance**: grows an area-of-change cutoff in fixed steps until the
//!   segment count reaches a target
//!
//! # Example
//!
//! ```
//! use anofox_trend::core::build;
//! use anofox_trend::search::{fit, Method, ThresholdConfig};
//!
//! let x: Vec<f64> = (1..=22).map(|i| i as f64).collect();
//! let y = vec![
//!     1000.0, 2000.0, 3000.0, 5000.0, 2500.0, 500.0, 2500.0, 7000.0, 6000.0, 5400.0, 5000.0,
//!     1000.0, 2000.0, 3000.0, 5000.0, 2500.0, 500.0, 2500.0, 7000.0, 6000.0, 5400.0, 5000.0,
//! ];
//! let series = build(&x, &y).unwrap();
//!
//! let result = fit(&series, Method::Distance, &ThresholdConfig::default()).unwrap();
//! assert_eq!(result.num_segments(), 4);
//! assert!(result.trials > 0);
//! ```

mod batch;
mod correlation;
mod distance;

pub use batch::{fit_many, threshold_profile};
pub use correlation::CorrelationSearch;
pub use distance::DistanceSearch;

use crate::core::TaggedSeries;
use crate::error::Result;
use crate::segment::Segment;

/// Segmentation variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Correlation-threshold selection with piecewise least-squares lines.
    #[default]
    Correlation,
    /// Distance-threshold selection with two-point lines.
    Distance,
}

/// Optional overrides for the threshold search.
///
/// Options that do not apply to the chosen [`Method`] are ignored; omitted
/// options fall back to the search defaults.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdConfig {
    /// Target segment count (distance)
    pub target_count: Option<usize>,
    /// Threshold step (distance)
    pub step: Option<f64>,
    /// Starting correlation cutoff (correlation)
    pub rthresh: Option<f64>,
}

impl ThresholdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_count(mut self, n: usize) -> Self {
        self.target_count = Some(n);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn rthresh(mut self, rthresh: f64) -> Self {
        self.rthresh = Some(rthresh);
        self
    }
}

/// Outcome of a threshold search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationResult {
    /// Variant that produced the segments
    pub method: Method,
    /// Segments in x order, covering the whole series
    pub segments: Vec<Segment>,
    /// Chosen threshold (correlation cutoffs are rounded to 2 decimals)
    pub threshold: f64,
    /// Number of trials run during the search
    pub trials: usize,
}

impl SegmentationResult {
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Segment covering `x`, preferring the earlier one at shared boundaries.
    pub fn segment_for(&self, x: f64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(x))
    }

    /// Evaluate the piecewise trend at `x`; `None` outside the series range.
    pub fn predict(&self, x: f64) -> Option<f64> {
        self.segment_for(x).map(|s| s.evaluate(x))
    }
}

/// A complete segmentation strategy: selection, line building and threshold
/// search.
pub trait Segmenter {
    /// Build segments for one fixed threshold.
    fn trial(&self, series: &TaggedSeries, threshold: f64) -> Result<Vec<Segment>>;

    /// Search for a threshold and return the final segmentation.
    fn segment(&self, series: &TaggedSeries) -> Result<SegmentationResult>;
}

impl Method {
    /// Search configuration for this method from the shared option set.
    pub fn segmenter(self, config: &ThresholdConfig) -> Box<dyn Segmenter + Send + Sync> {
        match self {
            Method::Correlation => {
                let mut search = CorrelationSearch::default();
                if let Some(r) = config.rthresh {
                    search = search.rthresh(r);
                }
                Box::new(search)
            }
            Method::Distance => {
                let mut search = DistanceSearch::default();
                if let Some(n) = config.target_count {
                    search = search.target_count(n);
                }
                if let Some(step) = config.step {
                    search = search.step(step);
                }
                Box::new(search)
            }
        }
    }
}

/// Segment `series` with the given method and options.
pub fn fit(
    series: &TaggedSeries,
    method: Method,
    config: &ThresholdConfig,
) -> Result<SegmentationResult> {
    method.segmenter(config).segment(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::build;
    use approx::assert_relative_eq;

    fn zigzag() -> TaggedSeries {
        let x: Vec<f64> = (1..=22).map(|i| i as f64).collect();
        let y = vec![
            1000.0, 2000.0, 3000.0, 5000.0, 2500.0, 500.0, 2500.0, 7000.0, 6000.0, 5400.0, 5000.0,
            1000.0, 2000.0, 3000.0, 5000.0, 2500.0, 500.0, 2500.0, 7000.0, 6000.0, 5400.0, 5000.0,
        ];
        build(&x, &y).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = ThresholdConfig::new().target_count(3).step(10.0).rthresh(0.5);
        assert_eq!(config.target_count, Some(3));
        assert_eq!(config.step, Some(10.0));
        assert_eq!(config.rthresh, Some(0.5));
    }

    #[test]
    fn default_method_is_correlation() {
        assert_eq!(Method::default(), Method::Correlation);
    }

    #[test]
    fn fit_dispatches_by_method() {
        let series = zigzag();
        let corr = fit(&series, Method::Correlation, &ThresholdConfig::default()).unwrap();
        let dist = fit(&series, Method::Distance, &ThresholdConfig::default()).unwrap();

        assert_eq!(corr.method, Method::Correlation);
        assert_eq!(dist.method, Method::Distance);
        assert!(corr.segments.iter().all(|s| s.quality.is_some()));
        assert!(dist.segments.iter().all(|s| s.quality.is_none()));
    }

    #[test]
    fn fit_ignores_options_of_other_method() {
        let series = zigzag();
        let plain = fit(&series, Method::Distance, &ThresholdConfig::default()).unwrap();
        let with_r = fit(&series, Method::Distance, &ThresholdConfig::new().rthresh(0.5)).unwrap();
        assert_eq!(plain, with_r);
    }

    #[test]
    fn predict_follows_segments() {
        let series = zigzag();
        let result = fit(&series, Method::Distance, &ThresholdConfig::default()).unwrap();

        // Distance segments pass through their endpoints
        for seg in &result.segments {
            let y_end = seg.evaluate(seg.end_x);
            let sample = series
                .samples()
                .iter()
                .find(|s| s.x == seg.end_x)
                .unwrap();
            assert_relative_eq!(y_end, sample.y, epsilon = 1e-9);
        }
        assert!(result.predict(0.0).is_none());
        assert!(result.predict(23.0).is_none());
        assert!(result.predict(10.5).is_some());
    }
}
