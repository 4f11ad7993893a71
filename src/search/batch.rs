//! Independent runs over many series or many thresholds.
//!
//! Each run owns its selection copy, so runs share no mutable state. With the
//! `parallel` feature the work is spread over rayon's pool; results are always
//! returned in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Method, SegmentationResult, ThresholdConfig};
use crate::core::TaggedSeries;
use crate::error::Result;

/// Run the threshold search on every series.
///
/// Fails with the first error in input order.
pub fn fit_many(
    series: &[TaggedSeries],
    method: Method,
    config: &ThresholdConfig,
) -> Result<Vec<SegmentationResult>> {
    let segmenter = method.segmenter(config);

    #[cfg(feature = "parallel")]
    let results: Vec<Result<SegmentationResult>> =
        series.par_iter().map(|s| segmenter.segment(s)).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<SegmentationResult>> =
        series.iter().map(|s| segmenter.segment(s)).collect();

    results.into_iter().collect()
}

/// Segment count for each threshold, as isolated trials.
///
/// Returns `(threshold, count)` pairs in the order of `thresholds`.
pub fn threshold_profile(
    series: &TaggedSeries,
    method: Method,
    thresholds: &[f64],
) -> Result<Vec<(f64, usize)>> {
    let segmenter = method.segmenter(&ThresholdConfig::default());
    let run = |&t: &f64| segmenter.trial(series, t).map(|segments| (t, segments.len()));

    #[cfg(feature = "parallel")]
    let results: Vec<Result<(f64, usize)>> = thresholds.par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<(f64, usize)>> = thresholds.iter().map(run).collect();

    results.into_iter().collect()
}
