//! Distance-threshold search.
//!
//! The area-of-change cutoff grows in fixed steps from zero until the segment
//! count drops to the target (default: half the extrema, rounded up) or to a
//! single segment.

use log::{debug, trace};

use super::{Method, SegmentationResult, Segmenter};
use crate::core::TaggedSeries;
use crate::error::{Result, SegmentError};
use crate::segment::{distance_segments, Segment};
use crate::turning::{DistanceSelector, TurningPointSelector};

/// Divisor applied to `y_range * x_range` for the default step.
const DEFAULT_STEP_DIVISOR: f64 = 1000.0;

/// Configuration for the distance-threshold search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceSearch {
    /// Target segment count; defaults to `(extremum_count + 1) / 2`
    pub target_count: Option<usize>,
    /// Cutoff increment; defaults to `y_range * x_range / 1000`
    pub step: Option<f64>,
    /// Maximum number of trials before giving up
    pub max_trials: usize,
}

impl Default for DistanceSearch {
    fn default() -> Self {
        Self {
            target_count: None,
            step: None,
            max_trials: 100_000,
        }
    }
}

impl DistanceSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target segment count.
    pub fn target_count(mut self, n: usize) -> Self {
        self.target_count = Some(n);
        self
    }

    /// Set the cutoff increment.
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Set the trial cap.
    pub fn max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Effective target: the configured count or half the extrema.
    pub fn target_for(&self, series: &TaggedSeries) -> f64 {
        self.target_count
            .map(|n| n as f64)
            .unwrap_or((series.extremum_count() + 1) as f64 / 2.0)
    }

    /// Effective step: the configured step or a thousandth of the bounding
    /// area of the series.
    pub fn step_for(&self, series: &TaggedSeries) -> f64 {
        self.step
            .unwrap_or(series.y_range() * series.x_range() / DEFAULT_STEP_DIVISOR)
    }

    fn validate(&self) -> Result<()> {
        if let Some(step) = self.step {
            if !(step.is_finite() && step > 0.0) {
                return Err(SegmentError::Configuration(format!(
                    "distance step must be positive, got {step}"
                )));
            }
        }
        if self.target_count == Some(0) {
            return Err(SegmentError::Configuration(
                "target_count must be at least 1".into(),
            ));
        }
        if self.max_trials == 0 {
            return Err(SegmentError::Configuration(
                "max_trials must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Segmenter for DistanceSearch {
    fn trial(&self, series: &TaggedSeries, thresh: f64) -> Result<Vec<Segment>> {
        distance_segments(&DistanceSelector::new().select(series, thresh))
    }

    fn segment(&self, series: &TaggedSeries) -> Result<SegmentationResult> {
        self.validate()?;

        let target = self.target_for(series);
        let step = self.step_for(series);

        // A zero derived step only happens for a flat series, which has no
        // extrema: one trial already gives the single segment.
        if step <= 0.0 {
            let segments = self.trial(series, 0.0)?;
            debug!("distance search: flat series, segments={}", segments.len());
            return Ok(SegmentationResult {
                method: Method::Distance,
                segments,
                threshold: 0.0,
                trials: 1,
            });
        }

        let mut trials = 0usize;
        loop {
            trials += 1;
            let d = trials as f64 * step;
            let segments = self.trial(series, d)?;
            let count = segments.len();
            trace!("distance trial d={d} segments={count}");

            if count as f64 <= target || count <= 1 {
                debug!(
                    "distance search: step={step} target={target} trials={trials} dthresh={d} segments={count}"
                );
                return Ok(SegmentationResult {
                    method: Method::Distance,
                    segments,
                    threshold: d,
                    trials,
                });
            }
            if trials >= self.max_trials {
                return Err(SegmentError::NotConverged { trials });
            }
        }
    }
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

    // ==================== configuration ====================

    #[test]
    fn defaults_follow_series() {
        let series = zigzag();
        let search = DistanceSearch::default();
        assert_relative_eq!(search.target_for(&series), 4.0);
        assert_relative_eq!(search.step_for(&series), 136.5);
        assert_eq!(search.max_trials, 100_000);
    }

    #[test]
    fn rejects_non_positive_step() {
        let series = zigzag();
        for step in [0.0, -1.0, f64::INFINITY] {
            let err = DistanceSearch::new().step(step).segment(&series).unwrap_err();
            assert!(matches!(err, SegmentError::Configuration(_)));
        }
    }

    #[test]
    fn rejects_zero_trial_cap() {
        let err = DistanceSearch::new()
            .max_trials(0)
            .segment(&zigzag())
            .unwrap_err();
        assert!(matches!(err, SegmentError::Configuration(_)));
    }

    #[test]
    fn rejects_zero_target() {
        let err = DistanceSearch::new()
            .target_count(0)
            .segment(&zigzag())
            .unwrap_err();
        assert!(matches!(err, SegmentError::Configuration(_)));
    }

    // ==================== search ====================

    #[test]
    fn zigzag_default_search() {
        let series = zigzag();
        let result = DistanceSearch::new().segment(&series).unwrap();

        assert_eq!(result.method, Method::Distance);
        assert_eq!(result.trials, 66);
        assert_relative_eq!(result.threshold, 9009.0);
        assert_eq!(result.num_segments(), 4);

        let ends: Vec<f64> = result.segments.iter().map(|s| s.end_x).collect();
        assert_eq!(ends, vec![4.0, 12.0, 15.0, 22.0]);
        assert_relative_eq!(result.segments[0].slope, 4000.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn zigzag_custom_target_and_step() {
        let series = zigzag();

        let result = DistanceSearch::new().target_count(2).segment(&series).unwrap();
        assert_eq!(result.num_segments(), 2);
        assert_eq!(result.trials, 308);

        let result = DistanceSearch::new().step(1000.0).segment(&series).unwrap();
        assert_eq!(result.trials, 9);
        assert_relative_eq!(result.threshold, 9000.0);
        assert_eq!(result.num_segments(), 4);
    }

    #[test]
    fn trial_cap_reports_non_convergence() {
        let err = DistanceSearch::new()
            .step(1.0)
            .max_trials(5)
            .segment(&zigzag())
            .unwrap_err();
        assert_eq!(err, SegmentError::NotConverged { trials: 5 });
    }

    #[test]
    fn flat_series_is_single_segment() {
        let series = build(&[0.0, 1.0, 2.0, 3.0], &[4.0; 4]).unwrap();
        let result = DistanceSearch::new().segment(&series).unwrap();

        assert_eq!(result.trials, 1);
        assert_relative_eq!(result.threshold, 0.0);
        assert_eq!(result.num_segments(), 1);
        assert_relative_eq!(result.segments[0].slope, 0.0);
        assert_relative_eq!(result.segments[0].intercept, 4.0);
    }

    #[test]
    fn monotonic_series_converges_in_one_trial() {
        let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| -2.0 * v + 7.0).collect();
        let series = build(&x, &y).unwrap();
        let result = DistanceSearch::new().segment(&series).unwrap();

        assert_eq!(result.trials, 1);
        assert_eq!(result.num_segments(), 1);
        assert_relative_eq!(result.segments[0].slope, -2.0);
        assert_relative_eq!(result.segments[0].intercept, 7.0);
    }
}
