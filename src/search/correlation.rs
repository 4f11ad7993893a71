//! Correlation-threshold search.
//!
//! Starting from the magnitude of the correlation of all extrema, the cutoff
//! grows in fixed steps up to 1.0. The kept cutoff is the last one that lowered
//! the segment count while staying above the lower bound; if no trial lands in
//! that band the starting cutoff is kept.

use log::{debug, trace};

use super::{Method, SegmentationResult, Segmenter};
use crate::core::TaggedSeries;
use crate::error::{Result, SegmentError};
use crate::segment::{correlation_segments, Segment};
use crate::turning::{CorrelationSelector, TurningPointSelector};

/// Configuration for the correlation-threshold search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationSearch {
    /// Starting cutoff; defaults to |r| of all extrema
    pub rthresh: Option<f64>,
    /// Cutoff increment per trial
    pub step: f64,
    /// Segment counts must stay strictly above this; defaults to
    /// `len / |r| / 100`
    pub lower_bound: Option<f64>,
    /// Spacing guard of the selector
    pub edge_guard: usize,
    /// Give up with `NotConverged` after this many trials below 1.0
    pub max_trials: usize,
}

impl Default for CorrelationSearch {
    fn default() -> Self {
        Self {
            rthresh: None,
            step: 0.01,
            lower_bound: None,
            edge_guard: 2,
            max_trials: 10_000,
        }
    }
}

impl CorrelationSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting cutoff.
    pub fn rthresh(mut self, rthresh: f64) -> Self {
        self.rthresh = Some(rthresh);
        self
    }

    /// Set the cutoff increment.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the lower bound on accepted segment counts.
    pub fn lower_bound(mut self, bound: f64) -> Self {
        self.lower_bound = Some(bound);
        self
    }

    pub fn edge_guard(mut self, edge_guard: usize) -> Self {
        self.edge_guard = edge_guard;
        self
    }

    /// Cap the number of trials.
    pub fn max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SegmentError::Configuration(format!(
                "correlation step must be positive, got {}",
                self.step
            )));
        }
        if self.max_trials == 0 {
            return Err(SegmentError::Configuration(
                "max_trials must be at least 1".into(),
            ));
        }
        if let Some(r) = self.rthresh {
            if !(r > 0.0 && r <= 1.0) {
                return Err(SegmentError::Configuration(format!(
                    "rthresh must be in (0, 1], got {r}"
                )));
            }
        }
        Ok(())
    }

    fn selector(&self) -> CorrelationSelector {
        CorrelationSelector::new().edge_guard(self.edge_guard)
    }
}

/// Round to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Segmenter for CorrelationSearch {
    fn trial(&self, series: &TaggedSeries, rthresh: f64) -> Result<Vec<Segment>> {
        correlation_segments(&self.selector().select(series, rthresh))
    }

    fn segment(&self, series: &TaggedSeries) -> Result<SegmentationResult> {
        self.validate()?;

        let baseline = series.extrema_correlation().map(f64::abs);
        let start = self.rthresh.or(baseline).unwrap_or(0.0);
        let lower = self.lower_bound.unwrap_or(match baseline {
            Some(r) if r > 0.0 => series.len() as f64 / r / 100.0,
            _ => 0.0,
        });

        let mut best_r = start;
        let mut best_count = series.len();
        let mut trials = 0usize;
        let mut in_band = false;

        for k in 1_usize.. {
            let r = (start + k as f64 * self.step).min(1.0);
            let count = self.trial(series, r)?.len();
            trials += 1;
            trace!("correlation trial r={r:.4} segments={count}");

            if lower < count as f64 && count < best_count {
                best_count = count;
                best_r = r;
                in_band = true;
            }
            if r >= 1.0 {
                break;
            }
            if trials >= self.max_trials {
                return Err(SegmentError::NotConverged { trials });
            }
        }

        if !in_band {
            debug!(
                "correlation search found no count in ({lower:.3}, {}); keeping start cutoff {start:.4}",
                series.len()
            );
        }

        let segments = self.trial(series, best_r)?;
        let threshold = round2(best_r);
        debug!(
            "correlation search: start={start:.4} lower={lower:.3} trials={trials} rthresh={threshold} segments={}",
            segments.len()
        );

        Ok(SegmentationResult {
            method: Method::Correlation,
            segments,
            threshold,
            trials,
        })
    }
}
