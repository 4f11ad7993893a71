//! Correlation-based turning-point selection.
//!
//! Extrema are accumulated left to right. Once the run holds more than two
//! points, the magnitude of its straight-line correlation decides whether the
//! newest extremum extends the run or breaks it. A break discards the newest
//! extremum and restarts the run from the last accepted one.

use log::trace;

use crate::core::{Sample, TaggedSeries};
use crate::turning::TurningPointSelector;
use crate::utils::linreg;

/// Runs shorter than this have no correlation decision.
const MIN_DECIDED_RUN: usize = 3;

/// State of the accumulator between extrema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// Extending the current run.
    Accumulating,
    /// The last offered extremum broke the run; the interval must be closed
    /// before accepting more points.
    ClosingInterval,
}

/// Outcome of offering one extremum to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// The extremum extends the run. `correlation` is `None` while the run is
    /// too short (or degenerate) to decide.
    Accepted { correlation: Option<f64> },
    /// The extremum broke the run with the given correlation magnitude.
    Rejected { correlation: f64 },
}

/// Run of extrema being tested for linearity.
#[derive(Debug, Clone)]
pub struct Accumulator {
    rthresh: f64,
    run: Vec<(usize, (f64, f64))>,
    state: SelectorState,
}

impl Accumulator {
    pub fn new(rthresh: f64) -> Self {
        Self {
            rthresh,
            run: Vec::new(),
            state: SelectorState::Accumulating,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Number of extrema in the current run.
    pub fn len(&self) -> usize {
        self.run.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.is_empty()
    }

    /// Offer the extremum at `index`.
    ///
    /// Must only be called while `Accumulating`; a rejection moves the
    /// accumulator to `ClosingInterval` until [`close_interval`] is called.
    ///
    /// [`close_interval`]: Accumulator::close_interval
    pub fn offer(&mut self, index: usize, point: (f64, f64)) -> Decision {
        debug_assert_eq!(self.state, SelectorState::Accumulating);
        self.run.push((index, point));

        let correlation = self.correlation();
        match correlation {
            Some(r) if r < self.rthresh => {
                self.run.pop();
                self.state = SelectorState::ClosingInterval;
                Decision::Rejected { correlation: r }
            }
            _ => Decision::Accepted { correlation },
        }
    }

    /// Close the interval at the last accepted extremum and restart the run
    /// from it. Returns the closing index.
    pub fn close_interval(&mut self) -> Option<usize> {
        let closing = self.run.last().copied();
        self.run.clear();
        self.run.extend(closing);
        self.state = SelectorState::Accumulating;
        closing.map(|(index, _)| index)
    }

    /// Correlation magnitude of the run, if decidable.
    fn correlation(&self) -> Option<f64> {
        if self.run.len() < MIN_DECIDED_RUN {
            return None;
        }
        let points: Vec<(f64, f64)> = self.run.iter().map(|&(_, p)| p).collect();
        linreg(&points).map(|fit| fit.r.abs())
    }
}

/// Selects turning points by correlation cutoff.
///
/// An extremum accepted with a decided correlation becomes a boundary when
/// more than `edge_guard` samples separate it from the previously accepted
/// extremum and more than `edge_guard` samples follow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSelector {
    pub edge_guard: usize,
}

impl Default for CorrelationSelector {
    fn default() -> Self {
        Self { edge_guard: 2 }
    }
}

impl CorrelationSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum spacing (exclusive) required around a boundary.
    pub fn edge_guard(mut self, edge_guard: usize) -> Self {
        self.edge_guard = edge_guard;
        self
    }
}

impl TurningPointSelector for CorrelationSelector {
    fn select(&self, series: &TaggedSeries, rthresh: f64) -> Vec<Sample> {
        let mut out = series.samples().to_vec();
        let n = out.len();
        let mut acc = Accumulator::new(rthresh);
        let mut last_accepted: Option<usize> = None;

        for (k, sample) in series.samples().iter().enumerate() {
            if !sample.kind.is_extremum() {
                continue;
            }

            match acc.offer(k, sample.point()) {
                Decision::Rejected { correlation } => {
                    let closing = acc.close_interval();
                    trace!(
                        "extremum {k} broke run (|r|={correlation:.4}); closed at {closing:?}"
                    );
                }
                Decision::Accepted { correlation } => {
                    let gap = last_accepted.map_or(k + 1, |prev| k - prev);
                    let remaining = n - k - 1;
                    if correlation.is_some() && gap > self.edge_guard && remaining > self.edge_guard
                    {
                        out[k] = sample.with_kind(sample.kind.promote());
                    }
                    last_accepted = Some(k);
                }
            }
        }

        out
    }
}
