//! Turning-point selection.
//!
//! A selector walks the extrema of a tagged series and promotes the ones that
//! pass its threshold test to segment boundaries. Selection never touches the
//! input: every call returns a fresh copy of the samples.
//!
//! # Available Selectors
//!
//! - **Correlation**: grows runs of extrema while their straight-line
//!   correlation stays above the cutoff
//! - **Distance**: promotes alternating extrema whose area of change
//!   `|dy * dx|` from the last boundary exceeds the cutoff

mod correlation;
mod distance;

pub use correlation::{Accumulator, CorrelationSelector, Decision, SelectorState};
pub use distance::DistanceSelector;

use crate::core::{Sample, TaggedSeries};

/// Promotes extrema of a tagged series to boundaries for a given threshold.
pub trait TurningPointSelector {
    /// Return a full copy of `series` with the selected extrema re-tagged as
    /// boundaries.
    fn select(&self, series: &TaggedSeries, threshold: f64) -> Vec<Sample>;
}

/// Number of boundaries in a selection.
pub fn boundary_count(selected: &[Sample]) -> usize {
    selected.iter().filter(|s| s.kind.is_boundary()).count()
}
