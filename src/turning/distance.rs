//! Distance-based turning-point selection.
//!
//! Single left-to-right pass. The reference point starts at the first sample;
//! an extremum whose polarity differs from the reference is promoted when the
//! area of change `|dy * dx|` from the reference exceeds the threshold, and it
//! then becomes the new reference.

use crate::core::{Polarity, Sample, TaggedSeries};
use crate::turning::TurningPointSelector;

/// Selects turning points by area-of-change cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceSelector;

impl DistanceSelector {
    pub fn new() -> Self {
        Self
    }
}

/// Area of change between two samples.
pub(crate) fn change_area(from: &Sample, to: &Sample) -> f64 {
    ((to.y - from.y) * (to.x - from.x)).abs()
}

/// True when `candidate` alternates with the reference polarity.
fn alternates(reference: Option<Polarity>, candidate: Polarity) -> bool {
    reference.is_none_or(|p| p.flip() == candidate)
}

impl TurningPointSelector for DistanceSelector {
    fn select(&self, series: &TaggedSeries, thresh: f64) -> Vec<Sample> {
        let mut out = series.samples().to_vec();
        let mut reference = *series.first();

        for q in out.iter_mut() {
            if !q.kind.is_extremum() {
                continue;
            }
            let Some(polarity) = q.kind.polarity() else {
                continue;
            };
            if alternates(reference.kind.polarity(), polarity) && change_area(&reference, q) > thresh
            {
                *q = q.with_kind(q.kind.promote());
                reference = *q;
            }
        }

        out
    }
}
