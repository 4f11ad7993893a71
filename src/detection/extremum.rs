//! Local extremum tagging.
//!
//! A sample is a peak when it is strictly greater than both neighbours and a
//! bottom when it is strictly smaller than both. Plateaus are never extrema and
//! the first and last samples are never classified.

use crate::core::PointKind;

/// Output of a single tagging pass over a series.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremaSummary {
    /// Classification per sample, same length as the input
    pub kinds: Vec<PointKind>,
    /// Number of peaks plus bottoms
    pub count: usize,
    /// max(x) - min(x)
    pub x_range: f64,
    /// max(y) - min(y)
    pub y_range: f64,
}

/// Classify the middle of three consecutive values.
pub fn classify(prev: f64, cur: f64, next: f64) -> PointKind {
    if prev < cur && next < cur {
        PointKind::Peak
    } else if prev > cur && next > cur {
        PointKind::Bottom
    } else {
        PointKind::None
    }
}

/// Tag every sample of `y` as peak, bottom or neither.
///
/// `x` only contributes to the reported range. Both slices are expected to have
/// the same length; series shorter than three samples have no extrema.
///
/// # Example
/// ```
/// use anofox_trend::core::PointKind;
/// use anofox_trend::detection::tag_extrema;
///
/// let summary = tag_extrema(&[1.0, 2.0, 3.0, 4.0], &[0.0, 5.0, 1.0, 1.0]);
/// assert_eq!(summary.kinds[1], PointKind::Peak);
/// assert_eq!(summary.count, 1);
/// ```
pub fn tag_extrema(x: &[f64], y: &[f64]) -> ExtremaSummary {
    let n = y.len();
    let mut kinds = vec![PointKind::None; n];

    if n >= 3 {
        for (i, w) in y.windows(3).enumerate() {
            kinds[i + 1] = classify(w[0], w[1], w[2]);
        }
    }

    let count = kinds.iter().filter(|k| k.is_extremum()).count();

    ExtremaSummary {
        kinds,
        count,
        x_range: range(x),
        y_range: range(y),
    }
}

fn range(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    hi - lo
}
