//! Tagged series: validated samples plus their extremum classification.

use crate::core::{PointKind, Sample};
use crate::detection::tag_extrema;
use crate::error::{Result, SegmentError};
use crate::utils::linreg;

/// Minimum number of samples needed to classify interior points.
pub const MIN_SERIES_LEN: usize = 3;

/// An ordered, dense series whose samples are tagged as peak, bottom or
/// neither.
///
/// The tagging is computed once at construction and never mutated; threshold
/// trials work on fresh copies of the samples.
///
/// With the `serde` feature only the raw x and y values are serialized;
/// deserializing revalidates them and recomputes the tags.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSeries", into = "RawSeries")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedSeries {
    samples: Vec<Sample>,
    extremum_count: usize,
    x_range: f64,
    y_range: f64,
}

/// Validate `x`/`y` and tag the resulting series.
///
/// Fails with `EmptyData`, `DimensionMismatch`, `InsufficientData` (fewer than
/// three samples) or `InvalidInput` (non-finite values, x not strictly
/// increasing) before any tagging happens.
///
/// # Example
/// ```
/// use anofox_trend::core::build;
///
/// let series = build(&[1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 2.0, 3.0]).unwrap();
/// assert_eq!(series.extremum_count(), 2);
/// ```
pub fn build(x: &[f64], y: &[f64]) -> Result<TaggedSeries> {
    TaggedSeries::new(x, y)
}

impl TaggedSeries {
    /// Validate and tag a series from parallel x and y slices.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        validate(x, y)?;

        let summary = tag_extrema(x, y);
        let samples = x
            .iter()
            .zip(y.iter())
            .zip(summary.kinds)
            .map(|((&x, &y), kind)| Sample::new(x, y, kind))
            .collect();

        Ok(Self {
            samples,
            extremum_count: summary.count,
            x_range: summary.x_range,
            y_range: summary.y_range,
        })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self::new(&x, &y)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a valid series holds at least three samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of peaks plus bottoms.
    pub fn extremum_count(&self) -> usize {
        self.extremum_count
    }

    /// max(x) - min(x)
    pub fn x_range(&self) -> f64 {
        self.x_range
    }

    /// max(y) - min(y)
    pub fn y_range(&self) -> f64 {
        self.y_range
    }

    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }

    pub fn last(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    /// All samples as `(x, y)` pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(Sample::point).collect()
    }

    /// Peaks and bottoms in series order.
    pub fn extrema(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().filter(|s| s.kind.is_extremum())
    }

    /// Indices of peaks and bottoms.
    pub fn extremum_indices(&self) -> Vec<usize> {
        self.samples
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind.is_extremum())
            .map(|(i, _)| i)
            .collect()
    }

    /// Signed Pearson correlation of a straight line through all extrema.
    ///
    /// `None` when fewer than two extrema exist.
    pub fn extrema_correlation(&self) -> Option<f64> {
        let points: Vec<(f64, f64)> = self.extrema().map(Sample::point).collect();
        linreg(&points).map(|fit| fit.r)
    }

    /// Kinds of all samples, in order.
    pub fn kinds(&self) -> Vec<PointKind> {
        self.samples.iter().map(|s| s.kind).collect()
    }
}

/// Wire form of a [`TaggedSeries`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSeries> for TaggedSeries {
    type Error = SegmentError;

    fn try_from(raw: RawSeries) -> Result<Self> {
        Self::new(&raw.x, &raw.y)
    }
}

#[cfg(feature = "serde")]
impl From<TaggedSeries> for RawSeries {
    fn from(series: TaggedSeries) -> Self {
        let (x, y) = series.samples.iter().map(Sample::point).unzip();
        Self { x, y }
    }
}

fn validate(x: &[f64], y: &[f64]) -> Result<()> {
    if x.is_empty() || y.is_empty() {
        return Err(SegmentError::EmptyData);
    }
    if x.len() != y.len() {
        return Err(SegmentError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.len() < MIN_SERIES_LEN {
        return Err(SegmentError::InsufficientData {
            needed: MIN_SERIES_LEN,
            got: x.len(),
        });
    }
    if let Some(i) = x.iter().zip(y.iter()).position(|(a, b)| !a.is_finite() || !b.is_finite()) {
        return Err(SegmentError::InvalidInput(format!(
            "non-finite value at index {i}"
        )));
    }
    if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SegmentError::InvalidInput(format!(
            "x must be strictly increasing (index {} to {})",
            i,
            i + 1
        )));
    }
    Ok(())
}
