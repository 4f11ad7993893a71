//! Line segments and their construction from a turning-point selection.
//!
//! - [`correlation_segments`] fits a continuous piecewise-linear model with the
//!   boundaries as breakpoints
//! - [`distance_segments`] joins consecutive boundaries with two-point lines

mod builder;

pub use builder::{breakpoints, correlation_segments, distance_segments, two_point_line};

/// A line `y = slope * x + intercept` valid over `[start_x, end_x]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_x: f64,
    pub end_x: f64,
    pub slope: f64,
    pub intercept: f64,
    /// Sum of squared residuals of the whole fit (correlation variant only)
    pub quality: Option<f64>,
}

impl Segment {
    /// Evaluate the segment's line at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// True if `x` lies in the closed interval of this segment.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start_x && x <= self.end_x
    }

    pub fn width(&self) -> f64 {
        self.end_x - self.start_x
    }
}
