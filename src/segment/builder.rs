//! Segment construction for both selection variants.

use super::Segment;
use crate::core::Sample;
use crate::error::{Result, SegmentError};
use crate::utils::pwfit;

/// Breakpoints of a selection: first x, every boundary x, last x.
///
/// Duplicates are not filtered; `pwfit` rejects them.
pub fn breakpoints(selected: &[Sample]) -> Vec<f64> {
    let Some((first, rest)) = selected.split_first() else {
        return Vec::new();
    };
    let Some((last, interior)) = rest.split_last() else {
        return vec![first.x];
    };

    let mut breaks = Vec::with_capacity(selected.len());
    breaks.push(first.x);
    breaks.extend(interior.iter().filter(|s| s.kind.is_boundary()).map(|s| s.x));
    breaks.push(last.x);
    breaks
}

/// Fit one line per interval between breakpoints with a continuous
/// piecewise-linear least-squares model.
///
/// Every segment carries the overall sum of squared residuals as its quality.
pub fn correlation_segments(selected: &[Sample]) -> Result<Vec<Segment>> {
    let breaks = breakpoints(selected);
    if let Some(w) = breaks.windows(2).find(|w| w[1] <= w[0]) {
        return Err(SegmentError::DegenerateInterval {
            start: w[0],
            end: w[1],
        });
    }

    let points: Vec<(f64, f64)> = selected.iter().map(Sample::point).collect();
    let fit = pwfit(&points, &breaks)?;

    Ok(breaks
        .windows(2)
        .zip(fit.lines.iter())
        .map(|(b, line)| Segment {
            start_x: b[0],
            end_x: b[1],
            slope: line.slope,
            intercept: line.intercept,
            quality: Some(fit.ssr),
        })
        .collect())
}

/// Join the previous closing point to every boundary, and to the last
/// sample, with a straight line through both endpoints.
pub fn distance_segments(selected: &[Sample]) -> Result<Vec<Segment>> {
    let Some(mut p0) = selected.first().copied() else {
        return Ok(Vec::new());
    };
    let last = selected.len() - 1;

    let mut segments = Vec::new();
    for (i, p) in selected.iter().enumerate().skip(1) {
        if p.kind.is_boundary() || i == last {
            segments.push(two_point_line(&p0, p)?);
            p0 = *p;
        }
    }
    Ok(segments)
}

/// Line through two samples, valid between their x values.
pub fn two_point_line(from: &Sample, to: &Sample) -> Result<Segment> {
    let dx = to.x - from.x;
    if dx == 0.0 {
        return Err(SegmentError::DegenerateInterval {
            start: from.x,
            end: to.x,
        });
    }
    let slope = (to.y - from.y) / dx;
    Ok(Segment {
        start_x: from.x,
        end_x: to.x,
        slope,
        intercept: to.y - to.x * slope,
        quality: None,
    })
}
