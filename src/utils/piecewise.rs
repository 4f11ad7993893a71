//! Continuous piecewise-linear least-squares fit with fixed breakpoints.
//!
//! The model is linear in the hinge basis
//! `[1, x - b0, max(0, x - b1), ..., max(0, x - b(k-1))]`, so the fit reduces
//! to ordinary least squares solved through the normal equations.

use crate::error::{Result, SegmentError};

/// Slope and intercept of one fitted interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

/// Result of a piecewise-linear fit.
#[derive(Debug, Clone)]
pub struct PiecewiseFit {
    /// Breakpoints the fit was computed with.
    pub breaks: Vec<f64>,
    /// One line per interval between consecutive breakpoints.
    pub lines: Vec<LineParams>,
    /// Sum of squared residuals over all points.
    pub ssr: f64,
    beta: Vec<f64>,
}

impl PiecewiseFit {
    /// Number of fitted intervals.
    pub fn n_segments(&self) -> usize {
        self.lines.len()
    }

    /// Evaluate the fitted curve at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        hinge_row(x, &self.breaks)
            .iter()
            .zip(self.beta.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

/// Fit a continuous piecewise-linear function through `points` with the given
/// breakpoints.
///
/// Breakpoints must be strictly increasing, at least two of them, and lie
/// within the x range of `points`. Every interval must hold at least one point
/// past its left breakpoint for the system to be solvable.
///
/// # Example
/// ```
/// use anofox_trend::utils::pwfit;
///
/// let points: Vec<(f64, f64)> = (0..=10)
///     .map(|i| {
///         let x = i as f64;
///         (x, if x <= 5.0 { x } else { 5.0 + 3.0 * (x - 5.0) })
///     })
///     .collect();
/// let fit = pwfit(&points, &[0.0, 5.0, 10.0]).unwrap();
/// assert_eq!(fit.n_segments(), 2);
/// assert!((fit.lines[1].slope - 3.0).abs() < 1e-8);
/// ```
pub fn pwfit(points: &[(f64, f64)], breaks: &[f64]) -> Result<PiecewiseFit> {
    if points.is_empty() {
        return Err(SegmentError::EmptyData);
    }
    validate_breaks(points, breaks)?;

    let k = breaks.len();
    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];

    for &(x, y) in points {
        let row = hinge_row(x, breaks);
        for i in 0..k {
            xty[i] += row[i] * y;
            for j in 0..=i {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    for i in 0..k {
        for j in (i + 1)..k {
            xtx[i][j] = xtx[j][i];
        }
    }

    let beta = solve_normal_equations(&xtx, &xty).ok_or_else(|| {
        SegmentError::Computation(
            "piecewise fit failed: normal equations are not positive definite".into(),
        )
    })?;

    let fitted_at_breaks: Vec<f64> = breaks
        .iter()
        .map(|&b| dot(&hinge_row(b, breaks), &beta))
        .collect();

    let lines = breaks
        .windows(2)
        .zip(fitted_at_breaks.windows(2))
        .map(|(b, yh)| {
            let slope = (yh[1] - yh[0]) / (b[1] - b[0]);
            LineParams {
                slope,
                intercept: yh[0] - slope * b[0],
            }
        })
        .collect();

    let ssr = points
        .iter()
        .map(|&(x, y)| (y - dot(&hinge_row(x, breaks), &beta)).powi(2))
        .sum();

    Ok(PiecewiseFit {
        breaks: breaks.to_vec(),
        lines,
        ssr,
        beta,
    })
}

fn validate_breaks(points: &[(f64, f64)], breaks: &[f64]) -> Result<()> {
    if breaks.len() < 2 {
        return Err(SegmentError::InvalidBreakpoints(format!(
            "need at least 2 breakpoints, got {}",
            breaks.len()
        )));
    }
    if let Some(w) = breaks.windows(2).find(|w| w[1] <= w[0]) {
        return Err(SegmentError::InvalidBreakpoints(format!(
            "breakpoints must be strictly increasing ({} followed by {})",
            w[0], w[1]
        )));
    }

    let (min_x, max_x) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    let first = breaks[0];
    let last = breaks[breaks.len() - 1];
    if first < min_x || last > max_x {
        return Err(SegmentError::InvalidBreakpoints(format!(
            "breakpoints [{first}, {last}] outside data range [{min_x}, {max_x}]"
        )));
    }
    Ok(())
}

/// Design-matrix row for `x`: `[1, x - b0, max(0, x - b1), ...]`.
fn hinge_row(x: f64, breaks: &[f64]) -> Vec<f64> {
    let mut row = Vec::with_capacity(breaks.len());
    row.push(1.0);
    row.push(x - breaks[0]);
    for &b in &breaks[1..breaks.len() - 1] {
        row.push((x - b).max(0.0));
    }
    row
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Solve the hinge-basis normal equations `G beta = rhs`.
///
/// `None` when `G` is not numerically positive definite, which happens when an
/// interval holds too few samples to pin down its slope.
fn solve_normal_equations(gram: &[Vec<f64>], rhs: &[f64]) -> Option<Vec<f64>> {
    let n = rhs.len();
    if n == 0 || gram.len() != n {
        return None;
    }
    let lower = cholesky_lower(gram)?;

    let mut z = vec![0.0; n];
    for i in 0..n {
        let partial: f64 = (0..i).map(|j| lower[i][j] * z[j]).sum();
        z[i] = (rhs[i] - partial) / lower[i][i];
    }

    let mut beta = vec![0.0; n];
    for i in (0..n).rev() {
        let partial: f64 = (i + 1..n).map(|j| lower[j][i] * beta[j]).sum();
        beta[i] = (z[i] - partial) / lower[i][i];
    }
    Some(beta)
}

/// Lower-triangular `L` with `G = L L'`.
///
/// A pivot below `1e-12` of its diagonal entry counts as a rank deficiency.
fn cholesky_lower(gram: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = gram.len();
    let mut lower = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let reduced = gram[i][j] - dot(&lower[i][..j], &lower[j][..j]);
            if i == j {
                if reduced <= gram[i][i].abs() * 1e-12 {
                    return None;
                }
                lower[i][i] = reduced.sqrt();
            } else {
                lower[i][j] = reduced / lower[j][j];
            }
        }
    }
    Some(lower)
}
