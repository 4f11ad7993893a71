//! Simple linear regression over (x, y) points.
//!
//! Used by the correlation selector to judge how well a run of extrema lines up,
//! and by the series summary for the baseline correlation of all extrema.

/// Result of a simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Pearson correlation coefficient in [-1, 1]
    pub r: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Returns `None` when the fit is undefined: fewer than two points, or all
/// points sharing the same x. A constant `y` yields `r = 0`.
///
/// # Example
/// ```
/// use anofox_trend::utils::linreg;
///
/// let fit = linreg(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.r - 1.0).abs() < 1e-12);
/// ```
pub fn linreg(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let (ss_xx, ss_yy, ss_xy) = points.iter().fold((0.0, 0.0, 0.0), |(xx, yy, xy), &(x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (xx + dx * dx, yy + dy * dy, xy + dx * dy)
    });

    if ss_xx.abs() < 1e-10 {
        return None;
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let r_den = (ss_xx * ss_yy).sqrt();
    let r = if r_den == 0.0 {
        0.0
    } else {
        (ss_xy / r_den).clamp(-1.0, 1.0)
    };

    Some(LinearFit {
        slope,
        intercept,
        r,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linreg_perfect_line() {
        // y = 2x + 1
        let points: Vec<(f64, f64)> = (0..6).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
        let fit = linreg(&points).unwrap();

        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r, 1.0, epsilon = 1e-10);
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-10);
    }

    #[test]
    fn linreg_negative_correlation() {
        let points = vec![(1.0, 10.0), (2.0, 8.0), (3.0, 6.5), (4.0, 3.0)];
        let fit = linreg(&points).unwrap();

        assert!(fit.slope < 0.0);
        assert!(fit.r < -0.9 && fit.r >= -1.0);
    }

    #[test]
    fn linreg_constant_y_has_zero_r() {
        let points = vec![(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)];
        let fit = linreg(&points).unwrap();

        assert_relative_eq!(fit.slope, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 5.0, epsilon = 1e-12);
        assert_eq!(fit.r, 0.0);
    }

    #[test]
    fn linreg_too_few_points() {
        assert!(linreg(&[]).is_none());
        assert!(linreg(&[(1.0, 2.0)]).is_none());
    }

    #[test]
    fn linreg_identical_x_is_undefined() {
        assert!(linreg(&[(3.0, 1.0), (3.0, 2.0), (3.0, 4.0)]).is_none());
    }

    #[test]
    fn linreg_known_values() {
        // Extrema of the zigzag scenario: (4, 5000), (6, 500), (8, 7000)
        let fit = linreg(&[(4.0, 5000.0), (6.0, 500.0), (8.0, 7000.0)]).unwrap();
        assert_relative_eq!(fit.slope, 500.0, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept, 3500.0 / 3.0, epsilon = 1e-6);
        assert!(fit.r > 0.25 && fit.r < 0.35);
    }
}
