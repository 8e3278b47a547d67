//! Closed-form ordinary least squares for a single feature.

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope * x + intercept` minimizing the sum of squared residuals.
///
/// A zero-variance feature is treated as "no detectable trend": the fit
/// degrades to a flat line at the mean rather than propagating NaN.
pub fn least_squares(points: &[(f64, f64)]) -> LinearFit {
    if points.is_empty() {
        return LinearFit {
            slope: 0.0,
            intercept: 0.0,
        };
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (x, y) in points {
        let dx = x - mean_x;
        covariance += dx * (y - mean_y);
        variance += dx * dx;
    }
    if variance <= f64::EPSILON {
        return LinearFit {
            slope: 0.0,
            intercept: mean_y,
        };
    }

    let slope = covariance / variance;
    LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}
