// ABOUTME: Ordinary least squares regression over (x, y) samples for trend projection
// ABOUTME: Slope, intercept, coefficient of determination, correlation, and standard error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use budget_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Complete linear regression analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (y units per x unit)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination `1 - SSE/SST`, 0 when y has no variance
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
    /// Number of samples fitted
    pub data_points: usize,
}

impl RegressionResult {
    /// Value of the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Statistical analysis engine
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit `y = slope * x + intercept` by ordinary least squares
    ///
    /// When every `x` or every `y` is identical the slope is 0 and the
    /// intercept is the mean of `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 samples are supplied
    pub fn linear_regression(samples: &[(f64, f64)]) -> AppResult<RegressionResult> {
        if samples.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                samples.len()
            )));
        }

        let n = samples.len() as f64;

        let sum_x = samples.iter().map(|(x, _)| x).sum::<f64>();
        let sum_y = samples.iter().map(|(_, y)| y).sum::<f64>();
        let sum_xx = samples.iter().map(|(x, _)| x * x).sum::<f64>();
        let sum_x_y = samples.iter().map(|(x, y)| x * y).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let sum_yy = samples.iter().map(|(_, y)| y * y).sum::<f64>();
        let sst = samples
            .iter()
            .map(|(_, y)| (y - mean_y).powi(2))
            .sum::<f64>();
        // Repeated identical y values can leave rounding residue in the mean
        let sst = if sst <= f64::EPSILON * sum_yy.max(1.0) {
            0.0
        } else {
            sst
        };

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        let (slope, intercept) = if denominator.abs() < f64::EPSILON || sst == 0.0 {
            (0.0, mean_y)
        } else {
            let slope = n.mul_add(sum_x_y, -(sum_x * sum_y)) / denominator;
            (slope, slope.mul_add(-mean_x, mean_y))
        };

        let sse = samples
            .iter()
            .map(|(x, y)| (y - slope.mul_add(*x, intercept)).powi(2))
            .sum::<f64>();

        let r_squared = if sst == 0.0 { 0.0 } else { 1.0 - sse / sst };
        let correlation = r_squared.max(0.0).sqrt().copysign(slope);

        let degrees_of_freedom = samples.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            correlation,
            standard_error,
            degrees_of_freedom,
            data_points: samples.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let samples = [(0.0, 80.0), (7.0, 79.3), (14.0, 78.6), (21.0, 77.9)];
        let result = StatisticalAnalyzer::linear_regression(&samples).unwrap();
        assert!((result.slope + 0.1).abs() < 1e-9);
        assert!((result.intercept - 80.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
        assert!((result.correlation + 1.0).abs() < 1e-9);
        assert!((result.predict(28.0) - 77.2).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_fit_has_partial_r_squared() {
        let samples = [(0.0, 80.0), (1.0, 80.6), (2.0, 79.4), (3.0, 79.8), (4.0, 79.1)];
        let result = StatisticalAnalyzer::linear_regression(&samples).unwrap();
        assert!(result.slope < 0.0);
        assert!(result.r_squared > 0.0 && result.r_squared < 1.0);
        assert_eq!(result.degrees_of_freedom, 3);
        assert!(result.standard_error > 0.0);
    }

    #[test]
    fn test_constant_y_has_zero_r_squared() {
        let samples = [(0.0, 75.0), (3.0, 75.0), (9.0, 75.0)];
        let result = StatisticalAnalyzer::linear_regression(&samples).unwrap();
        assert!(result.slope.abs() < f64::EPSILON);
        assert!(result.r_squared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeated_inexact_y_is_flat() {
        let samples = [(0.0, 0.1), (1.0, 0.1), (2.0, 0.1)];
        let result = StatisticalAnalyzer::linear_regression(&samples).unwrap();
        assert!(result.slope.abs() < f64::EPSILON);
        assert!(result.r_squared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_x_falls_back_to_mean() {
        let samples = [(2.0, 70.0), (2.0, 72.0)];
        let result = StatisticalAnalyzer::linear_regression(&samples).unwrap();
        assert!(result.slope.abs() < f64::EPSILON);
        assert!((result.intercept - 71.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_too_few_samples() {
        assert!(StatisticalAnalyzer::linear_regression(&[(0.0, 1.0)]).is_err());
        assert!(StatisticalAnalyzer::linear_regression(&[]).is_err());
    }
}
