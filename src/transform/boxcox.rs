//! Box-Cox power transformation.
//!
//! Transforms strictly positive data to be more normally distributed, with
//! the shape parameter lambda fitted by maximum likelihood.

use crate::core::Table;
use crate::error::{AnalysisError, Result};
use crate::features::basic::{maximum, minimum, variance};
use crate::utils::optimization::{brent_minimize, BrentConfig};
use tracing::debug;

/// Lambdas closer to zero than this use the log form of the transform.
const LAMBDA_ZERO_TOLERANCE: f64 = 1e-10;

/// Starting points for the lambda search.
const LAMBDA_SEARCH_START: (f64, f64) = (-2.0, 2.0);

/// Result of Box-Cox transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxCoxResult {
    /// Transformed data
    pub data: Vec<f64>,
    /// Lambda parameter used
    pub lambda: f64,
}

impl BoxCoxResult {
    /// Inverse transform to recover original scale.
    pub fn inverse(&self) -> Vec<f64> {
        inv_boxcox(&self.data, self.lambda)
    }
}

/// Apply Box-Cox transformation with a given lambda.
///
/// For lambda != 0: y = (x^lambda - 1) / lambda
/// For lambda == 0: y = ln(x)
///
/// Non-positive inputs map to NaN.
pub fn boxcox(series: &[f64], lambda: f64) -> Vec<f64> {
    series
        .iter()
        .map(|&x| {
            if x <= 0.0 || x.is_nan() {
                f64::NAN
            } else if lambda.abs() < LAMBDA_ZERO_TOLERANCE {
                x.ln()
            } else {
                (x.powf(lambda) - 1.0) / lambda
            }
        })
        .collect()
}

/// Inverse Box-Cox transformation.
///
/// For lambda != 0: x = (lambda * y + 1)^(1/lambda)
/// For lambda == 0: x = exp(y)
pub fn inv_boxcox(transformed: &[f64], lambda: f64) -> Vec<f64> {
    transformed
        .iter()
        .map(|&y| {
            if lambda.abs() < LAMBDA_ZERO_TOLERANCE {
                y.exp()
            } else {
                let val = lambda * y + 1.0;
                if val <= 0.0 {
                    f64::NAN
                } else {
                    val.powf(1.0 / lambda)
                }
            }
        })
        .collect()
}

/// Profile log-likelihood of lambda under a normal model for the
/// transformed data.
///
/// llf = (lambda - 1) * sum(ln x) - n/2 * ln(var(y))
///
/// The variance is the population variance of the transformed values. It
/// is evaluated in log space so large |lambda| does not overflow `x^lambda`.
pub fn boxcox_llf(series: &[f64], lambda: f64) -> f64 {
    let n = series.len();
    if n == 0 {
        return f64::NAN;
    }
    let log_data: Vec<f64> = series.iter().map(|x| x.ln()).collect();
    let log_sum: f64 = log_data.iter().sum();

    let log_variance = if lambda.abs() < LAMBDA_ZERO_TOLERANCE {
        variance(&log_data).ln()
    } else {
        // var((x^l - 1)/l) = var(exp(l ln x)) / l^2, factored around the max exponent
        let exponents: Vec<f64> = log_data.iter().map(|lx| lambda * lx).collect();
        let max_exp = exponents.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let scaled: Vec<f64> = exponents.iter().map(|e| (e - max_exp).exp()).collect();
        2.0 * max_exp + variance(&scaled).ln() - 2.0 * lambda.abs().ln()
    };

    (lambda - 1.0) * log_sum - 0.5 * n as f64 * log_variance
}

/// Find the maximum-likelihood Box-Cox lambda.
///
/// Minimizes the negative of [`boxcox_llf`] with Brent's method, starting
/// from a bracket search over (-2, 2).
///
/// # Errors
/// Fails if the data holds non-positive or missing values, has fewer than
/// two points, is constant, or if the optimizer cannot locate a finite
/// optimum.
pub fn boxcox_lambda(series: &[f64]) -> Result<f64> {
    boxcox_lambda_with(series, &BrentConfig::default())
}

/// [`boxcox_lambda`] with explicit optimizer settings.
pub fn boxcox_lambda_with(series: &[f64], config: &BrentConfig) -> Result<f64> {
    check_positive("<series>", series)?;
    if series.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }
    if minimum(series) == maximum(series) {
        return Err(AnalysisError::ComputationError(
            "Box-Cox lambda is undefined for constant data".to_string(),
        ));
    }

    let (xa, xb) = LAMBDA_SEARCH_START;
    let result = brent_minimize(|lambda| -boxcox_llf(series, lambda), xa, xb, config)?;

    debug!(
        lambda = result.optimal_point,
        llf = -result.optimal_value,
        iterations = result.iterations,
        converged = result.converged,
        "fitted Box-Cox lambda"
    );

    if !result.optimal_point.is_finite() || !result.optimal_value.is_finite() {
        return Err(AnalysisError::ComputationError(format!(
            "lambda search ended at a non-finite point ({})",
            result.optimal_point
        )));
    }
    Ok(result.optimal_point)
}

/// Apply Box-Cox transformation with automatic lambda selection.
pub fn boxcox_auto(series: &[f64]) -> Result<BoxCoxResult> {
    let lambda = boxcox_lambda(series)?;
    let data = boxcox(series, lambda);
    Ok(BoxCoxResult { data, lambda })
}

/// Fit and apply Box-Cox to one column of a table.
///
/// # Errors
/// `UnknownFeature` if the column does not exist, `NonPositiveValues` if
/// any value is zero, negative or missing.
pub fn apply_boxcox(table: &Table, feature: &str) -> Result<BoxCoxResult> {
    let values = table.column(feature)?;
    check_positive(feature, values)?;
    boxcox_auto(values)
}

/// Check if data is suitable for Box-Cox transformation.
///
/// Returns true if all values are positive.
pub fn is_boxcox_suitable(series: &[f64]) -> bool {
    !series.is_empty() && series.iter().all(|&x| x > 0.0)
}

fn check_positive(feature: &str, series: &[f64]) -> Result<()> {
    let count = series.iter().filter(|&&x| x.is_nan() || x <= 0.0).count();
    if count > 0 {
        return Err(AnalysisError::NonPositiveValues {
            feature: feature.to_string(),
            count,
        });
    }
    Ok(())
}
