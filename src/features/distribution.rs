//! Distribution shape statistics.
//!
//! Missing values (`NaN`, infinities) are ignored by every function in
//! this module.

use super::basic::{finite_values, mean};
use crate::error::{AnalysisError, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Count, mean and central moments m2, m3, m4 of the finite values.
struct Moments {
    n: usize,
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl Moments {
    /// True when the second moment is too small to standardize by.
    fn is_degenerate(&self) -> bool {
        self.n == 0 || self.m2 <= (f64::EPSILON * self.mean).powi(2)
    }
}

fn central_moments(series: &[f64]) -> Moments {
    let values = finite_values(series);
    let n = values.len();
    if n == 0 {
        return Moments {
            n,
            mean: f64::NAN,
            m2: f64::NAN,
            m3: f64::NAN,
            m4: f64::NAN,
        };
    }
    let m = mean(&values);
    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
    for x in &values {
        let d = x - m;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    let nf = n as f64;
    Moments {
        n,
        mean: m,
        m2: m2 / nf,
        m3: m3 / nf,
        m4: m4 / nf,
    }
}

/// Returns the skewness (third standardized moment, `m3 / m2^1.5`).
///
/// This is the biased (population) estimator. Returns `NaN` for empty or
/// constant input.
pub fn skewness(series: &[f64]) -> f64 {
    let moments = central_moments(series);
    if moments.is_degenerate() {
        return f64::NAN;
    }
    moments.m3 / moments.m2.powf(1.5)
}

/// Returns the adjusted Fisher-Pearson skewness coefficient (G1).
///
/// Requires at least three finite values.
pub fn skewness_adjusted(series: &[f64]) -> f64 {
    let n = central_moments(series).n;
    if n < 3 {
        return f64::NAN;
    }
    let nf = n as f64;
    skewness(series) * (nf * (nf - 1.0)).sqrt() / (nf - 2.0)
}

/// Returns the excess kurtosis (`m4 / m2^2 - 3`, normal distribution = 0).
pub fn kurtosis(series: &[f64]) -> f64 {
    let moments = central_moments(series);
    if moments.is_degenerate() {
        return f64::NAN;
    }
    moments.m4 / (moments.m2 * moments.m2) - 3.0
}

/// Result of the D'Agostino skewness test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewTest {
    /// Normal-approximation z-score of the sample skewness.
    pub statistic: f64,
    /// Two-sided p-value under the null of a normal distribution.
    pub p_value: f64,
}

/// Tests whether the skewness differs from that of a normal distribution.
///
/// Uses D'Agostino's transformation of the sample skewness to an
/// approximately standard normal statistic. Requires at least 8 finite
/// values.
pub fn skew_test(series: &[f64]) -> Result<SkewTest> {
    let n = finite_values(series).len();
    if n < 8 {
        return Err(AnalysisError::InsufficientData { needed: 8, got: n });
    }
    let b2 = skewness(series);
    if b2.is_nan() {
        return Err(AnalysisError::ComputationError(
            "skewness is undefined for constant data".to_string(),
        ));
    }

    let n = n as f64;
    let y = b2 * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    let ratio = y / alpha;
    let z = delta * (ratio + (ratio * ratio + 1.0).sqrt()).ln();

    let normal =
        Normal::new(0.0, 1.0).map_err(|e| AnalysisError::ComputationError(e.to_string()))?;
    let p_value = 2.0 * (1.0 - normal.cdf(z.abs()));

    Ok(SkewTest {
        statistic: z,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== skewness ====================

    #[test]
    fn skewness_symmetric() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_relative_eq!(skewness(&series), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn skewness_known_value() {
        // mean 2: deviations -1, -1, -1, 0, 3
        let series = vec![1.0, 1.0, 1.0, 2.0, 5.0];
        let m2: f64 = (1.0 + 1.0 + 1.0 + 0.0 + 9.0) / 5.0;
        let m3: f64 = (-1.0 - 1.0 - 1.0 + 0.0 + 27.0) / 5.0;
        assert_relative_eq!(skewness(&series), m3 / m2.powf(1.5), epsilon = 1e-12);
    }

    #[test]
    fn skewness_right_and_left() {
        let right = vec![1.0, 1.0, 1.0, 2.0, 2.0, 10.0];
        assert!(skewness(&right) > 0.5);

        let left = vec![1.0, 9.0, 9.0, 10.0, 10.0, 10.0];
        assert!(skewness(&left) < -0.5);
    }

    #[test]
    fn skewness_ignores_missing() {
        let clean = vec![1.0, 1.0, 1.0, 2.0, 2.0, 10.0];
        let dirty = vec![1.0, f64::NAN, 1.0, 1.0, 2.0, 2.0, f64::NAN, 10.0];
        assert_relative_eq!(skewness(&clean), skewness(&dirty), epsilon = 1e-12);
    }

    #[test]
    fn skewness_constant_and_empty() {
        assert!(skewness(&[5.0; 10]).is_nan());
        assert!(skewness(&[]).is_nan());
        assert!(skewness(&[f64::NAN]).is_nan());
    }

    #[test]
    fn skewness_adjusted_scales_biased() {
        let series = vec![1.0, 1.0, 1.0, 2.0, 2.0, 10.0];
        let n: f64 = 6.0;
        assert_relative_eq!(
            skewness_adjusted(&series),
            skewness(&series) * (n * (n - 1.0)).sqrt() / (n - 2.0),
            epsilon = 1e-12
        );
        assert!(skewness_adjusted(&[1.0, 2.0]).is_nan());
    }

    // ==================== kurtosis ====================

    #[test]
    fn kurtosis_uniform_like() {
        let series: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        assert!(kurtosis(&series) < 0.0);
    }

    #[test]
    fn kurtosis_heavy_tails() {
        let mut series = vec![0.0; 100];
        series[0] = -10.0;
        series[99] = 10.0;
        assert!(kurtosis(&series) > 0.0);
    }

    #[test]
    fn kurtosis_constant() {
        assert!(kurtosis(&[5.0; 10]).is_nan());
    }

    // ==================== skew_test ====================

    #[test]
    fn skew_test_symmetric_not_significant() {
        let series: Vec<f64> = (1..=50).map(|x| x as f64).collect();
        let result = skew_test(&series).unwrap();
        assert!(result.statistic.abs() < 1e-6);
        assert!(result.p_value > 0.99);
    }

    #[test]
    fn skew_test_skewed_is_significant() {
        let series: Vec<f64> = (1..=100).map(|x| (x as f64 * 0.08).exp()).collect();
        let result = skew_test(&series).unwrap();
        assert!(result.statistic > 2.0);
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn skew_test_needs_eight_values() {
        assert_eq!(
            skew_test(&[1.0, 2.0, 3.0]),
            Err(AnalysisError::InsufficientData { needed: 8, got: 3 })
        );
    }

    #[test]
    fn skew_test_constant_fails() {
        assert!(matches!(
            skew_test(&[2.0; 10]),
            Err(AnalysisError::ComputationError(_))
        ));
    }
}
