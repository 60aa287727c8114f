//! Basic descriptive statistics.
//!
//! Functions here take plain slices and return `NaN` rather than erroring
//! when a statistic is undefined for the input.

/// Returns the finite values of the series, dropping `NaN` and infinities.
pub fn finite_values(series: &[f64]) -> Vec<f64> {
    series.iter().copied().filter(|x| x.is_finite()).collect()
}

/// Returns the arithmetic mean.
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Returns the smallest finite value, or `NaN` if there is none.
pub fn minimum(series: &[f64]) -> f64 {
    series
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

/// Returns the largest finite value, or `NaN` if there is none.
pub fn maximum(series: &[f64]) -> f64 {
    series
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

/// Returns the population variance (with n denominator).
pub fn variance(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    if series.len() == 1 {
        return 0.0;
    }
    let m = mean(series);
    series.iter().map(|x| (x - m).powi(2)).sum::<f64>() / series.len() as f64
}

/// Returns the population standard deviation.
pub fn standard_deviation(series: &[f64]) -> f64 {
    variance(series).sqrt()
}
