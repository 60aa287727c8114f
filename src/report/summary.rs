//! Text summary of a skew-reduction run.

use std::fmt;

use crate::features::skewness;

/// The first summary line, naming the selected feature.
pub fn feature_line(feature: &str) -> String {
    format!("Most skewed positive feature: {feature}")
}

/// Outcome of normalizing one feature with Box-Cox.
#[derive(Debug, Clone, PartialEq)]
pub struct SkewReport {
    /// Name of the transformed feature.
    pub feature: String,
    /// Fitted Box-Cox lambda.
    pub lambda: f64,
    /// Skewness of the shifted feature before the transform.
    pub skew_before: f64,
    /// Skewness of the transformed feature.
    pub skew_after: f64,
}

impl SkewReport {
    /// Build a report from the values before and after the transform.
    pub fn new(feature: impl Into<String>, lambda: f64, before: &[f64], after: &[f64]) -> Self {
        Self {
            feature: feature.into(),
            lambda,
            skew_before: skewness(before),
            skew_after: skewness(after),
        }
    }

    /// The three lines after [`feature_line`]: lambda and skewness before
    /// and after the transform.
    pub fn fit_lines(&self) -> String {
        format!(
            concat!(
                "Optimal lambda for Box-Cox: {:.4}\n",
                "Skewness before Box-Cox: {:.4}\n",
                "Skewness after Box-Cox: {:.4}"
            ),
            self.lambda, self.skew_before, self.skew_after
        )
    }

    /// Absolute skewness removed by the transform.
    pub fn skew_reduction(&self) -> f64 {
        self.skew_before.abs() - self.skew_after.abs()
    }
}

impl fmt::Display for SkewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", feature_line(&self.feature))?;
        write!(f, "{}", self.fit_lines())
    }
}
