//! End-to-end skew normalization: shift, rank, transform, report.

use crate::core::Table;
use crate::error::{AnalysisError, Result};
use crate::features::{kurtosis, skew_test, skewness_adjusted, standard_deviation};
use crate::ranking::find_most_skewed_positive_feature;
use crate::report::{plot_before_after, SkewReport};
use crate::transform::{apply_boxcox, shift_to_positive, BoxCoxResult, DEFAULT_SHIFT_EPSILON};
use tracing::{debug, info, warn};

/// Settings for [`run_pipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Offset the column minimum is moved to by the positivity shift.
    pub epsilon: f64,
    /// Histogram bins per panel.
    pub bins: usize,
    /// Bar rows per histogram panel.
    pub chart_height: usize,
    /// Render the before/after figure.
    pub show_plot: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_SHIFT_EPSILON,
            bins: 50,
            chart_height: 16,
            show_plot: true,
        }
    }
}

impl PipelineConfig {
    /// Check that the settings can produce a result.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(AnalysisError::InvalidParameter(format!(
                "shift epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if self.bins == 0 {
            return Err(AnalysisError::InvalidParameter(
                "bins must be at least 1".to_string(),
            ));
        }
        if self.chart_height == 0 {
            return Err(AnalysisError::InvalidParameter(
                "chart height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Summary of the selected feature.
    pub report: SkewReport,
    /// Shifted values of the selected feature.
    pub original: Vec<f64>,
    /// Box-Cox output for the selected feature.
    pub transformed: BoxCoxResult,
    /// Rendered before/after figure, if requested.
    pub figure: Option<String>,
}

/// The most skewed column of a shifted table, ready for Box-Cox.
#[derive(Debug, Clone)]
pub struct FeatureSelection {
    /// Every column after the positivity shift.
    pub shifted: Table,
    /// Name of the column with the largest absolute skewness.
    pub feature: String,
}

impl FeatureSelection {
    /// Fit and apply Box-Cox to the selected column and build the report.
    ///
    /// # Errors
    /// Any Box-Cox fitting error, or `InvalidParameter` from figure settings.
    pub fn transform(&self, config: &PipelineConfig) -> Result<PipelineOutcome> {
        let feature = self.feature.as_str();
        let transformed = apply_boxcox(&self.shifted, feature)?;
        let original = self.shifted.column(feature)?.to_vec();

        let report = SkewReport::new(feature, transformed.lambda, &original, &transformed.data);
        info!(
            lambda = report.lambda,
            skew_before = report.skew_before,
            skew_after = report.skew_after,
            "Box-Cox applied"
        );
        log_normality(&original, &transformed.data);

        let figure = if config.show_plot {
            Some(plot_before_after(
                &original,
                &transformed.data,
                feature,
                config.bins,
                config.chart_height,
            )?)
        } else {
            None
        };

        Ok(PipelineOutcome {
            report,
            original,
            transformed,
            figure,
        })
    }
}

/// Shift every column of `table` to be strictly positive and select the one
/// with the largest absolute skewness.
///
/// Columns with missing values cannot be shifted to strictly positive values
/// and are never selected. The input table is left untouched.
///
/// # Errors
/// `InvalidParameter` for a bad config, `NoPositiveFeature` when no column
/// can be made strictly positive (including tables without rows or columns).
pub fn select_feature(table: &Table, config: &PipelineConfig) -> Result<FeatureSelection> {
    config.validate()?;
    info!(
        rows = table.n_rows(),
        columns = table.n_cols(),
        "starting skew normalization"
    );
    if table.has_missing_values() {
        warn!("table has missing values; affected columns will not be considered");
    }

    let shifted = shift_to_positive(table, config.epsilon);
    let feature = find_most_skewed_positive_feature(&shifted)?;
    info!(feature = feature.as_str(), "selected most skewed feature");

    Ok(FeatureSelection { shifted, feature })
}

/// Normalize the most skewed column of `table`.
///
/// Runs [`select_feature`] followed by [`FeatureSelection::transform`].
pub fn run_pipeline(table: &Table, config: &PipelineConfig) -> Result<PipelineOutcome> {
    select_feature(table, config)?.transform(config)
}

fn log_normality(before: &[f64], after: &[f64]) {
    for (stage, values) in [("before", before), ("after", after)] {
        match skew_test(values) {
            Ok(test) => info!(
                stage,
                z = test.statistic,
                p_value = test.p_value,
                "skewness test"
            ),
            Err(err) => debug!(stage, %err, "skewness test unavailable"),
        }
        debug!(
            stage,
            std = standard_deviation(values),
            adjusted_skewness = skewness_adjusted(values),
            kurtosis = kurtosis(values),
            "distribution shape"
        );
    }
}
