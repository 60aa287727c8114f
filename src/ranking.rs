//! Skew ranking: pick the strictly positive column with the largest
//! absolute skewness.

use crate::core::Table;
use crate::error::{AnalysisError, Result};
use crate::features::skewness;
use tracing::{debug, warn};

/// Skewness of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSkew {
    pub name: String,
    pub skewness: f64,
}

/// Names of the columns whose values are all strictly positive, in table order.
///
/// Empty columns and columns holding a missing value are excluded.
pub fn positive_features(table: &Table) -> Vec<&str> {
    table
        .iter()
        .filter(|(_, values)| !values.is_empty() && values.iter().all(|&x| x > 0.0))
        .map(|(name, _)| name)
        .collect()
}

/// Skewness of every strictly positive column, in table order.
///
/// # Errors
/// `NoPositiveFeature` if no column is strictly positive.
pub fn skewness_by_feature(table: &Table) -> Result<Vec<FeatureSkew>> {
    let positive = positive_features(table);
    if positive.is_empty() {
        return Err(AnalysisError::NoPositiveFeature);
    }
    if positive.len() < table.n_cols() {
        warn!(
            kept = positive.len(),
            total = table.n_cols(),
            "skipping columns that are not strictly positive"
        );
    }

    positive
        .into_iter()
        .map(|name| {
            let sk = skewness(table.column(name)?);
            debug!(feature = name, skewness = sk, "column skewness");
            Ok(FeatureSkew {
                name: name.to_string(),
                skewness: sk,
            })
        })
        .collect()
}

/// Find the strictly positive column with the largest absolute skewness.
///
/// Ties go to the column that comes first in the table. A column whose
/// skewness is undefined (constant data) loses to any defined value.
///
/// # Errors
/// `NoPositiveFeature` if no column is strictly positive.
pub fn find_most_skewed_positive_feature(table: &Table) -> Result<String> {
    let skews = skewness_by_feature(table)?;

    let mut best: Option<&FeatureSkew> = None;
    for candidate in &skews {
        let score = candidate.skewness.abs();
        best = match best {
            None => Some(candidate),
            Some(current) => {
                let current_score = current.skewness.abs();
                if current_score.is_nan() && !score.is_nan() || score > current_score {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    best.map(|f| f.name.clone())
        .ok_or(AnalysisError::NoPositiveFeature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableBuilder;

    fn table() -> Table {
        TableBuilder::new()
            .column("mild", vec![1.0, 2.0, 3.0, 4.0, 6.0])
            .column("negative", vec![-1.0, 2.0, 3.0, 4.0, 50.0])
            .column("heavy", vec![1.0, 1.0, 1.0, 2.0, 30.0])
            .column("left", vec![1.0, 9.0, 10.0, 10.0, 10.0])
            .build()
            .unwrap()
    }

    #[test]
    fn positive_features_filters() {
        assert_eq!(positive_features(&table()), vec!["mild", "heavy", "left"]);
    }

    #[test]
    fn positive_features_excludes_missing_and_zero() {
        let table = TableBuilder::new()
            .column("nan", vec![1.0, f64::NAN])
            .column("zero", vec![0.0, 1.0])
            .column("ok", vec![0.5, 1.0])
            .build()
            .unwrap();
        assert_eq!(positive_features(&table), vec!["ok"]);
    }

    #[test]
    fn picks_largest_absolute_skew() {
        assert_eq!(find_most_skewed_positive_feature(&table()).unwrap(), "heavy");
    }

    #[test]
    fn negative_skew_counts_by_magnitude() {
        let table = TableBuilder::new()
            .column("right", vec![1.0, 2.0, 3.0, 4.0, 6.0])
            .column("left", vec![1.0, 9.0, 10.0, 10.0, 10.0])
            .build()
            .unwrap();
        assert_eq!(find_most_skewed_positive_feature(&table).unwrap(), "left");
    }

    #[test]
    fn ties_go_to_first_column() {
        let values = vec![1.0, 1.0, 2.0, 5.0];
        let table = TableBuilder::new()
            .column("first", values.clone())
            .column("second", values)
            .build()
            .unwrap();
        assert_eq!(find_most_skewed_positive_feature(&table).unwrap(), "first");
    }

    #[test]
    fn undefined_skew_loses() {
        let table = TableBuilder::new()
            .column("constant", vec![3.0, 3.0, 3.0])
            .column("varied", vec![1.0, 2.0, 3.0])
            .build()
            .unwrap();
        // symmetric column has skew 0, still beats NaN
        assert_eq!(find_most_skewed_positive_feature(&table).unwrap(), "varied");
    }

    #[test]
    fn no_positive_columns_fails() {
        let table = TableBuilder::new()
            .column("a", vec![-1.0, 2.0])
            .column("b", vec![0.0, 0.0])
            .build()
            .unwrap();
        assert_eq!(
            find_most_skewed_positive_feature(&table),
            Err(AnalysisError::NoPositiveFeature)
        );
    }

    #[test]
    fn empty_table_fails() {
        let table = TableBuilder::new().build().unwrap();
        assert_eq!(
            skewness_by_feature(&table),
            Err(AnalysisError::NoPositiveFeature)
        );
    }

    #[test]
    fn skewness_vector_in_table_order() {
        let skews = skewness_by_feature(&table()).unwrap();
        let names: Vec<&str> = skews.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["mild", "heavy", "left"]);
        assert!(skews[1].skewness > 0.0);
        assert!(skews[2].skewness < 0.0);
    }
}
