//! Built-in reference datasets.
//!
//! # Diabetes data
//!
//! | Instances | Attributes | Missing values |
//! |-|-|-|
//! | 442 | 10 | No |
//!
//! Baseline measurements of 442 diabetes patients, collected by Efron,
//! Hastie, Johnstone and Tibshirani for "Least Angle Regression" (Annals of
//! Statistics, 2004). Each column is mean centered and scaled so its sum of
//! squares is 1, which leaves every column with negative values.
//!
//! | Column | Meaning |
//! |-|-|
//! | `age` | age in years |
//! | `sex` | sex |
//! | `bmi` | body mass index |
//! | `bp` | average blood pressure |
//! | `s1` .. `s6` | six blood serum measurements |
//!
//! The disease-progression target is not included.

use crate::core::Table;
use crate::error::Result;

const DIABETES_CSV: &str = include_str!("../../data/diabetes.csv");

/// Number of rows in the diabetes dataset.
pub const DIABETES_ROWS: usize = 442;

/// Column names of the diabetes dataset, in order.
pub const DIABETES_FEATURES: [&str; 10] = [
    "age", "sex", "bmi", "bp", "s1", "s2", "s3", "s4", "s5", "s6",
];

/// Load the diabetes dataset as a table.
pub fn load_diabetes() -> Result<Table> {
    Table::from_csv_str(DIABETES_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diabetes_shape() {
        let table = load_diabetes().unwrap();
        assert_eq!(table.n_rows(), DIABETES_ROWS);
        assert_eq!(table.n_cols(), DIABETES_FEATURES.len());
        assert_eq!(table.names(), &DIABETES_FEATURES.map(String::from)[..]);
        assert!(!table.has_missing_values());
    }

    #[test]
    fn diabetes_first_row() {
        let table = load_diabetes().unwrap();
        assert!((table.column("age").unwrap()[0] - 0.038_075_9).abs() < 1e-6);
        assert!((table.column("s6").unwrap()[0] + 0.017_646_1).abs() < 1e-6);
    }

    #[test]
    fn diabetes_columns_are_centered() {
        let table = load_diabetes().unwrap();
        for (name, values) in table.iter() {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            assert!(mean.abs() < 1e-6, "column {name} has mean {mean}");
            assert!(values.iter().any(|&x| x < 0.0));
        }
    }
}
