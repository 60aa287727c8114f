//! Descriptive statistics for numeric columns.
//!
//! # Example
//!
//! ```
//! use skew_boxcox::features::{basic, distribution};
//!
//! let series = vec![1.0, 1.0, 2.0, 3.0, 8.0];
//!
//! let m = basic::mean(&series);
//! let sk = distribution::skewness(&series);
//! assert!(m > 0.0 && sk > 0.0);
//! ```

pub mod basic;
pub mod distribution;

pub use basic::{finite_values, maximum, mean, minimum, standard_deviation, variance};
pub use distribution::{kurtosis, skew_test, skewness, skewness_adjusted, SkewTest};
