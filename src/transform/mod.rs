//! Data transformations for numeric columns.
//!
//! Provides the positivity shift and the Box-Cox power transform.
//!
//! # Example
//!
//! ```
//! use skew_boxcox::transform::{boxcox_auto, shift_series, DEFAULT_SHIFT_EPSILON};
//!
//! let series = vec![-1.0, 0.0, 0.5, 1.0, 4.0];
//!
//! // Move the minimum to a small positive epsilon
//! let shifted = shift_series(&series, DEFAULT_SHIFT_EPSILON);
//!
//! // Box-Cox transformation with maximum-likelihood lambda
//! let bc = boxcox_auto(&shifted.data).unwrap();
//! assert_eq!(bc.data.len(), series.len());
//! ```

pub mod boxcox;
pub mod shift;

// Re-export from boxcox
pub use boxcox::{
    apply_boxcox, boxcox, boxcox_auto, boxcox_lambda, boxcox_lambda_with, boxcox_llf, inv_boxcox,
    is_boxcox_suitable, BoxCoxResult,
};

// Re-export from shift
pub use shift::{shift_series, shift_to_positive, ShiftResult, DEFAULT_SHIFT_EPSILON};
