//! Positivity shift: translate data so every value is strictly positive.
//!
//! Box-Cox is only defined for x > 0, so columns are moved so their
//! minimum lands on a small positive epsilon.

use crate::core::Table;
use crate::features::basic::minimum;
use tracing::debug;

/// Offset added after subtracting the minimum, keeping values off zero.
pub const DEFAULT_SHIFT_EPSILON: f64 = 1e-6;

/// Result of a positivity shift, containing the parameters for inverse transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftResult {
    /// Shifted data
    pub data: Vec<f64>,
    /// Minimum of the finite input values (NaN if there were none)
    pub min: f64,
    /// Epsilon added after subtracting the minimum
    pub epsilon: f64,
}

impl ShiftResult {
    /// Inverse transform to recover the original values.
    pub fn inverse(&self) -> Vec<f64> {
        self.data
            .iter()
            .map(|&x| x - self.epsilon + self.min)
            .collect()
    }
}

/// Shift a series so its minimum becomes `epsilon`.
///
/// x_shifted = x - min(x) + epsilon
///
/// Missing values stay missing. A series without finite values is returned
/// unchanged.
pub fn shift_series(series: &[f64], epsilon: f64) -> ShiftResult {
    let min = minimum(series);
    let data = if min.is_nan() {
        series.to_vec()
    } else {
        series.iter().map(|&x| x - min + epsilon).collect()
    };
    ShiftResult { data, min, epsilon }
}

/// Shift every column of a table to be strictly positive.
///
/// Returns a new table of the same shape; the input is not modified.
pub fn shift_to_positive(table: &Table, epsilon: f64) -> Table {
    table.map_columns(|name, values| {
        let shifted = shift_series(values, epsilon);
        debug!(column = name, min = shifted.min, "shifted column");
        shifted.data
    })
}
