//! Equal-width histogram binning.

use crate::error::{AnalysisError, Result};
use crate::features::basic::{maximum, minimum};

/// Counts of values falling into equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, `bins + 1` ascending values.
    edges: Vec<f64>,
    /// Number of values per bin.
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite values of `series` into `bins` equal-width intervals
    /// spanning their range.
    ///
    /// Every bin is half-open `[lo, hi)` except the last, which also holds
    /// the maximum. Constant data is binned over `[v - 0.5, v + 0.5]`.
    pub fn new(series: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(AnalysisError::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        let (mut lo, mut hi) = (minimum(series), maximum(series));
        if lo.is_nan() {
            return Err(AnalysisError::EmptyData);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0; bins];
        for &x in series.iter().filter(|x| x.is_finite()) {
            let mut index = (((x - lo) / (hi - lo)) * bins as f64) as usize;
            index = index.min(bins - 1);
            // Correct rounding at bin boundaries against the stored edges
            if x < edges[index] {
                index -= 1;
            } else if index + 1 < bins && x >= edges[index + 1] {
                index += 1;
            }
            counts[index] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Lower and upper edge of the whole histogram.
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_value_once() {
        let series: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
        let hist = Histogram::new(&series, 50).unwrap();

        assert_eq!(hist.bins(), 50);
        assert_eq!(hist.edges().len(), 51);
        assert_eq!(hist.total(), 100);
    }

    #[test]
    fn last_bin_is_closed() {
        let hist = Histogram::new(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(hist.counts(), &[1, 1, 1, 2]);
        assert_eq!(hist.range(), (0.0, 4.0));
    }

    #[test]
    fn left_edges_are_inclusive() {
        let hist = Histogram::new(&[0.0, 0.5, 1.0, 1.5, 2.0], 2).unwrap();
        assert_eq!(hist.counts(), &[2, 3]);
    }

    #[test]
    fn missing_values_are_skipped() {
        let hist = Histogram::new(&[1.0, f64::NAN, 2.0, f64::INFINITY], 2).unwrap();
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn constant_data_gets_unit_range() {
        let hist = Histogram::new(&[3.0, 3.0, 3.0], 10).unwrap();
        assert_eq!(hist.range(), (2.5, 3.5));
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            Histogram::new(&[1.0], 0),
            Err(AnalysisError::InvalidParameter(_))
        ));
        assert_eq!(
            Histogram::new(&[f64::NAN], 5),
            Err(AnalysisError::EmptyData)
        );
        assert_eq!(Histogram::new(&[], 5), Err(AnalysisError::EmptyData));
    }
}
