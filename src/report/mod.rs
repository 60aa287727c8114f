//! Reporting: summary lines and before/after histogram figures.

pub mod figure;
pub mod histogram;
pub mod summary;

pub use figure::{Figure, Panel};
pub use histogram::Histogram;
pub use summary::{feature_line, SkewReport};

use crate::error::Result;

/// Title of the before/after comparison figure.
pub const FIGURE_TITLE: &str = "Effect of Box-Cox Transformation";

/// Render side-by-side histograms of a feature before and after Box-Cox.
pub fn plot_before_after(
    original: &[f64],
    transformed: &[f64],
    feature: &str,
    bins: usize,
    height: usize,
) -> Result<String> {
    let figure = Figure::new(FIGURE_TITLE)
        .with_panel(Panel::new(
            format!("Before Box-Cox ({feature})"),
            Histogram::new(original, bins)?,
        ))
        .with_panel(Panel::new(
            format!("After Box-Cox ({feature})"),
            Histogram::new(transformed, bins)?,
        ));
    Ok(figure.render(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn before_after_figure() {
        let original: Vec<f64> = (1..=200).map(|i| (i as f64 / 40.0).exp()).collect();
        let transformed: Vec<f64> = original.iter().map(|x| x.ln()).collect();
        let text = plot_before_after(&original, &transformed, "s3", 50, 10).unwrap();

        assert_eq!(text.lines().next().unwrap().trim(), FIGURE_TITLE);
        assert!(text.contains("Before Box-Cox (s3)"));
        assert!(text.contains("After Box-Cox (s3)"));
        // title, blank, panel title, bar rows, axis, range labels
        assert_eq!(text.lines().count(), 2 + 1 + 10 + 2);
    }

    #[test]
    fn before_after_rejects_zero_bins() {
        assert!(plot_before_after(&[1.0], &[1.0], "x", 0, 10).is_err());
    }
}
