//! # skew-boxcox
//!
//! Skew normalization for tabular numeric data.
//!
//! Shifts every column to be strictly positive, picks the column with the
//! largest absolute skewness, fits a maximum-likelihood Box-Cox transform to
//! it, and reports the effect with summary statistics and before/after
//! histograms.
//!
//! # Example
//!
//! ```
//! use skew_boxcox::prelude::*;
//!
//! let table = load_diabetes().unwrap();
//! let outcome = run_pipeline(&table, &PipelineConfig::default()).unwrap();
//! assert_eq!(outcome.report.feature, "s3");
//! ```

pub mod core;
pub mod datasets;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod transform;
pub mod utils;

pub use error::{AnalysisError, Result};

pub mod prelude {
    pub use crate::core::{Table, TableBuilder};
    pub use crate::datasets::load_diabetes;
    pub use crate::error::{AnalysisError, Result};
    pub use crate::pipeline::{
        run_pipeline, select_feature, FeatureSelection, PipelineConfig, PipelineOutcome,
    };
    pub use crate::ranking::find_most_skewed_positive_feature;
    pub use crate::report::SkewReport;
    pub use crate::transform::{apply_boxcox, shift_to_positive, BoxCoxResult};
}
