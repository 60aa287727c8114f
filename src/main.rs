//! Command-line driver: normalize the most skewed feature of a dataset.
//!
//! Usage:
//! ```text
//! skew-boxcox                      # built-in diabetes dataset
//! skew-boxcox --input data.csv --bins 30 --no-plot
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use skew_boxcox::core::Table;
use skew_boxcox::datasets::load_diabetes;
use skew_boxcox::pipeline::{select_feature, PipelineConfig};
use skew_boxcox::report::feature_line;
use skew_boxcox::transform::DEFAULT_SHIFT_EPSILON;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Box-Cox normalization of the most skewed feature")]
struct Args {
    /// CSV file with a header row; defaults to the built-in diabetes dataset
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Histogram bins per panel
    #[arg(short, long, default_value = "50")]
    bins: usize,

    /// Bar rows per histogram panel
    #[arg(long, default_value = "16")]
    height: usize,

    /// Offset added after moving each column's minimum to zero
    #[arg(long, default_value_t = DEFAULT_SHIFT_EPSILON)]
    epsilon: f64,

    /// Print only the summary lines
    #[arg(long)]
    no_plot: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = match &args.input {
        Some(path) => Table::from_csv_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => load_diabetes().context("failed to load the built-in diabetes dataset")?,
    };

    let config = PipelineConfig {
        epsilon: args.epsilon,
        bins: args.bins,
        chart_height: args.height,
        show_plot: !args.no_plot,
    };
    let selection = select_feature(&table, &config).context("feature selection failed")?;
    println!("{}", feature_line(&selection.feature));

    let outcome = selection
        .transform(&config)
        .with_context(|| format!("Box-Cox failed for feature '{}'", selection.feature))?;
    println!("{}", outcome.report.fit_lines());
    if let Some(figure) = outcome.figure {
        println!();
        print!("{figure}");
    }
    Ok(())
}
