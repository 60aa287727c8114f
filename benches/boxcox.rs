//! Benchmarks for Box-Cox fitting and the full pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skew_boxcox::datasets::load_diabetes;
use skew_boxcox::pipeline::{run_pipeline, PipelineConfig};
use skew_boxcox::ranking::find_most_skewed_positive_feature;
use skew_boxcox::transform::{boxcox_lambda, shift_to_positive, DEFAULT_SHIFT_EPSILON};

fn generate_skewed(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (3.0 * (i as f64 + 0.5) / n as f64).exp() + 0.1 * (i as f64).sin())
        .collect()
}

fn bench_lambda(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxcox_lambda");

    for size in [100, 1_000, 10_000].iter() {
        let series = generate_skewed(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| boxcox_lambda(black_box(&series)))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let table = load_diabetes().unwrap();
    let shifted = shift_to_positive(&table, DEFAULT_SHIFT_EPSILON);

    c.bench_function("rank_diabetes", |b| {
        b.iter(|| find_most_skewed_positive_feature(black_box(&shifted)))
    });

    let config = PipelineConfig {
        show_plot: false,
        ..Default::default()
    };
    c.bench_function("pipeline_diabetes", |b| {
        b.iter(|| run_pipeline(black_box(&table), &config))
    });

    let config = PipelineConfig::default();
    c.bench_function("pipeline_diabetes_with_figure", |b| {
        b.iter(|| run_pipeline(black_box(&table), &config))
    });
}

criterion_group!(benches, bench_lambda, bench_pipeline);
criterion_main!(benches);
