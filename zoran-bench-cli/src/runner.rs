//! Placeholder benchmark execution

use zoran_bench_core::{BenchmarkResult, BenchmarkTask, MetricCalculator, Result};
use zoran_bench_metrics::{MetricInput, PlaceholderCalculator};

/// Score every task for both subjects, one result per task in input order.
pub fn run_benchmarks(tasks: &[BenchmarkTask]) -> Result<Vec<BenchmarkResult>> {
    tracing::info!("Scoring {} task(s)", tasks.len());

    let calculator = PlaceholderCalculator::new();

    tasks
        .iter()
        .map(|task| {
            let output = calculator.calculate(MetricInput {
                task_name: task.name.clone(),
            })?;

            Ok(BenchmarkResult::new(
                task.name.clone(),
                output.metric,
                output.llm_score,
                output.zoran_score,
            ))
        })
        .collect()
}
