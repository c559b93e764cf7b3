use zoran_bench_core::{MetricCalculator, Result};

use super::{MetricInput, MetricOutput};

/// Label reported while no real scoring model is wired in.
pub const PLACEHOLDER_METRIC: &str = "placeholder_metric";

const LENGTH_SCALE: f64 = 20.0;
const ZORAN_OFFSET: usize = 5;

/// Deterministic stand-in for real model evaluation.
///
/// Scores both subjects from the task name length: the baseline LLM gets
/// `len / 20` and Zoran IA gets `(len + 5) / 20`, each capped at 1.0 and
/// rounded to two decimals. Name length counts Unicode scalar values.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderCalculator;

impl PlaceholderCalculator {
    pub fn new() -> Self {
        Self
    }

    fn length_score(name_len: usize, offset: usize) -> f64 {
        round2(((name_len + offset) as f64 / LENGTH_SCALE).min(1.0))
    }
}

impl MetricCalculator for PlaceholderCalculator {
    type Input = MetricInput;
    type Output = MetricOutput;

    fn calculate(&self, input: Self::Input) -> Result<Self::Output> {
        let name_len = input.task_name.chars().count();

        Ok(MetricOutput {
            metric: PLACEHOLDER_METRIC.to_string(),
            llm_score: Self::length_score(name_len, 0),
            zoran_score: Self::length_score(name_len, ZORAN_OFFSET),
        })
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
