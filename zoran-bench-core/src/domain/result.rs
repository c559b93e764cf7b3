use serde::{Deserialize, Serialize};

/// One scored row of benchmark output.
///
/// Field order matches the CSV column order: task, metric, llm_score,
/// zoran_score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub task: String,
    pub metric: String,
    pub llm_score: f64,
    pub zoran_score: f64,
}

impl BenchmarkResult {
    pub fn new(task: String, metric: String, llm_score: f64, zoran_score: f64) -> Self {
        Self {
            task,
            metric,
            llm_score,
            zoran_score,
        }
    }
}
