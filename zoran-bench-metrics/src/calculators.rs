pub mod placeholder;

pub use placeholder::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricInput {
    pub task_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOutput {
    pub metric: String,
    pub llm_score: f64,
    pub zoran_score: f64,
}
