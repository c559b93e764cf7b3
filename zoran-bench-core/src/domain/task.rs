use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkTask {
    pub name: String,
}

impl BenchmarkTask {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// Top-level shape of a benchmark tasks file.
///
/// A file without a `tasks` field deserializes to an empty task list rather
/// than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskManifest {
    #[serde(default)]
    pub tasks: Vec<BenchmarkTask>,
}
