//! Benchmark task loading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use zoran_bench_core::{BenchmarkTask, Result, TaskManifest};

/// Read benchmark tasks from a JSON manifest file.
///
/// A manifest without a `tasks` field yields an empty list; a missing or
/// malformed file is an error for the caller.
pub fn load_tasks(path: &Path) -> Result<Vec<BenchmarkTask>> {
    tracing::info!("Loading benchmark tasks from {}", path.display());

    let file = File::open(path)?;
    let manifest: TaskManifest = serde_json::from_reader(BufReader::new(file))?;

    tracing::info!("Loaded {} task(s)", manifest.tasks.len());

    Ok(manifest.tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn manifest_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_tasks_from_file() {
        let file = manifest_file(r#"{"tasks": [{"name": "Write a poem"}]}"#);

        let tasks = load_tasks(file.path()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Write a poem");
    }

    #[test]
    fn test_load_tolerates_missing_tasks_field() {
        let file = manifest_file(r#"{"version": 1}"#);

        let tasks = load_tasks(file.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_tasks(&dir.path().join("no_such_file.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_fails_on_invalid_json() {
        let file = manifest_file("not json at all");
        assert!(load_tasks(file.path()).is_err());
    }
}
