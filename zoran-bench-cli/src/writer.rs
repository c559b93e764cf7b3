//! CSV result writing

use std::path::Path;

use zoran_bench_core::{BenchmarkResult, Result};

const HEADER: [&str; 4] = ["task", "metric", "llm_score", "zoran_score"];

/// Write results to a CSV file: fixed header record, then one row per result.
///
/// The header is written even when there are no results. Creates or
/// overwrites the file; the parent directory must already exist.
pub fn write_results(path: &Path, results: &[BenchmarkResult]) -> Result<()> {
    tracing::info!("Writing {} result(s) to {}", results.len(), path.display());

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;

    Ok(())
}
