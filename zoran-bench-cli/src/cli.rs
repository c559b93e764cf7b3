//! Command-line surface

use clap::Parser;
use std::path::PathBuf;

/// Run Zoran IA vs baseline LLM benchmarks.
#[derive(Debug, Parser)]
#[command(name = "zoran-bench", version, about)]
pub struct Cli {
    /// Path to the JSON file containing benchmark tasks
    #[arg(long, default_value = "benchmarks/creative_tasks.json")]
    pub tasks: PathBuf,

    /// Path to the CSV file where results will be written
    #[arg(long, default_value = "results/zoran_vs_gpt.csv")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cli = Cli::parse_from(["zoran-bench"]);

        assert_eq!(cli.tasks, PathBuf::from("benchmarks/creative_tasks.json"));
        assert_eq!(cli.output, PathBuf::from("results/zoran_vs_gpt.csv"));
    }

    #[test]
    fn test_path_overrides() {
        let cli = Cli::parse_from(["zoran-bench", "--tasks", "in.json", "--output", "out.csv"]);

        assert_eq!(cli.tasks, PathBuf::from("in.json"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
    }
}
