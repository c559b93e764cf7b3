use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod loader;
mod runner;
mod writer;

use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zoran_bench_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let tasks = loader::load_tasks(&cli.tasks)?;
    let results = runner::run_benchmarks(&tasks)?;
    writer::write_results(&cli.output, &results)?;

    println!(
        "{} Benchmark complete. Results saved to {}",
        "✓".green(),
        cli.output.display()
    );

    Ok(())
}
