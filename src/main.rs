use std::process::ExitCode;

use bench_graphs::{Cli, ReportError};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Diagnostics only; the progress lines below are plain stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Cli::parse().into_config();

    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║   📊  GO ↔ JAVA BENCHMARK GRAPHS                 ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();
    println!("📊 Generating benchmark graphs from: {}\n", config.results_dir.display());

    let summary = match bench_graphs::run(&config) {
        Ok(summary) => summary,
        Err(ReportError::NoResults { .. }) => {
            println!("\n❌ No benchmark results found. Run benchmarks first.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("\n❌ {:#}", anyhow::Error::new(e));
            return ExitCode::FAILURE;
        }
    };

    let (width, height) = (config.image.width, config.image.height);
    println!("\n✅ All files saved to: {}/", config.results_dir.display());
    println!("   - {} HTML interactive charts", summary.html_count());
    println!("   - {} PNG images ({width}x{height})", summary.png_count());
    println!("   - {} summary", summary.report.display());
    println!("\n   Open RESULTS.md in GitHub to view the benchmark report.\n");

    ExitCode::SUCCESS
}
