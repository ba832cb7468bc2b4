//! Benchmark runner: multiplies every configured matrix pair on disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use matbench::runner::{BenchConfig, CaseOutcome, DEFAULT_SIZES, run_benchmark};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "matbench", version, about = "Time naive f32 matrix multiplication over files")]
struct Cli {
    /// Directory holding Matrix_1/, Matrix_2/ and Output/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Size categories to run
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    sizes: Vec<usize>,

    /// Timing file, relative to --root
    #[arg(long, default_value = "times.txt")]
    times: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("matbench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BenchConfig {
        root: cli.root,
        sizes: cli.sizes,
        times_file: cli.times,
    };

    match run_benchmark(&config) {
        Ok(outcomes) => {
            print_summary_table(&outcomes);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn print_summary_table(outcomes: &[CaseOutcome]) {
    println!("\n{}", "=".repeat(48));
    println!("SUMMARY");
    println!("{}", "=".repeat(48));
    println!("{:<12} {:>16} {:>16}", "Size", "Time (µs)", "GFLOPS");
    println!("{}", "-".repeat(48));

    for outcome in outcomes {
        let size = format!("{0}×{0}", outcome.case.size);
        match &outcome.result {
            Ok(report) => println!(
                "{:<12} {:>16} {:>16.3}",
                size,
                report.micros(),
                report.gflops()
            ),
            Err(_) => println!("{:<12} {:>16} {:>16}", size, outcome.timing(), "failed"),
        }
    }

    println!("{}", "=".repeat(48));
}
