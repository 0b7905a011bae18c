//! Per-run means of a metrics directory: `summary_metrics.csv` plus `performance_metrics.png`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vanet_report::logging;
use vanet_report::report::run_summary;
use vanet_report::summary::SummaryLayout;

#[derive(Debug, Parser)]
#[command(
    name = "analyze-results",
    about = "Summarize throughput, delay and packet loss over simulation runs"
)]
struct Args {
    /// Directory holding one CSV per simulation run
    #[arg(long, default_value = "results/metrics")]
    metrics_dir: PathBuf,

    /// Only write the summary CSV
    #[arg(long)]
    no_plot: bool,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run_summary(&args.metrics_dir, &SummaryLayout::default(), !args.no_plot) {
        Ok(out) => {
            println!("Summary metrics saved to '{}'.", out.csv.display());
            if let Some(plot) = out.plot {
                println!("Performance metrics plot saved to '{}'.", plot.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
