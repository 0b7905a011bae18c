//! AODV vs DSDV per trial: one chart per metric and a stacked figure of all of them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use vanet_report::config::{InputSpec, ReportConfig};
use vanet_report::report::{load_study, render_all, trial_figures};
use vanet_report::{Result, logging};

#[derive(Debug, Parser)]
#[command(
    name = "trial-comparison",
    about = "Compare routing protocols trial by trial (throughput on a log axis)"
)]
struct Args {
    /// JSON report config; defaults to aodv.txt and dsdv.txt
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input file, protocol taken from the file stem (repeatable, replaces configured inputs)
    #[arg(long = "input")]
    inputs: Vec<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn run(args: Args) -> Result<Vec<PathBuf>> {
    let mut cfg = match &args.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::trial_study(),
    };
    cfg = cfg.with_inputs(args.inputs.into_iter().map(InputSpec::from_path).collect());
    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir;
    }

    let tables = load_study(&cfg)?;
    // No interactive display: every chart goes to disk.
    render_all(&trial_figures(&cfg, &tables)?)
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(written) => {
            info!(figures = written.len(), "done");
            for path in &written {
                println!("{}", path.display());
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
