//! Per-flow charts of AODV/OLSR/DSDV results: one set per protocol and one comparison per metric.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use vanet_report::config::{InputSpec, ReportConfig};
use vanet_report::report::{comparison_figures, load_study, protocol_figures, render_all};
use vanet_report::{Result, logging};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    PerProtocol,
    Comparison,
    All,
}

#[derive(Debug, Parser)]
#[command(
    name = "flow-plots",
    about = "Plot PDR, delay and throughput per flow for each routing protocol"
)]
struct Args {
    /// JSON report config; defaults to aodv.csv, olsr.csv and dsdv.csv
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input CSV, protocol taken from the file stem (repeatable, replaces configured inputs)
    #[arg(long = "input")]
    inputs: Vec<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::All)]
    mode: Mode,
}

fn run(args: Args) -> Result<Vec<PathBuf>> {
    let mut cfg = match &args.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::flow_study(),
    };
    cfg = cfg.with_inputs(args.inputs.into_iter().map(InputSpec::from_path).collect());
    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir;
    }

    let tables = load_study(&cfg)?;
    let mut figures = Vec::new();
    if matches!(args.mode, Mode::PerProtocol | Mode::All) {
        figures.extend(protocol_figures(&cfg, &tables)?);
    }
    if matches!(args.mode, Mode::Comparison | Mode::All) {
        figures.extend(comparison_figures(&cfg, &tables)?);
    }
    render_all(&figures)
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(written) => {
            info!(figures = written.len(), "done");
            println!("✅ {} plots saved.", written.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
