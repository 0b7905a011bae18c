//! SUMO mobility trace to ns-3 position CSV (`NodeId,Time,PosX,PosY`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vanet_report::logging;
use vanet_report::trace::convert_trace_file;

#[derive(Debug, Parser)]
#[command(
    name = "sumo-to-ns3",
    about = "Flatten a SUMO vehicle trace into one CSV row per position sample"
)]
struct Args {
    /// SUMO trace (XML)
    sumo_trace_file: PathBuf,
    /// Output CSV
    ns3_output_file: PathBuf,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match convert_trace_file(&args.sumo_trace_file, &args.ns3_output_file) {
        Ok(stats) => {
            println!(
                "wrote {} rows for {} vehicles to {}",
                stats.rows,
                stats.vehicles,
                args.ns3_output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
