//! Per-run aggregation.
//!
//! Each input table is one simulation run; the summary has one row per run holding the mean of
//! each tracked metric, with run indices assigned 1..=K in input order.

mod aggregate;
mod runs;

pub use aggregate::{SummaryColumn, SummaryLayout, SummaryRow, SummaryTable, summarize};
pub use runs::{SUMMARY_FILE_NAME, collect_run_files, load_runs};
