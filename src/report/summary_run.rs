use std::path::{Path, PathBuf};

use tracing::info;

use super::summary_figure;
use crate::error::Result;
use crate::render::render_figure;
use crate::summary::{
    SUMMARY_FILE_NAME, SummaryLayout, SummaryTable, collect_run_files, load_runs, summarize,
};
use crate::table::normalize_columns;

pub const PERFORMANCE_PLOT_NAME: &str = "performance_metrics.png";

#[derive(Debug, Clone)]
pub struct SummaryOutputs {
    pub summary: SummaryTable,
    pub csv: PathBuf,
    pub plot: Option<PathBuf>,
}

/// One summary row per `*.csv` run file of `dir`, in file-name order.
pub fn summarize_metrics_dir(dir: &Path, layout: &SummaryLayout) -> Result<SummaryTable> {
    let files = collect_run_files(dir)?;
    let mut tables = load_runs(&files)?;
    for table in &mut tables {
        table.require_columns(&layout.source_columns())?;
        normalize_columns(table, &layout.source_columns())?;
    }
    summarize(&tables, layout)
}

/// Summarizes `dir`, writes the summary CSV next to the runs and, when `plot` is set, the
/// performance figure.
pub fn run_summary(dir: &Path, layout: &SummaryLayout, plot: bool) -> Result<SummaryOutputs> {
    let summary = summarize_metrics_dir(dir, layout)?;

    let csv = dir.join(SUMMARY_FILE_NAME);
    summary.save(&csv)?;

    let plot = if plot {
        let path = dir.join(PERFORMANCE_PLOT_NAME);
        render_figure(&summary_figure(&summary, &path))?;
        info!(path = %path.display(), "performance plot written");
        Some(path)
    } else {
        None
    };

    Ok(SummaryOutputs { summary, csv, plot })
}
