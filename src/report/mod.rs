//! The shared reporting pipeline: load → normalize → (sort) → describe figures → render.
//!
//! Figure descriptions are built without touching the filesystem so callers can inspect them;
//! [`render_all`] writes them out in order.

mod figures;
mod study;
mod summary_run;

pub use figures::{comparison_figures, protocol_figures, summary_figure, trial_figures};
pub use study::{ProtocolTable, load_study};
pub use summary_run::{PERFORMANCE_PLOT_NAME, SummaryOutputs, run_summary, summarize_metrics_dir};

use std::path::PathBuf;

use crate::error::Result;
use crate::render::{Figure, plan_figure, render_figure};

/// Renders sequentially and returns the written paths in the same order.
///
/// Every chart of every figure is planned first, so a rejected chart anywhere in the batch
/// leaves no file behind.
pub fn render_all(figures: &[Figure]) -> Result<Vec<PathBuf>> {
    for figure in figures {
        plan_figure(figure)?;
    }

    let mut written = Vec::with_capacity(figures.len());
    for figure in figures {
        render_figure(figure)?;
        written.push(figure.path.clone());
    }
    Ok(written)
}
