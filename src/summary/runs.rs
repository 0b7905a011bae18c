use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::table::{MetricTable, load_table};

/// Name of the summary written back into a metrics directory.
pub const SUMMARY_FILE_NAME: &str = "summary_metrics.csv";

/// `*.csv` files of a metrics directory in file-name order.
///
/// A previously written summary is not a run and is left out.
pub fn collect_run_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ReportError::MissingFile {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path.extension().and_then(|e| e.to_str()) == Some("csv");
        let is_summary = path.file_name().and_then(|n| n.to_str()) == Some(SUMMARY_FILE_NAME);
        if path.is_file() && is_csv && !is_summary {
            files.push(path);
        }
    }
    files.sort();
    debug!(dir = %dir.display(), runs = files.len(), "collected run files");
    Ok(files)
}

/// Loads runs sequentially, in the order given.
pub fn load_runs(files: &[PathBuf]) -> Result<Vec<MetricTable>> {
    files.iter().map(|f| load_table(f)).collect()
}
