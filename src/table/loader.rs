use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use super::{Cell, MetricTable};
use crate::error::{ReportError, Result};

/// Loads a comma-separated result file with a header row.
pub fn load_table(path: &Path) -> Result<MetricTable> {
    load_table_with(path, b',')
}

/// Loads a delimited result file with a header row.
///
/// The file must exist ([`ReportError::MissingFile`]) and every row must have as many fields as
/// the header; a short or long row aborts the whole load.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_table_with(path: &Path, delimiter: u8) -> Result<MetricTable> {
    if !path.exists() {
        return Err(ReportError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let columns = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::parse).collect::<Vec<_>>());
    }

    debug!(columns = columns.len(), rows = rows.len(), "loaded table");
    Ok(MetricTable::new(path, columns, rows))
}
