use super::{Cell, MetricTable};
use crate::error::{ReportError, Result};

/// Turns a percentage column serialized as text (`"87.5%"`) into numbers (`87.5`).
///
/// A column with no textual cell is left untouched, so running this twice is a no-op. When any
/// cell is textual, every textual cell has one trailing `%` stripped and is parsed; a cell that
/// still does not parse is an [`ReportError::InvalidValue`].
pub fn normalize_column(table: &mut MetricTable, column: &str) -> Result<()> {
    let textual = table
        .cells(column)?
        .any(|c| matches!(c, Cell::Text(_)));
    if !textual {
        return Ok(());
    }

    // Parse everything first; the table only changes once every cell is known to be valid.
    let parsed = table
        .cells(column)?
        .enumerate()
        .map(|(row, cell)| match cell {
            Cell::Number(v) => Ok(*v),
            Cell::Text(raw) => parse_percent(raw).ok_or_else(|| ReportError::InvalidValue {
                path: table.source().to_path_buf(),
                column: column.to_string(),
                row,
                value: raw.clone(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    for (cell, value) in table.cells_mut(column)?.zip(parsed) {
        *cell = Cell::Number(value);
    }
    Ok(())
}

fn parse_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    stripped.parse().ok()
}

pub fn normalize_columns<S: AsRef<str>>(table: &mut MetricTable, columns: &[S]) -> Result<()> {
    for c in columns {
        normalize_column(table, c.as_ref())?;
    }
    Ok(())
}
