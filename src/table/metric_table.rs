use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// One parsed field of a result file.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Numbers stay numbers; everything else is kept verbatim (trimmed).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    source: PathBuf,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl MetricTable {
    /// Every row must have exactly `columns.len()` cells.
    pub fn new(source: impl Into<PathBuf>, columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            source: source.into(),
            columns,
            rows,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| ReportError::Schema {
                path: self.source.clone(),
                column: column.to_string(),
            })
    }

    /// Fails fast on the first absent column.
    pub fn require_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<()> {
        for c in columns {
            self.column_index(c.as_ref())?;
        }
        Ok(())
    }

    pub fn cells(&self, column: &str) -> Result<impl Iterator<Item = &Cell> + '_> {
        let idx = self.column_index(column)?;
        Ok(self.rows.iter().map(move |r| &r[idx]))
    }

    pub(crate) fn cells_mut(&mut self, column: &str) -> Result<impl Iterator<Item = &mut Cell> + '_> {
        let idx = self.column_index(column)?;
        Ok(self.rows.iter_mut().map(move |r| &mut r[idx]))
    }

    /// All values of a column as numbers; a textual cell is an error.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        self.cells(column)?
            .enumerate()
            .map(|(row, cell)| {
                cell.as_f64().ok_or_else(|| ReportError::NonNumeric {
                    path: self.source.clone(),
                    column: column.to_string(),
                    row,
                })
            })
            .collect()
    }

    /// Arithmetic mean of a numeric column. Zero rows is an error, never NaN.
    pub fn mean(&self, column: &str) -> Result<f64> {
        let values = self.numeric_column(column)?;
        if values.is_empty() {
            return Err(ReportError::EmptyTable {
                path: self.source.clone(),
            });
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// `(x, y)` pairs in row order.
    pub fn points(&self, x_column: &str, y_column: &str) -> Result<Vec<(f64, f64)>> {
        let xs = self.numeric_column(x_column)?;
        let ys = self.numeric_column(y_column)?;
        Ok(xs.into_iter().zip(ys).collect())
    }

    /// Stable sort of all rows by a numeric column.
    pub fn sort_by_column(&mut self, column: &str) -> Result<()> {
        let idx = self.column_index(column)?;
        // Validate up front so the sort comparator never sees text.
        self.numeric_column(column)?;
        self.rows.sort_by(|a, b| {
            let a = a[idx].as_f64().unwrap_or(f64::NAN);
            let b = b[idx].as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        });
        Ok(())
    }
}
