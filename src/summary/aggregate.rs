use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, Result};
use crate::table::MetricTable;

/// One tracked metric: where it is read from and what it is called in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryColumn {
    pub source: String,
    pub header: String,
}

impl SummaryColumn {
    pub fn new(source: &str, header: &str) -> Self {
        Self {
            source: source.to_string(),
            header: header.to_string(),
        }
    }
}

/// Column layout of a summary table. Column order is fixed by `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLayout {
    pub run_header: String,
    pub columns: Vec<SummaryColumn>,
}

impl Default for SummaryLayout {
    /// Throughput, end-to-end delay and packet loss of a metrics directory.
    fn default() -> Self {
        Self {
            run_header: "Simulation Run".to_string(),
            columns: vec![
                SummaryColumn::new("Throughput", "Throughput (Mbps)"),
                SummaryColumn::new("EndToEndDelay", "End-to-End Delay (ms)"),
                SummaryColumn::new("PacketLossRate", "Packet Loss Rate (%)"),
            ],
        }
    }
}

impl SummaryLayout {
    pub fn source_columns(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.source.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// 1-based, in input order.
    pub run: usize,
    /// One mean per layout column, same order.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub layout: SummaryLayout,
    pub rows: Vec<SummaryRow>,
}

/// Means every layout column of every table.
///
/// Zero tables is [`ReportError::EmptyInput`]; a table with zero rows is
/// [`ReportError::EmptyTable`]; a table lacking a column is [`ReportError::Schema`].
pub fn summarize(tables: &[MetricTable], layout: &SummaryLayout) -> Result<SummaryTable> {
    if tables.is_empty() {
        return Err(ReportError::EmptyInput {
            what: "no simulation runs were given".to_string(),
        });
    }

    let mut rows = Vec::with_capacity(tables.len());
    for (i, table) in tables.iter().enumerate() {
        table.require_columns(&layout.source_columns())?;
        let values = layout
            .columns
            .iter()
            .map(|c| table.mean(&c.source))
            .collect::<Result<Vec<_>>>()?;
        rows.push(SummaryRow { run: i + 1, values });
    }

    Ok(SummaryTable {
        layout: layout.clone(),
        rows,
    })
}

impl SummaryTable {
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once(self.layout.run_header.as_str())
            .chain(self.layout.columns.iter().map(|c| c.header.as_str()))
            .collect()
    }

    /// `(run, value)` pairs of one layout column.
    pub fn series(&self, column: usize) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.values.get(column).map(|v| (r.run as f64, *v)))
            .collect()
    }

    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(self.headers())?;
        for row in &self.rows {
            let mut record = Vec::with_capacity(row.values.len() + 1);
            record.push(row.run.to_string());
            record.extend(row.values.iter().map(|v| format_value(*v)));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)?;
        info!(path = %path.display(), runs = self.rows.len(), "summary written");
        Ok(())
    }
}

/// Whole numbers keep one decimal (`490.0`), everything else uses the shortest exact form.
fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
