//! Error taxonomy shared by every stage of the reporting pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Input path does not exist.
    #[error("missing input: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Expected column is absent from a table header.
    #[error("{}: missing column `{column}`", path.display())]
    Schema { path: PathBuf, column: String },

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("trace parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structural problem in a trace that the streaming reader does not flag itself.
    #[error("malformed trace: {reason}")]
    MalformedTrace { reason: String },

    #[error("{}: column `{column}` row {row}: cannot parse `{value}` as a number", path.display())]
    InvalidValue {
        path: PathBuf,
        column: String,
        row: usize,
        value: String,
    },

    /// A textual cell reached a numeric accessor (column was not normalized).
    #[error("{}: column `{column}` row {row} is not numeric", path.display())]
    NonNumeric {
        path: PathBuf,
        column: String,
        row: usize,
    },

    #[error("nothing to summarize: {what}")]
    EmptyInput { what: String },

    /// Mean over zero rows.
    #[error("{}: table has no rows", path.display())]
    EmptyTable { path: PathBuf },

    #[error("series `{series}` has non-positive value {y} at x={x}; log scale needs y > 0")]
    NonPositiveLogValue { series: String, x: f64, y: f64 },

    /// Delimiters must be one ASCII character.
    #[error("delimiter `{delimiter}` is not a single ASCII character")]
    InvalidDelimiter { delimiter: char },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plot rendering failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
