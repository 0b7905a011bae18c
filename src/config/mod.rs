//! Report configuration.
//!
//! Replaces the hard-coded file lists of the individual reporting tools with one explicit list of
//! `(input path, protocol)` pairs and the metrics to draw from them.

mod protocol;
mod report_config;

pub use protocol::Protocol;
pub use report_config::{InputSpec, MetricSpec, MissingPolicy, ReportConfig};
