//! Tabular simulation results.
//!
//! A [`MetricTable`] holds one result file: a header row plus an ordered list of rows whose cells
//! are either numbers or raw text. Loading never coerces text; the normalizer does that per column.

mod loader;
mod metric_table;
mod normalize;

pub use loader::{load_table, load_table_with};
pub use metric_table::{Cell, MetricTable};
pub use normalize::{normalize_column, normalize_columns};
