use tracing::{info, warn};

use crate::config::{MissingPolicy, Protocol, ReportConfig};
use crate::error::{ReportError, Result};
use crate::render::SeriesStyle;
use crate::table::{MetricTable, load_table_with, normalize_column};

/// A loaded input together with its label and the style it is drawn with.
#[derive(Debug, Clone)]
pub struct ProtocolTable {
    pub protocol: Protocol,
    pub style: SeriesStyle,
    pub table: MetricTable,
}

/// Loads every configured input in list order.
///
/// Every table must carry the x column and all metric columns; the first mismatch aborts the
/// study. Percent metrics are normalized; tables are sorted by x when `sort_by_x` is set.
pub fn load_study(cfg: &ReportConfig) -> Result<Vec<ProtocolTable>> {
    let mut required = vec![cfg.x_column.as_str()];
    required.extend(cfg.metric_columns());

    let delimiter = cfg.delimiter_byte()?;

    let mut out = Vec::with_capacity(cfg.inputs.len());
    for (i, input) in cfg.inputs.iter().enumerate() {
        if !input.path.exists() {
            match cfg.on_missing {
                MissingPolicy::Abort => {
                    return Err(ReportError::MissingFile {
                        path: input.path.clone(),
                    });
                }
                MissingPolicy::Skip => {
                    warn!(path = %input.path.display(), "input missing, skipped");
                    continue;
                }
            }
        }

        let mut table = load_table_with(&input.path, delimiter)?;
        table.require_columns(&required)?;
        for metric in cfg.metrics.iter().filter(|m| m.percent) {
            normalize_column(&mut table, &metric.column)?;
        }
        if cfg.sort_by_x {
            table.sort_by_column(&cfg.x_column)?;
        }

        let protocol = input.protocol();
        info!(protocol = %protocol, rows = table.len(), "input loaded");
        out.push(ProtocolTable {
            style: SeriesStyle::for_protocol(&protocol, i),
            protocol,
            table,
        });
    }
    Ok(out)
}
