use std::path::Path;

use super::ProtocolTable;
use crate::config::{MetricSpec, ReportConfig};
use crate::error::Result;
use crate::render::{ChartSpec, Figure, SeriesStyle, YScale};
use crate::summary::SummaryTable;

const SINGLE_SIZE: (u32, u32) = (1000, 600);
const COMBINED_SIZE: (u32, u32) = (1200, 800);

fn scale_of(metric: &MetricSpec) -> YScale {
    if metric.log_scale {
        YScale::Log
    } else {
        YScale::Linear
    }
}

/// `AODV`, `AODV and DSDV`, `AODV, OLSR and DSDV`.
fn join_names(tables: &[ProtocolTable]) -> String {
    let names = tables
        .iter()
        .map(|t| t.protocol.display_name())
        .collect::<Vec<_>>();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

/// One line per protocol for a single metric.
fn metric_chart(
    cfg: &ReportConfig,
    tables: &[ProtocolTable],
    metric: &MetricSpec,
    title: String,
    y_desc: String,
) -> Result<ChartSpec> {
    let scale = scale_of(metric);
    let mut chart = ChartSpec::new(title, cfg.x_label(), y_desc)
        .y_scale(scale)
        .annotate(cfg.annotate_log_scale && scale == YScale::Log);
    for t in tables {
        let points = t.table.points(&cfg.x_column, &metric.column)?;
        chart.push_series(t.protocol.display_name(), t.style, points);
    }
    Ok(chart)
}

/// Per protocol: one linear chart per metric, plus all metrics together on a log axis.
pub fn protocol_figures(cfg: &ReportConfig, tables: &[ProtocolTable]) -> Result<Vec<Figure>> {
    let out_dir = &cfg.output_dir;
    let mut figures = Vec::new();
    for t in tables {
        let key = t.protocol.file_key();
        let name = t.protocol.display_name();

        for metric in &cfg.metrics {
            let mut chart = ChartSpec::new(
                format!("{} per {} ({name})", metric.label, cfg.x_column),
                cfg.x_column.as_str(),
                metric.label.as_str(),
            );
            chart.push_series(
                metric.label.as_str(),
                t.style,
                t.table.points(&cfg.x_column, &metric.column)?,
            );
            figures.push(Figure::single(
                out_dir.join(format!("{key}_{}_normal.png", metric.slug())),
                SINGLE_SIZE,
                chart,
            ));
        }

        let mut combined = ChartSpec::new(
            format!("All Metrics per {} (Log Scale) - {name}", cfg.x_column),
            cfg.x_column.as_str(),
            "Log Scale",
        )
        .y_scale(YScale::Log);
        for (i, metric) in cfg.metrics.iter().enumerate() {
            combined.push_series(
                metric.label.as_str(),
                SeriesStyle::nth(i),
                t.table.points(&cfg.x_column, &metric.column)?,
            );
        }
        figures.push(Figure::single(
            out_dir.join(format!("{key}_all_metrics_log_scale.png")),
            COMBINED_SIZE,
            combined,
        ));
    }
    Ok(figures)
}

/// Per metric: every protocol on one chart.
pub fn comparison_figures(cfg: &ReportConfig, tables: &[ProtocolTable]) -> Result<Vec<Figure>> {
    cfg.metrics
        .iter()
        .map(|metric| {
            let (suffix, variant) = match scale_of(metric) {
                YScale::Log => (" (Log Scale)", "log_scale"),
                YScale::Linear => ("", "linear"),
            };
            let title = format!("{} vs {}{suffix}", metric.label, cfg.x_label());
            let chart = metric_chart(cfg, tables, metric, title, metric.label.clone())?;
            Ok(Figure::single(
                cfg.output_dir
                    .join(format!("comparison_{}_{variant}.png", metric.slug())),
                SINGLE_SIZE,
                chart,
            ))
        })
        .collect()
}

/// Per metric comparison charts named `<column>_comparison.png`, then all of them stacked
/// vertically in `all_metrics_comparison.png`.
pub fn trial_figures(cfg: &ReportConfig, tables: &[ProtocolTable]) -> Result<Vec<Figure>> {
    let names = join_names(tables);
    let mut charts = Vec::with_capacity(cfg.metrics.len());
    let mut figures = Vec::with_capacity(cfg.metrics.len() + 1);

    for metric in &cfg.metrics {
        let title = format!("Comparison of {} between {names}", metric.label);
        let y_desc = if metric.log_scale {
            format!("{} (log scale)", metric.label)
        } else {
            metric.label.clone()
        };
        let chart = metric_chart(cfg, tables, metric, title, y_desc)?;
        figures.push(Figure::single(
            cfg.output_dir
                .join(format!("{}_comparison.png", metric.column)),
            SINGLE_SIZE,
            chart.clone(),
        ));
        charts.push(chart);
    }

    let rows = charts.len().max(1);
    figures.push(Figure::grid(
        cfg.output_dir.join("all_metrics_comparison.png"),
        (1000, 500 * rows as u32),
        (rows, 1),
        charts,
    ));
    Ok(figures)
}

/// Side-by-side panels, one per summary column, against the run index.
pub fn summary_figure(summary: &SummaryTable, path: &Path) -> Figure {
    let charts = summary
        .layout
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let quantity = col
                .header
                .split_once(" (")
                .map_or(col.header.as_str(), |(q, _)| q);
            let mut chart = ChartSpec::new(
                format!("{quantity} Over Simulation Runs"),
                summary.layout.run_header.as_str(),
                col.header.as_str(),
            );
            chart.push_series(col.header.as_str(), SeriesStyle::nth(i), summary.series(i));
            chart
        })
        .collect::<Vec<_>>();
    let cols = charts.len().max(1);
    Figure::grid(path, (1200, 600), (1, cols), charts)
}
