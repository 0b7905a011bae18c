use std::fs;

use plotters::coord::Shift;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::{ChartPlan, ChartSpec, Figure, Placement, YScale};
use crate::error::{ReportError, Result};

fn plot_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Plot(e.to_string())
}

/// Plans every chart of `figure` without touching the filesystem.
pub fn plan_figure(figure: &Figure) -> Result<Vec<ChartPlan>> {
    figure.charts.iter().map(ChartPlan::build).collect()
}

/// Writes `figure` as PNG, creating the parent directory if needed.
///
/// All charts are planned before the backend is created, so a rejected chart leaves no file.
#[tracing::instrument(skip_all, fields(path = %figure.path.display()))]
pub fn render_figure(figure: &Figure) -> Result<()> {
    let plans = plan_figure(figure)?;

    if let Some(parent) = figure.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(&figure.path, figure.size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let panels = root.split_evenly(figure.grid);
    for ((panel, chart), plan) in panels.iter().zip(&figure.charts).zip(&plans) {
        draw_chart(panel, chart, plan)?;
    }

    root.present().map_err(plot_err)?;
    info!(charts = figure.charts.len(), "figure written");
    Ok(())
}

fn draw_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    chart: &ChartSpec,
    plan: &ChartPlan,
) -> Result<()> {
    let (x0, x1) = plan.x_range;
    let (y0, y1) = plan.y_range;

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(chart.title.as_str(), ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70);

    match chart.y_scale {
        YScale::Linear => {
            let mut ctx = builder
                .build_cartesian_2d(x0..x1, y0..y1)
                .map_err(plot_err)?;
            draw_body(&mut ctx, chart, plan)
        }
        YScale::Log => {
            let mut ctx = builder
                .build_cartesian_2d(x0..x1, (y0..y1).log_scale())
                .map_err(plot_err)?;
            draw_body(&mut ctx, chart, plan)
        }
    }
}

fn draw_body<'a, Y>(
    ctx: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, Y>>,
    chart: &ChartSpec,
    plan: &ChartPlan,
) -> Result<()>
where
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let (x0, x1) = plan.x_range;
    let (y0, y1) = plan.y_range;

    let fmt_x = |x: &f64| format!("{x:.0}");
    let fmt_y = |y: &f64| format_tick(*y);
    ctx.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .x_labels(plan.x_ticks.len().clamp(2, 20))
        .y_labels(10)
        .x_label_formatter(&fmt_x)
        .y_label_formatter(&fmt_y)
        .draw()
        .map_err(plot_err)?;

    // Grid: dashed major lines, dotted minor lines.
    let major: ShapeStyle = BLACK.mix(0.25).stroke_width(1);
    let minor: ShapeStyle = BLACK.mix(0.15).stroke_width(1);
    ctx.draw_series(
        plan.x_ticks
            .iter()
            .map(|&x| DashedPathElement::new(vec![(x, y0), (x, y1)], 6, 4, major)),
    )
    .map_err(plot_err)?;
    ctx.draw_series(
        plan.major_y
            .iter()
            .map(|&y| DashedPathElement::new(vec![(x0, y), (x1, y)], 6, 4, major)),
    )
    .map_err(plot_err)?;
    ctx.draw_series(
        plan.minor_y
            .iter()
            .map(|&y| DashedPathElement::new(vec![(x0, y), (x1, y)], 1, 3, minor)),
    )
    .map_err(plot_err)?;

    for s in &chart.series {
        let color = s.style.color;
        let marker = s.style.marker;
        ctx.draw_series(LineSeries::new(
            s.points.iter().copied(),
            color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label(s.label.as_str())
        .legend(move |(x, y)| {
            EmptyElement::at((x, y))
                + PathElement::new(vec![(-10, 0), (10, 0)], color.stroke_width(2))
                + Polygon::new(marker.outline(4), color.filled())
        });
        ctx.draw_series(
            s.points
                .iter()
                .map(|&p| EmptyElement::at(p) + Polygon::new(marker.outline(4), color.filled())),
        )
        .map_err(plot_err)?;
    }

    let above = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let below = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    ctx.draw_series(plan.annotations.iter().map(|a| {
        let style = match a.placement {
            Placement::Above => above.clone(),
            Placement::Below => below.clone(),
        };
        EmptyElement::at((a.x, a.y)) + Text::new(a.text.clone(), (0, a.placement.offset_px()), style)
    }))
    .map_err(plot_err)?;

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_err)?;
    }
    Ok(())
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
