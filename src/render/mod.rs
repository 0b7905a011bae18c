//! Line-chart rendering.
//!
//! A [`Figure`] is a grid of [`ChartSpec`]s written to one PNG. Every chart is first turned into a
//! [`ChartPlan`] (axis ranges, grid lines, annotations) without touching any backend, so a chart
//! that cannot be drawn is rejected before a file is created.

mod chart;
mod draw;
mod plan;
mod style;

pub use chart::{ChartSpec, Figure, Series, YScale};
pub use draw::{plan_figure, render_figure};
pub use plan::{Annotation, ChartPlan, Placement};
pub use style::{Marker, PALETTE, SeriesStyle};
