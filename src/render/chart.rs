use std::path::PathBuf;

use super::SeriesStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    #[default]
    Linear,
    Log,
}

/// One labelled line. Points are drawn in the given order, never re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub y_scale: YScale,
    /// Print each value next to its point: first series above, the others below.
    pub annotate: bool,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, x_desc: impl Into<String>, y_desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            y_scale: YScale::Linear,
            annotate: false,
            series: Vec::new(),
        }
    }

    pub fn y_scale(mut self, scale: YScale) -> Self {
        self.y_scale = scale;
        self
    }

    pub fn annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    pub fn push_series(&mut self, label: impl Into<String>, style: SeriesStyle, points: Vec<(f64, f64)>) {
        self.series.push(Series {
            label: label.into(),
            style,
            points,
        });
    }
}

/// Charts laid out on a `rows x cols` grid and written to `path` as PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub path: PathBuf,
    pub size: (u32, u32),
    pub grid: (usize, usize),
    pub charts: Vec<ChartSpec>,
}

impl Figure {
    pub fn single(path: impl Into<PathBuf>, size: (u32, u32), chart: ChartSpec) -> Self {
        Self {
            path: path.into(),
            size,
            grid: (1, 1),
            charts: vec![chart],
        }
    }

    pub fn grid(path: impl Into<PathBuf>, size: (u32, u32), grid: (usize, usize), charts: Vec<ChartSpec>) -> Self {
        Self {
            path: path.into(),
            size,
            grid,
            charts,
        }
    }
}
