use super::{ChartSpec, YScale};
use crate::error::{ReportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

impl Placement {
    /// Vertical text offset in pixels; backend y grows downwards.
    pub fn offset_px(self) -> i32 {
        match self {
            Placement::Above => -10,
            Placement::Below => 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub placement: Placement,
}

/// Everything needed to draw a chart, computed without a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Distinct x values, ascending; one tick and one vertical grid line each.
    pub x_ticks: Vec<f64>,
    /// Dashed horizontal grid lines.
    pub major_y: Vec<f64>,
    /// Dotted horizontal grid lines, log scale only.
    pub minor_y: Vec<f64>,
    pub annotations: Vec<Annotation>,
}

impl ChartPlan {
    /// Log scale rejects any `y <= 0` with [`ReportError::NonPositiveLogValue`].
    pub fn build(chart: &ChartSpec) -> Result<Self> {
        if chart.y_scale == YScale::Log {
            for s in &chart.series {
                // NaN counts as non-positive.
                if let Some(&(x, y)) = s.points.iter().find(|(_, y)| !(*y > 0.0)) {
                    return Err(ReportError::NonPositiveLogValue {
                        series: s.label.clone(),
                        x,
                        y,
                    });
                }
            }
        }

        let xs = chart
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.0))
            .collect::<Vec<_>>();
        let ys = chart
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .collect::<Vec<_>>();

        let x_range = match bounds(&xs) {
            Some((lo, hi)) => {
                let pad = ((hi - lo) * 0.05).max(0.5);
                (lo - pad, hi + pad)
            }
            None => (0.0, 1.0),
        };

        let mut x_ticks = xs;
        x_ticks.sort_by(f64::total_cmp);
        x_ticks.dedup();

        let (y_range, major_y, minor_y) = match chart.y_scale {
            YScale::Linear => {
                let range = linear_range(&ys);
                (range, linear_ticks(range), Vec::new())
            }
            YScale::Log => {
                let (lo_exp, hi_exp) = decade_span(&ys);
                let major = (lo_exp..=hi_exp).map(|e| 10f64.powi(e)).collect::<Vec<_>>();
                let minor = (lo_exp..hi_exp)
                    .flat_map(|e| (2..=9_i32).map(move |k| f64::from(k) * 10f64.powi(e)))
                    .collect();
                ((10f64.powi(lo_exp), 10f64.powi(hi_exp)), major, minor)
            }
        };

        let annotations = if chart.annotate {
            chart
                .series
                .iter()
                .enumerate()
                .flat_map(|(i, s)| {
                    let placement = if i == 0 {
                        Placement::Above
                    } else {
                        Placement::Below
                    };
                    s.points.iter().map(move |&(x, y)| Annotation {
                        x,
                        y,
                        text: format!("{y:.2}"),
                        placement,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            x_range,
            y_range,
            x_ticks,
            major_y,
            minor_y,
            annotations,
        })
    }
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied().filter(|v| v.is_finite());
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Data bounds padded by 5%; a flat series gets a band around its value.
fn linear_range(ys: &[f64]) -> (f64, f64) {
    match bounds(ys) {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
        Some((v, _)) => {
            let pad = (v.abs() * 0.1).max(1.0);
            (v - pad, v + pad)
        }
        None => (0.0, 1.0),
    }
}

/// Multiples of a 1/2/5 step inside `range`, roughly eight of them.
fn linear_ticks((lo, hi): (f64, f64)) -> Vec<f64> {
    let step = nice_step((hi - lo) / 8.0);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let factor = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * mag
}

/// Whole decades covering all (positive) values; always at least one decade wide.
fn decade_span(ys: &[f64]) -> (i32, i32) {
    match bounds(ys) {
        Some((lo, hi)) => {
            let lo_exp = lo.log10().floor() as i32;
            let hi_exp = (hi.log10().ceil() as i32).max(lo_exp + 1);
            (lo_exp, hi_exp)
        }
        None => (0, 1),
    }
}
