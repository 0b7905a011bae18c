use plotters::style::RGBColor;

use crate::config::Protocol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
}

impl Marker {
    const ALL: [Marker; 4] = [Marker::Circle, Marker::Square, Marker::Triangle, Marker::Diamond];

    pub fn nth(i: usize) -> Marker {
        Self::ALL[i % Self::ALL.len()]
    }

    /// Polygon around the origin in backend pixels, `r` being the half-size.
    pub fn outline(self, r: i32) -> Vec<(i32, i32)> {
        match self {
            Marker::Circle => (0..12_i32)
                .map(|k| {
                    let a = std::f64::consts::TAU * f64::from(k) / 12.0;
                    let r = f64::from(r);
                    ((r * a.cos()).round() as i32, (r * a.sin()).round() as i32)
                })
                .collect(),
            Marker::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
            Marker::Triangle => vec![(0, -r), (r, r), (-r, r)],
            Marker::Diamond => vec![(0, -r), (r, 0), (0, r), (-r, 0)],
        }
    }
}

/// Colors for series without a fixed protocol style.
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(214, 39, 40),
    RGBColor(44, 160, 44),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub marker: Marker,
}

impl SeriesStyle {
    pub fn nth(i: usize) -> Self {
        Self {
            color: PALETTE[i % PALETTE.len()],
            marker: Marker::nth(i),
        }
    }

    /// AODV, DSDV and OLSR always look the same; other labels fall back to position `i`.
    pub fn for_protocol(protocol: &Protocol, i: usize) -> Self {
        match protocol.file_key().as_str() {
            "aodv" => Self {
                color: RGBColor(0, 0, 255),
                marker: Marker::Circle,
            },
            "dsdv" => Self {
                color: RGBColor(255, 0, 0),
                marker: Marker::Square,
            },
            "olsr" => Self {
                color: RGBColor(0, 128, 0),
                marker: Marker::Triangle,
            },
            _ => Self::nth(i),
        }
    }
}
