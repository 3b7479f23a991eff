use serde::{Deserialize, Serialize};

use super::series::SeriesPoint;
use crate::charts::scale::compute_scale;

/// Margins around a chart's plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform margin on all four sides.
    pub const fn uniform(all: f64) -> Self {
        Self::new(all, all, all, all)
    }
}

/// Outer dimensions and margins of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Total SVG width in pixels
    pub width: f64,

    /// Total SVG height in pixels
    pub height: f64,

    /// Margins reserved for titles, axis labels, and legends
    pub margins: Margins,
}

impl ChartLayout {
    pub const fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Width of the plotting area (inside margins).
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plotting area (inside margins).
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    // ── Per-chart defaults ──────────────────────────────────────────

    /// Default layout for the XP-by-project bar chart.
    pub const fn bar_default() -> Self {
        Self::new(600.0, 400.0, Margins::new(40.0, 30.0, 70.0, 60.0))
    }

    /// Default layout for the audit-ratio donut chart.
    pub const fn donut_default() -> Self {
        Self::new(400.0, 400.0, Margins::uniform(20.0))
    }

    /// Default layout for the cumulative XP area chart.
    pub const fn area_default() -> Self {
        Self::new(600.0, 250.0, Margins::new(20.0, 20.0, 40.0, 60.0))
    }

    /// Default layout for the given/received paired bar chart.
    pub const fn paired_default() -> Self {
        Self::new(600.0, 250.0, Margins::uniform(40.0))
    }
}

/// Everything one renderable chart is derived from: dimensions, the data
/// series, and the floor-protected scale. Created fresh per render call;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Outer dimensions and margins
    pub layout: ChartLayout,

    /// The aggregated series to plot, in render order
    pub series: Vec<SeriesPoint>,

    /// Derived max-value scale, already floored — safe denominator
    pub scale: f64,
}

impl ChartSpec {
    /// Build a spec, deriving the scale from the series values and a floor.
    pub fn new(layout: ChartLayout, series: Vec<SeriesPoint>, floor: f64) -> Self {
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        let scale = compute_scale(&values, floor);
        Self {
            layout,
            series,
            scale,
        }
    }
}
