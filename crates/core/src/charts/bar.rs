//! Grouped bar chart: XP earned by project.

use crate::models::chart::{ChartLayout, ChartSpec};
use crate::models::series::SeriesPoint;
use crate::render::scene::{Node, Scene, TextAnchor};
use crate::render::Rendering;

use super::geometry::fmt_num;
use super::scale::normalize_to_pixels;

const TITLE: &str = "XP Earned by Project";
const Y_AXIS_TITLE: &str = "XP Earned";

/// Minimum scale denominator — keeps low-value charts visually stable.
const SCALE_FLOOR: f64 = 10.0;

/// Horizontal gap carved out of each column, in pixels.
const BAR_GAP: f64 = 5.0;

/// Project labels longer than this are truncated below the baseline.
const LABEL_MAX_CHARS: usize = 10;

/// Render the XP-by-project bar chart.
///
/// One equal-width column per series point, in input order — the caller
/// controls sorting upstream. An empty series still renders the title
/// and axes with zero bars.
#[must_use]
pub fn xp_by_project(series: &[SeriesPoint], layout: ChartLayout) -> Rendering {
    let spec = ChartSpec::new(layout, series.to_vec(), SCALE_FLOOR);
    let inner_width = layout.inner_width();
    let inner_height = layout.inner_height();

    let mut scene = Scene::new(layout.width, layout.height);
    scene.push(
        Node::text(layout.width / 2.0, layout.margins.top / 2.0, TITLE)
            .with_anchor(TextAnchor::Middle)
            .with_class("chart-title"),
    );

    let mut children = Vec::new();

    if !spec.series.is_empty() {
        let column_width = inner_width / spec.series.len() as f64;
        for (index, point) in spec.series.iter().enumerate() {
            let bar_height = normalize_to_pixels(point.value, spec.scale, inner_height);
            let bar_x = index as f64 * column_width;
            let bar_y = inner_height - bar_height;

            children.push(
                Node::rect(bar_x, bar_y, column_width - BAR_GAP, bar_height)
                    .with_class("chart-bar"),
            );

            if point.value > 0.0 {
                children.push(
                    Node::text(bar_x + column_width / 2.0, bar_y - 5.0, fmt_num(point.value))
                        .with_anchor(TextAnchor::Middle)
                        .with_class("chart-label"),
                );
            }

            let label: String = point.label.chars().take(LABEL_MAX_CHARS).collect();
            children.push(
                Node::text(bar_x + column_width / 2.0, inner_height + 20.0, label)
                    .with_anchor(TextAnchor::Middle)
                    .with_class("chart-axis-label"),
            );
        }
    }

    // Axes on top of the bars, then the rotated axis title.
    children.push(Node::line(0.0, 0.0, 0.0, inner_height).with_class("chart-axis"));
    children.push(
        Node::line(0.0, inner_height, inner_width, inner_height).with_class("chart-axis"),
    );
    children.push(
        Node::text(-inner_height / 2.0, -40.0, Y_AXIS_TITLE)
            .with_anchor(TextAnchor::Middle)
            .with_transform("rotate(-90)")
            .with_class("chart-axis-title"),
    );

    scene.push(Node::group_translated(
        layout.margins.left,
        layout.margins.top,
        children,
    ));

    Rendering::Svg(scene)
}
