//! Cumulative area + line chart: XP over time.

use crate::models::chart::ChartLayout;
use crate::models::transaction::{Transaction, TransactionKind};
use crate::render::scene::{Node, Scene, TextAnchor};
use crate::render::Rendering;

use super::geometry::fmt_num;
use super::scale::{compute_scale, normalize_to_pixels};

const Y_AXIS_TITLE: &str = "Cumulative XP (KB)";
const NO_DATA: &str = "No XP data available";

const AREA_FILL: &str = "rgba(33, 150, 243, 0.2)";
const LINE_COLOR: &str = "#2196F3";
const AXIS_COLOR: &str = "#666";

/// Number of gridline increments on the Y axis.
const TICK_STEPS: u32 = 5;

/// Running cumulative XP in kilobytes, one value per XP transaction.
///
/// Filters to the XP kind and sorts ascending by `occurred_at` before
/// summing — input order is not trusted. A zero-amount transaction
/// keeps the running sum flat but still contributes a point.
#[must_use]
pub fn cumulative_xp_kb(transactions: &[Transaction]) -> Vec<f64> {
    let mut xp: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Xp)
        .collect();
    xp.sort_by_key(|t| t.occurred_at);

    let mut running = 0.0;
    xp.iter()
        .map(|t| {
            running += t.amount as f64 / 1024.0;
            running
        })
        .collect()
}

/// Render the cumulative XP chart: a filled area under the curve with a
/// stroked line on top, both from one polyline of evenly spaced points.
///
/// Zero XP transactions yield the "no data" placeholder — an empty
/// polyline never reaches the path builder, whose width divisor is
/// undefined for it.
#[must_use]
pub fn cumulative_xp(transactions: &[Transaction], layout: ChartLayout) -> Rendering {
    let points = cumulative_xp_kb(transactions);
    if points.is_empty() {
        return Rendering::placeholder(NO_DATA);
    }

    let inner_width = layout.inner_width();
    let inner_height = layout.inner_height();
    let max_xp = compute_scale(&points, 1.0);

    // A single point has no horizontal extent; clamp the divisor so it
    // pins to the left edge instead of dividing by zero.
    let x_step = inner_width / (points.len() - 1).max(1) as f64;

    let polyline: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            (
                i as f64 * x_step,
                inner_height - normalize_to_pixels(value, max_xp, inner_height),
            )
        })
        .collect();

    let mut area_path = format!("M0 {}", fmt_num(inner_height));
    for (x, y) in &polyline {
        area_path.push_str(&format!(" L{} {}", fmt_num(*x), fmt_num(*y)));
    }
    area_path.push_str(&format!(
        " L{} {} Z",
        fmt_num(inner_width),
        fmt_num(inner_height)
    ));

    let mut line_path = format!("M0 {}", fmt_num(inner_height));
    for (x, y) in &polyline {
        line_path.push_str(&format!(" L{} {}", fmt_num(*x), fmt_num(*y)));
    }

    let mut children = vec![
        Node::path(area_path).with_fill(AREA_FILL),
        Node::path(line_path)
            .with_fill("none")
            .with_stroke(LINE_COLOR, 3.0)
            .with_linejoin("round"),
        // Axes
        Node::path(format!("M0 {} H{}", fmt_num(inner_height), fmt_num(inner_width)))
            .with_stroke(AXIS_COLOR, 1.0),
        Node::path(format!("M0 0 V{}", fmt_num(inner_height))).with_stroke(AXIS_COLOR, 1.0),
    ];

    for i in 0..=TICK_STEPS {
        let value = max_xp / TICK_STEPS as f64 * i as f64;
        let y = inner_height - normalize_to_pixels(value, max_xp, inner_height);
        children.push(
            Node::path(format!("M-5 {} H0", fmt_num(y))).with_stroke(AXIS_COLOR, 1.0),
        );
        children.push(
            Node::text(-10.0, y + 4.0, format!("{value:.1}"))
                .with_anchor(TextAnchor::End)
                .with_fill(AXIS_COLOR),
        );
    }

    children.push(
        Node::text(-150.0, inner_height / 9.0, Y_AXIS_TITLE)
            .with_transform("rotate(-90)")
            .with_fill(AXIS_COLOR),
    );

    let mut scene = Scene::new(layout.width, layout.height);
    scene.push(Node::group_translated(
        layout.margins.left,
        layout.margins.top,
        children,
    ));

    Rendering::Svg(scene)
}
