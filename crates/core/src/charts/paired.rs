//! Paired bar chart: audit bytes given vs. received.

use crate::models::chart::ChartLayout;
use crate::render::scene::{Node, Scene, TextAnchor};
use crate::render::Rendering;

use super::geometry::fmt_num;
use super::scale::{compute_scale, normalize_to_pixels};

const NO_DATA: &str = "No audit data available";

const GIVEN_COLOR: &str = "#4CAF50";
const RECEIVED_COLOR: &str = "#F44336";
const AXIS_COLOR: &str = "#666";

const BAR_WIDTH: f64 = 60.0;
const BAR_GAP: f64 = 40.0;

/// Bytes per displayed megabyte.
const BYTES_PER_MB: f64 = 1_000_000.0;

/// Render the given/received audit bytes comparison.
///
/// Both-zero input is the "no data" terminal state. Bars share one
/// floor-protected scale so their relative heights are comparable.
#[must_use]
pub fn audit_bytes(given: u64, received: u64, layout: ChartLayout) -> Rendering {
    if given == 0 && received == 0 {
        return Rendering::placeholder(NO_DATA);
    }

    let given_mb = given as f64 / BYTES_PER_MB;
    let received_mb = received as f64 / BYTES_PER_MB;
    let max_mb = compute_scale(&[given_mb, received_mb], 1.0);

    let inner_width = layout.inner_width();
    let inner_height = layout.inner_height();

    let given_x = inner_width / 2.0 - BAR_WIDTH - BAR_GAP / 2.0;
    let received_x = inner_width / 2.0 + BAR_GAP / 2.0;

    let mut children = Vec::new();
    children.extend(column(
        given_x,
        given_mb,
        max_mb,
        inner_height,
        GIVEN_COLOR,
        "Given",
        '▲',
    ));
    children.extend(column(
        received_x,
        received_mb,
        max_mb,
        inner_height,
        RECEIVED_COLOR,
        "Received",
        '▼',
    ));

    children.push(
        Node::path(format!("M0 {} H{}", fmt_num(inner_height), fmt_num(inner_width)))
            .with_stroke(AXIS_COLOR, 1.0),
    );

    let mut scene = Scene::new(layout.width, layout.height);
    scene.push(Node::group_translated(
        layout.margins.left,
        layout.margins.top,
        children,
    ));

    Rendering::Svg(scene)
}

/// One column: the bar, its value label above, and its category label
/// sitting inside the bar near the baseline.
fn column(
    x: f64,
    value_mb: f64,
    max_mb: f64,
    baseline: f64,
    color: &str,
    label: &str,
    arrow: char,
) -> Vec<Node> {
    let bar_height = normalize_to_pixels(value_mb, max_mb, baseline);
    let bar_y = baseline - bar_height;
    let center = x + BAR_WIDTH / 2.0;

    vec![
        Node::rect(x, bar_y, BAR_WIDTH, bar_height)
            .with_fill(color)
            .with_rounding(4.0),
        Node::text(center, bar_y - 10.0, format!("{value_mb:.2} {arrow} MB"))
            .with_anchor(TextAnchor::Middle)
            .with_fill(color)
            .with_font(Some(14.0), Some("bold")),
        Node::text(center, baseline - 5.0, label)
            .with_anchor(TextAnchor::Middle)
            .with_fill("white")
            .with_font(Some(12.0), None),
    ]
}
