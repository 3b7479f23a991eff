//! Donut chart: audit success vs. fail ratio.

use crate::models::chart::ChartLayout;
use crate::render::scene::{Node, Scene, TextAnchor};
use crate::render::Rendering;

use super::geometry::describe_arc;

const TITLE: &str = "Audit Ratio";
const NO_DATA: &str = "No audit data available";

const SUCCESS_COLOR: &str = "#4CAF50";
const FAIL_COLOR: &str = "#F44336";

/// Hole radius as a fraction of the outer radius.
const HOLE_RATIO: f64 = 0.5;

/// Render the audit success/fail donut.
///
/// Both counts zero is the documented "no data" terminal state. A count
/// of zero on one side leaves that wedge as a legal invisible sliver
/// while the other side covers the full circle.
#[must_use]
pub fn audit_ratio(success: u64, fail: u64, layout: ChartLayout) -> Rendering {
    let total = success + fail;
    if total == 0 {
        return Rendering::placeholder(NO_DATA);
    }

    let center_x = layout.width / 2.0;
    let center_y = layout.height / 2.0;
    let radius = layout.width.min(layout.height) / 2.0 - 20.0;

    let (success_percent, _fail_percent) = percentages(success, fail);
    let success_angle = success_percent / 100.0 * 360.0;

    let mut scene = Scene::new(layout.width, layout.height);
    scene.push(
        Node::text(center_x, 30.0, TITLE)
            .with_anchor(TextAnchor::Middle)
            .with_class("chart-title"),
    );

    scene.push(slice(center_x, center_y, radius, 0.0, success_angle, SUCCESS_COLOR));
    scene.push(slice(center_x, center_y, radius, success_angle, 360.0, FAIL_COLOR));

    // Punch the hole, then overlay the success side's numbers in it.
    scene.push(Node::circle(center_x, center_y, radius * HOLE_RATIO).with_fill("white"));
    scene.push(
        Node::text(center_x, center_y - 10.0, format!("{success_percent:.1}%"))
            .with_anchor(TextAnchor::Middle)
            .with_class("chart-percent"),
    );
    scene.push(
        Node::text(center_x, center_y + 20.0, "Success")
            .with_anchor(TextAnchor::Middle)
            .with_class("chart-label"),
    );

    scene.push(legend(center_x, layout.height, success, fail));

    Rendering::Svg(scene)
}

/// Split two counts into (success %, fail %). Both are zero when the
/// total is zero; otherwise they sum to 100 up to float rounding.
#[must_use]
pub fn percentages(success: u64, fail: u64) -> (f64, f64) {
    let total = success + fail;
    if total == 0 {
        return (0.0, 0.0);
    }
    let success_percent = success as f64 / total as f64 * 100.0;
    let fail_percent = fail as f64 / total as f64 * 100.0;
    (success_percent, fail_percent)
}

/// One wedge of the donut. A span covering the whole circle is emitted
/// as a circle primitive: an arc whose endpoints coincide draws
/// nothing visible.
fn slice(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64, color: &str) -> Node {
    if end_deg - start_deg >= 360.0 {
        Node::circle(cx, cy, radius)
            .with_fill(color)
            .with_class("chart-slice")
    } else {
        Node::path(describe_arc(cx, cy, radius, start_deg, end_deg))
            .with_fill(color)
            .with_class("chart-slice")
    }
}

fn legend(center_x: f64, height: f64, success: u64, fail: u64) -> Node {
    let success_entry = Node::group(vec![
        Node::rect(0.0, 0.0, 15.0, 15.0).with_fill(SUCCESS_COLOR),
        Node::text(25.0, 12.0, format!("Success ({success})")),
    ]);
    let fail_entry = Node::group_translated(
        120.0,
        0.0,
        vec![
            Node::rect(0.0, 0.0, 15.0, 15.0).with_fill(FAIL_COLOR),
            Node::text(25.0, 12.0, format!("Fail ({fail})")),
        ],
    );
    Node::group_translated(center_x - 80.0, height - 30.0, vec![success_entry, fail_entry])
}
