//! Polar/arc geometry for the donut chart wedges.
//!
//! Angles are degrees measured clockwise from the 12-o'clock position,
//! the conventional pie-chart orientation.

/// Convert a polar coordinate (radius, angle) around a center point to
/// Cartesian coordinates. 0° points straight up; angles grow clockwise.
///
/// Pure and total for all finite inputs.
#[must_use]
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let angle_rad = (angle_deg - 90.0) * std::f64::consts::PI / 180.0;
    (
        center_x + radius * angle_rad.cos(),
        center_y + radius * angle_rad.sin(),
    )
}

/// Describe a closed pie wedge from `start_deg` to `end_deg` as an SVG
/// path: center → arc start → arc → back to center.
///
/// The large-arc flag is set exactly when the span exceeds 180°, so a
/// slice covering more than half the circle renders as one contiguous
/// wedge. `start_deg == end_deg` produces a legal path with zero
/// visible area.
#[must_use]
pub fn describe_arc(
    center_x: f64,
    center_y: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let (start_x, start_y) = polar_to_cartesian(center_x, center_y, radius, end_deg);
    let (end_x, end_y) = polar_to_cartesian(center_x, center_y, radius, start_deg);
    let large_arc_flag = if end_deg - start_deg > 180.0 { "1" } else { "0" };

    format!(
        "M {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        fmt_num(center_x),
        fmt_num(center_y),
        fmt_num(start_x),
        fmt_num(start_y),
        fmt_num(radius),
        fmt_num(radius),
        large_arc_flag,
        fmt_num(end_x),
        fmt_num(end_y),
    )
}

/// Format a coordinate with at most two decimals, trimming trailing
/// zeros, so path output stays compact and deterministic.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    // -0.0 prints as "-0"; normalize it away first.
    let value = if value == 0.0 { 0.0 } else { value };
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}
