//! Linear max-based scaling shared by every chart.

/// Return `max(values ∪ {floor})`.
///
/// The floor keeps the denominator positive on empty or all-zero
/// series, and keeps low-value charts visually stable.
#[must_use]
pub fn compute_scale(values: &[f64], floor: f64) -> f64 {
    values.iter().copied().fold(floor, f64::max)
}

/// Linearly map `value` in `[0, max_value]` to `[0, pixel_extent]`.
///
/// Returns 0 when `max_value` is 0 — callers normally pass a scale that
/// already went through [`compute_scale`], so this is the last line of
/// defense against a zero denominator.
#[must_use]
pub fn normalize_to_pixels(value: f64, max_value: f64, pixel_extent: f64) -> f64 {
    if max_value == 0.0 {
        return 0.0;
    }
    value / max_value * pixel_extent
}
