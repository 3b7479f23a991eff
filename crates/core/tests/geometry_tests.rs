// ═══════════════════════════════════════════════════════════════════
// Geometry & Scaling Tests — polar_to_cartesian, describe_arc,
// compute_scale, normalize_to_pixels
// ═══════════════════════════════════════════════════════════════════

use progress_board_core::charts::geometry::{describe_arc, fmt_num, polar_to_cartesian};
use progress_board_core::charts::scale::{compute_scale, normalize_to_pixels};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// ═══════════════════════════════════════════════════════════════════
//  polar_to_cartesian
// ═══════════════════════════════════════════════════════════════════

mod polar {
    use super::*;

    #[test]
    fn zero_degrees_points_straight_up() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 50.0, 0.0);
        assert_close(x, 100.0);
        assert_close(y, 50.0);
    }

    #[test]
    fn ninety_degrees_points_right() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 50.0, 90.0);
        assert_close(x, 150.0);
        assert_close(y, 100.0);
    }

    #[test]
    fn one_eighty_degrees_points_down() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 50.0, 180.0);
        assert_close(x, 100.0);
        assert_close(y, 150.0);
    }

    #[test]
    fn two_seventy_degrees_points_left() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 50.0, 270.0);
        assert_close(x, 50.0);
        assert_close(y, 100.0);
    }

    #[test]
    fn full_turn_equals_zero() {
        let (x0, y0) = polar_to_cartesian(40.0, 60.0, 25.0, 0.0);
        let (x1, y1) = polar_to_cartesian(40.0, 60.0, 25.0, 360.0);
        assert_close(x0, x1);
        assert_close(y0, y1);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        for angle in [0.0, 45.0, 123.4, 300.0] {
            let (x, y) = polar_to_cartesian(7.0, -3.0, 0.0, angle);
            assert_close(x, 7.0);
            assert_close(y, -3.0);
        }
    }

    #[test]
    fn arbitrary_origin_offsets_result() {
        let (x, y) = polar_to_cartesian(0.0, 0.0, 10.0, 90.0);
        let (ox, oy) = polar_to_cartesian(5.0, 5.0, 10.0, 90.0);
        assert_close(ox - x, 5.0);
        assert_close(oy - y, 5.0);
    }

    #[test]
    fn point_stays_on_the_circle() {
        for angle in [13.0, 97.0, 181.5, 359.0] {
            let (x, y) = polar_to_cartesian(0.0, 0.0, 42.0, angle);
            assert_close((x * x + y * y).sqrt(), 42.0);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  describe_arc
// ═══════════════════════════════════════════════════════════════════

mod arc {
    use super::*;

    fn large_arc_flag(path: &str) -> &str {
        // Path shape: "M cx cy L sx sy A r r 0 <flag> 0 ex ey Z"
        let after_a = path.split(" A ").nth(1).expect("path has an arc segment");
        after_a.split_whitespace().nth(3).expect("flag present")
    }

    #[test]
    fn small_span_uses_short_arc() {
        let path = describe_arc(100.0, 100.0, 50.0, 0.0, 90.0);
        assert_eq!(large_arc_flag(&path), "0");
    }

    #[test]
    fn exactly_half_circle_uses_short_arc() {
        let path = describe_arc(100.0, 100.0, 50.0, 0.0, 180.0);
        assert_eq!(large_arc_flag(&path), "0");
    }

    #[test]
    fn just_over_half_uses_large_arc() {
        let path = describe_arc(100.0, 100.0, 50.0, 0.0, 180.1);
        assert_eq!(large_arc_flag(&path), "1");
    }

    #[test]
    fn flag_set_exactly_when_span_exceeds_180() {
        // Sweep start/end pairs over the full range.
        let mut starts = vec![0.0];
        starts.extend((1..=7).map(|i| i as f64 * 45.0));
        for &start in &starts {
            let mut end = start + 10.0;
            while end <= 360.0 {
                let path = describe_arc(0.0, 0.0, 10.0, start, end);
                let expected = if end - start > 180.0 { "1" } else { "0" };
                assert_eq!(
                    large_arc_flag(&path),
                    expected,
                    "span {start}..{end} chose the wrong arc"
                );
                end += 10.0;
            }
        }
    }

    #[test]
    fn degenerate_span_is_a_legal_path() {
        let path = describe_arc(100.0, 100.0, 50.0, 45.0, 45.0);
        assert!(path.starts_with("M 100 100"));
        assert!(path.ends_with('Z'));
        // Arc start and end coincide: zero visible area, no error.
        let (x, y) = polar_to_cartesian(100.0, 100.0, 50.0, 45.0);
        assert!(path.contains(&format!("L {} {}", fmt_num(x), fmt_num(y))));
        assert!(path.contains(&format!("A 50 50 0 0 0 {} {}", fmt_num(x), fmt_num(y))));
    }

    #[test]
    fn wedge_runs_center_start_arc_end_close() {
        let path = describe_arc(200.0, 200.0, 160.0, 0.0, 90.0);
        // Starts at the center, lines to the end-angle point, arcs back
        // to the start-angle point (sweep 0 = counter-clockwise in SVG
        // screen coordinates, which matches the clockwise-from-top
        // angle convention), and closes.
        assert!(path.starts_with("M 200 200 L 360 200 A 160 160 0 0 0 200 40 Z"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  compute_scale / normalize_to_pixels
// ═══════════════════════════════════════════════════════════════════

mod scaling {
    use super::*;

    #[test]
    fn empty_series_returns_floor() {
        assert_close(compute_scale(&[], 10.0), 10.0);
    }

    #[test]
    fn floor_wins_when_values_are_below_it() {
        assert_close(compute_scale(&[3.0, 7.0, 2.0], 10.0), 10.0);
    }

    #[test]
    fn max_wins_when_above_floor() {
        assert_close(compute_scale(&[3.0, 7.0, 22.0], 10.0), 22.0);
    }

    #[test]
    fn all_zero_series_returns_floor() {
        assert_close(compute_scale(&[0.0, 0.0, 0.0], 1.0), 1.0);
    }

    #[test]
    fn single_value_above_floor() {
        assert_close(compute_scale(&[150.5], 10.0), 150.5);
    }

    #[test]
    fn zero_max_never_divides() {
        for value in [0.0, 1.0, 999.0] {
            for extent in [0.0, 100.0, 250.0] {
                assert_close(normalize_to_pixels(value, 0.0, extent), 0.0);
            }
        }
    }

    #[test]
    fn scales_linearly() {
        assert_close(normalize_to_pixels(50.0, 100.0, 300.0), 150.0);
        assert_close(normalize_to_pixels(100.0, 100.0, 300.0), 300.0);
        assert_close(normalize_to_pixels(0.0, 100.0, 300.0), 0.0);
    }

    #[test]
    fn value_equal_to_scale_fills_the_extent() {
        let scale = compute_scale(&[42.0], 10.0);
        assert_close(normalize_to_pixels(42.0, scale, 200.0), 200.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  fmt_num
// ═══════════════════════════════════════════════════════════════════

mod formatting {
    use super::*;

    #[test]
    fn integers_lose_their_decimals() {
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn trailing_zeros_trimmed() {
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(1.50), "1.5");
        assert_eq!(fmt_num(2.25), "2.25");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(2.0 / 3.0), "0.67");
    }

    #[test]
    fn negative_zero_normalizes() {
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(fmt_num(-40.0), "-40");
        assert_eq!(fmt_num(-2.5), "-2.5");
    }
}
