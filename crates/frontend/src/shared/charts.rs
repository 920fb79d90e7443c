//! SVG geometry for the dashboard charts.
//!
//! Everything here works in a `0 0 100 100` viewBox and returns plain
//! numbers and path strings, so the components only place them.

use std::f64::consts::PI;

/// Horizontal margin of the line chart plot area, in viewBox units
const PLOT_X_MARGIN: f64 = 5.0;
/// Top of the plot area (value = axis max)
pub const PLOT_TOP: f64 = 10.0;
/// Bottom of the plot area (value = 0)
pub const PLOT_BOTTOM: f64 = 90.0;

/// Evenly spaced axis ticks from 0 that cover `max` in `intervals` steps.
/// Steps are 1, 2, 2.5 or 5 times a power of ten.
pub fn axis_ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    if !(max > 0.0) || !max.is_finite() {
        return (0..=intervals).map(|i| i as f64).collect();
    }

    let raw = max / intervals as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    (0..=intervals).map(|i| i as f64 * step).collect()
}

/// X position of the i-th of `count` points
pub fn x_at(i: usize, count: usize) -> f64 {
    if count <= 1 {
        50.0
    } else {
        PLOT_X_MARGIN + (i as f64 / (count - 1) as f64) * (100.0 - 2.0 * PLOT_X_MARGIN)
    }
}

/// Y position of `value` on an axis running from 0 to `axis_max`
pub fn y_at(value: f64, axis_max: f64) -> f64 {
    if axis_max <= 0.0 {
        return PLOT_BOTTOM;
    }
    let ratio = (value / axis_max).clamp(0.0, 1.0);
    PLOT_BOTTOM - ratio * (PLOT_BOTTOM - PLOT_TOP)
}

/// Horizontal hover band `(left, width)` of the i-th of `count` points.
///
/// Bands meet halfway between neighbouring points and the outer ones run
/// to the plot edges, so together they cover 0..100.
pub fn hover_band(i: usize, count: usize) -> (f64, f64) {
    if count <= 1 {
        return (0.0, 100.0);
    }
    let x = x_at(i, count);
    let left = if i == 0 { 0.0 } else { (x_at(i - 1, count) + x) / 2.0 };
    let right = if i + 1 >= count {
        100.0
    } else {
        (x + x_at(i + 1, count)) / 2.0
    };
    (left, right - left)
}

pub fn series_points(values: &[f64], axis_max: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (x_at(i, values.len()), y_at(*v, axis_max)))
        .collect()
}

/// Tangent at every point for a monotone cubic curve (Fritsch-Carlson).
///
/// Interior tangents are zero at local extrema and at most twice the
/// smaller neighbouring secant, so the curve does not overshoot the data.
/// Points must have increasing x.
fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let secants: Vec<f64> = points
        .windows(2)
        .map(|w| {
            let h = w[1].0 - w[0].0;
            if h == 0.0 {
                0.0
            } else {
                (w[1].1 - w[0].1) / h
            }
        })
        .collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for k in 1..n - 1 {
        let (s0, s1) = (secants[k - 1], secants[k]);
        if s0 * s1 <= 0.0 {
            continue;
        }
        let h0 = points[k].0 - points[k - 1].0;
        let h1 = points[k + 1].0 - points[k].0;
        let weighted = (s0 * h1 + s1 * h0) / (h0 + h1);
        tangents[k] = s0.signum() * (2.0 * s0.abs()).min(2.0 * s1.abs()).min(weighted.abs());
    }
    tangents
}

/// Cubic Bézier segments `[start, control 1, control 2, end]` of the
/// monotone curve through `points`.
pub fn monotone_segments(points: &[(f64, f64)]) -> Vec<[(f64, f64); 4]> {
    if points.len() < 2 {
        return Vec::new();
    }

    let tangents = monotone_tangents(points);
    points
        .windows(2)
        .zip(tangents.windows(2))
        .map(|(p, t)| {
            let third = (p[1].0 - p[0].0) / 3.0;
            [
                p[0],
                (p[0].0 + third, p[0].1 + t[0] * third),
                (p[1].0 - third, p[1].1 - t[1] * third),
                p[1],
            ]
        })
        .collect()
}

/// SVG path of the monotone curve through the points
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    let segments = monotone_segments(points);
    let Some(first) = segments.first() else {
        return String::new();
    };

    let mut d = format!("M {:.2},{:.2}", first[0].0, first[0].1);
    for [_, c1, c2, end] in &segments {
        d.push_str(&format!(
            " C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            c1.0, c1.1, c2.0, c2.1, end.0, end.1
        ));
    }
    d
}

/// One slice of a donut chart
#[derive(Debug, Clone, PartialEq)]
pub struct DonutArc {
    /// Degrees clockwise from 12 o'clock
    pub start_deg: f64,
    pub end_deg: f64,
    pub path: String,
}

impl DonutArc {
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Donut geometry centred at (50, 50).
///
/// `pad_deg` is the gap after every slice. Zero or negative weights give
/// empty slices (start == end) so indices stay aligned with the input.
pub fn donut_arcs(weights: &[f64], inner_r: f64, outer_r: f64, pad_deg: f64) -> Vec<DonutArc> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let visible = weights.iter().filter(|w| **w > 0.0).count() as f64;
    let pad = if visible > 1.0 { pad_deg } else { 0.0 };
    let available = (360.0 - pad * visible).max(0.0);

    let mut cursor = 0.0;
    weights
        .iter()
        .map(|w| {
            let sweep = if *w > 0.0 { w / total * available } else { 0.0 };
            let start = cursor;
            let end = start + sweep;
            if *w > 0.0 {
                cursor = end + pad;
            }
            DonutArc {
                start_deg: start,
                end_deg: end,
                path: annulus_path(start, end, inner_r, outer_r),
            }
        })
        .collect()
}

/// Point at radius `r` and `deg` degrees clockwise from 12 o'clock,
/// around the donut centre (50, 50)
pub fn polar(r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0) * PI / 180.0;
    (50.0 + r * rad.cos(), 50.0 + r * rad.sin())
}

fn annulus_path(start: f64, end: f64, inner_r: f64, outer_r: f64) -> String {
    let sweep = end - start;
    if sweep <= 0.0 {
        return String::new();
    }
    // A full circle cannot be drawn with one arc command
    let end = if sweep >= 360.0 { start + 359.99 } else { end };
    let large_arc = if end - start > 180.0 { 1 } else { 0 };

    let (ox1, oy1) = polar(outer_r, start);
    let (ox2, oy2) = polar(outer_r, end);
    let (ix2, iy2) = polar(inner_r, end);
    let (ix1, iy1) = polar(inner_r, start);

    format!(
        "M {:.3},{:.3} A {r},{r} 0 {la} 1 {:.3},{:.3} L {:.3},{:.3} A {ir},{ir} 0 {la} 0 {:.3},{:.3} Z",
        ox1,
        oy1,
        ox2,
        oy2,
        ix2,
        iy2,
        ix1,
        iy1,
        r = outer_r,
        ir = inner_r,
        la = large_arc,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ticks_for_weekly_sales() {
        assert_eq!(
            axis_ticks(8900.0, 4),
            vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0]
        );
        assert_eq!(axis_ticks(89.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(axis_ticks(0.0, 4), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_axis_covers_max() {
        for max in [1.0, 7.0, 99.0, 101.0, 4321.0, 1e6] {
            let ticks = axis_ticks(max, 4);
            assert!(*ticks.last().unwrap() >= max, "max {max}");
        }
    }

    #[test]
    fn test_points_span_plot() {
        let points = series_points(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(points[0], (5.0, PLOT_BOTTOM));
        assert_eq!(points[1], (50.0, 50.0));
        assert_eq!(points[2], (95.0, PLOT_TOP));
    }

    #[test]
    fn test_single_point_is_centred() {
        assert_eq!(x_at(0, 1), 50.0);
        assert_eq!(monotone_path(&[(50.0, 50.0)]), "");
    }

    #[test]
    fn test_monotone_path_has_segment_per_gap() {
        let points = series_points(&[4200.0, 5100.0, 4800.0, 6200.0, 7500.0, 8900.0, 7200.0], 10000.0);
        let d = monotone_path(&points);
        assert!(d.starts_with("M 5.00,"));
        assert_eq!(d.matches(" C ").count(), 6);
    }

    #[test]
    fn test_monotone_curve_does_not_overshoot() {
        let points = series_points(&[4200.0, 5100.0, 4800.0, 6200.0, 7500.0, 8900.0, 7200.0], 10000.0);
        for [start, c1, c2, end] in monotone_segments(&points) {
            let lo = start.1.min(end.1) - 1e-9;
            let hi = start.1.max(end.1) + 1e-9;
            // control points inside the band keep the Bézier inside it
            assert!((lo..=hi).contains(&c1.1), "{c1:?} outside {lo}..{hi}");
            assert!((lo..=hi).contains(&c2.1), "{c2:?} outside {lo}..{hi}");
        }
    }

    #[test]
    fn test_monotone_flat_at_extrema() {
        let segments = monotone_segments(&[(0.0, 50.0), (10.0, 10.0), (20.0, 50.0)]);
        // the peak at x = 10 has a horizontal tangent
        assert_eq!(segments[0][2].1, 10.0);
        assert_eq!(segments[1][1].1, 10.0);

        let flat = monotone_segments(&[(0.0, 40.0), (10.0, 40.0), (20.0, 80.0)]);
        assert_eq!(flat[0][1].1, 40.0);
        assert_eq!(flat[0][2].1, 40.0);
    }

    #[test]
    fn test_hover_bands_tile_the_plot() {
        let count = 7;
        let mut edge = 0.0;
        for i in 0..count {
            let (left, width) = hover_band(i, count);
            assert!((left - edge).abs() < 1e-9);
            assert!(left <= x_at(i, count) && x_at(i, count) <= left + width);
            edge = left + width;
        }
        assert!((edge - 100.0).abs() < 1e-9);
        assert_eq!(hover_band(0, 1), (0.0, 100.0));
    }

    #[test]
    fn test_arc_midpoint() {
        let arcs = donut_arcs(&[1.0, 1.0], 30.0, 40.0, 0.0);
        assert!((arcs[0].mid_deg() - 90.0).abs() < 1e-9);
        let (x, y) = polar(40.0, arcs[0].mid_deg());
        assert!((x - 90.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_donut_covers_circle_minus_gaps() {
        let arcs = donut_arcs(&[45.0, 30.0, 15.0, 10.0], 32.0, 45.0, 5.0);
        assert_eq!(arcs.len(), 4);
        let swept: f64 = arcs.iter().map(|a| a.end_deg - a.start_deg).sum();
        assert!((swept + 4.0 * 5.0 - 360.0).abs() < 1e-9);
        assert_eq!(arcs[0].start_deg, 0.0);
        assert!((arcs[1].start_deg - (arcs[0].end_deg + 5.0)).abs() < 1e-9);
        assert!(arcs.iter().all(|a| a.path.ends_with('Z')));
    }

    #[test]
    fn test_donut_proportions() {
        let arcs = donut_arcs(&[3.0, 1.0], 30.0, 40.0, 0.0);
        assert!((arcs[0].end_deg - arcs[0].start_deg - 270.0).abs() < 1e-9);
        assert!((arcs[1].end_deg - arcs[1].start_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_donut_single_slice_and_empty() {
        let arcs = donut_arcs(&[10.0], 30.0, 40.0, 5.0);
        assert_eq!(arcs[0].end_deg, 360.0);
        assert!(!arcs[0].path.is_empty());
        assert!(donut_arcs(&[0.0, 0.0], 30.0, 40.0, 5.0).is_empty());
    }
}
