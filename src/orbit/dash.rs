//! Dash pattern support for orbit polylines.
//!
//! A dashed line is stroked by walking the cumulative arc length of the
//! polyline and alternating between `dash_size` of ink and `gap_size` of
//! nothing. The pattern is anchored at the first vertex so it stays put while
//! the camera moves.

use bevy::math::DVec3;

/// Cumulative distance along the polyline at each vertex.
///
/// The first entry is always zero and the sequence never decreases.
pub fn line_distances(points: &[DVec3]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(points.len());
    let mut total = 0.0;

    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance(*point);
        }
        distances.push(total);
    }

    distances
}

/// Split a polyline into the visible pieces of a dash/gap pattern.
///
/// Each returned pair is the start and end of one straight piece of ink; a
/// dash that spans a vertex is emitted as several pieces. A non-positive
/// `gap_size` returns every segment of the polyline; a non-positive
/// `dash_size` returns nothing. Segments with a NaN or infinite length are
/// left out.
pub fn dash_segments(points: &[DVec3], dash_size: f64, gap_size: f64) -> Vec<[DVec3; 2]> {
    if dash_size <= 0.0 {
        return Vec::new();
    }
    if gap_size <= 0.0 {
        return points.windows(2).map(|w| [w[0], w[1]]).collect();
    }

    let period = dash_size + gap_size;
    let distances = line_distances(points);
    let mut pieces = Vec::new();

    for (i, window) in points.windows(2).enumerate() {
        let (start, end) = (window[0], window[1]);
        let (d0, d1) = (distances[i], distances[i + 1]);
        let length = d1 - d0;
        if !length.is_finite() || length <= 0.0 {
            continue;
        }

        // Walk every dash interval [k·period, k·period + dash) overlapping [d0, d1].
        let mut k = (d0 / period).floor();
        loop {
            let dash_start = k * period;
            if dash_start >= d1 {
                break;
            }
            let lo = dash_start.max(d0);
            let hi = (dash_start + dash_size).min(d1);
            if hi > lo {
                pieces.push([
                    start.lerp(end, (lo - d0) / length),
                    start.lerp(end, (hi - d0) / length),
                ]);
            }
            k += 1.0;
        }
    }

    pieces
}
