//! Arc-Length Resampling
//!
//! Redistributes a polyline onto a fixed number of points spaced evenly
//! along its length, so that vertex counting downstream does not depend on
//! how fast the stroke was drawn.

use crate::geometry::{path_length, Point};

/// Default number of resampled points
pub const DEFAULT_RESAMPLE_COUNT: usize = 100;

/// Resample `points` to exactly `n` points at equal arc-length spacing.
///
/// The first output point is the first input point. Inputs with fewer than
/// two points are returned unchanged. If rounding leaves the walk short of
/// `n` points, the final input point is repeated to make up the count.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    if n == 0 {
        return Vec::new();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut resampled = Vec::with_capacity(n);
    resampled.push(first);

    let total = path_length(points);
    if n > 1 && total > 0.0 {
        let interval = total / (n - 1) as f64;

        let mut accumulated = 0.0;
        let mut prev = first;
        let mut i = 1;

        while i < points.len() && resampled.len() < n {
            let curr = points[i];
            let d = prev.distance_to(&curr);

            if d > 0.0 && accumulated + d >= interval {
                let q = prev.lerp(&curr, (interval - accumulated) / d);
                resampled.push(q);
                // The rest of this edge may hold further crossings
                prev = q;
                accumulated = 0.0;
            } else {
                accumulated += d;
                prev = curr;
                i += 1;
            }
        }
    }

    while resampled.len() < n {
        resampled.push(last);
    }

    resampled
}
