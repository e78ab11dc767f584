//! Ramer-Douglas-Peucker Polyline Simplification
//!
//! Reduces a dense stroke to its geometrically salient vertices. The
//! vertex count of the simplified polygon is what tells a triangle from a
//! square, and the simplified outline is what gets kept for free-form blobs.

use crate::geometry::Point;

/// Default epsilon for RDP simplification (same units as the input)
pub const DEFAULT_EPSILON: f64 = 3.0;

/// RDP polyline simplification algorithm
#[derive(Debug, Clone, Copy)]
pub struct RdpSimplifier {
    /// Maximum perpendicular deviation that may be collapsed
    pub epsilon: f64,
}

impl RdpSimplifier {
    /// Create a new simplifier with default epsilon
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Create a new simplifier with custom epsilon.
    ///
    /// Negative and NaN values become zero, which keeps every point that is
    /// not exactly on its chord.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon: if epsilon > 0.0 { epsilon } else { 0.0 },
        }
    }

    /// Simplify a polyline. Inputs of two points or fewer come back unchanged.
    pub fn simplify(&self, points: &[Point]) -> Vec<Point> {
        if points.len() <= 2 {
            return points.to_vec();
        }

        let last = points.len() - 1;
        let mut keep = vec![false; points.len()];
        keep[0] = true;
        keep[last] = true;

        self.mark_range(points, 0, last, &mut keep);

        points
            .iter()
            .zip(keep)
            .filter_map(|(p, k)| k.then_some(*p))
            .collect()
    }

    /// Mark the vertices to keep strictly between `start` and `end`.
    ///
    /// The split vertex belongs to both halves but is kept once.
    fn mark_range(&self, points: &[Point], start: usize, end: usize, keep: &mut [bool]) {
        if end <= start + 1 {
            return;
        }

        let (max_dist, max_index) = Self::find_max_distance(points, start, end);

        if max_dist > self.epsilon {
            keep[max_index] = true;
            self.mark_range(points, start, max_index, keep);
            self.mark_range(points, max_index, end, keep);
        }
    }

    /// Farthest interior point from the chord `points[start]..points[end]`
    fn find_max_distance(points: &[Point], start: usize, end: usize) -> (f64, usize) {
        let chord_start = &points[start];
        let chord_end = &points[end];

        let mut max_dist = 0.0;
        let mut max_index = start;

        for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = point.perpendicular_distance(chord_start, chord_end);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }

        (max_dist, max_index)
    }

    /// Fraction of points removed by simplification
    pub fn compression_ratio(&self, original: &[Point], simplified: &[Point]) -> f64 {
        if original.is_empty() {
            return 1.0;
        }
        1.0 - (simplified.len() as f64 / original.len() as f64)
    }
}

impl Default for RdpSimplifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Simplify `points` with the given tolerance
pub fn simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    RdpSimplifier::with_epsilon(epsilon).simplify(points)
}
