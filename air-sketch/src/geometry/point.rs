//! Points and Bounding Boxes
//!
//! A path is a plain `Vec<Point>` in temporal order. Coordinates are
//! normalized (0..1) while a gesture is captured and in pixel space once
//! the controller hands the frozen path to the analyzer.

use serde::{Deserialize, Serialize};

/// Chord lengths below this are treated as a single point
const DEGENERATE_LENGTH_SQ: f64 = 1e-10;

/// Point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance to the infinite line through `line_start` and `line_end`.
    ///
    /// Falls back to the direct distance to `line_start` when the two line
    /// points coincide.
    pub fn perpendicular_distance(&self, line_start: &Point, line_end: &Point) -> f64 {
        let dx = line_end.x - line_start.x;
        let dy = line_end.y - line_start.y;

        let line_length_sq = dx * dx + dy * dy;

        if line_length_sq < DEGENERATE_LENGTH_SQ {
            return self.distance_to(line_start);
        }

        // Twice the triangle area over the base
        let numerator = ((self.x - line_start.x) * dy - (self.y - line_start.y) * dx).abs();
        numerator / line_length_sq.sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    /// Scale a normalized point onto a canvas of the given size
    pub fn to_pixels(&self, width: f64, height: f64) -> Point {
        Point {
            x: self.x * width,
            y: self.y * height,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of a path, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Bounds of `points`. An empty slice yields an all-zero box.
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Larger of width and height
    pub fn extent(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

/// Total length of the polyline through `points` in order
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Arithmetic mean of the points, `None` for an empty path
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}
