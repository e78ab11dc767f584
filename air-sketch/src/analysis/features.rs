//! Shape Feature Extraction
//!
//! Scalar descriptors the classifier works from. Everything here is
//! recomputed from the path on every call; nothing is cached.

use crate::geometry::{path_length, BoundingBox, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default maximum start-to-end gap for a closed stroke (pixels)
pub const DEFAULT_CLOSURE_DISTANCE: f64 = 60.0;

/// Descriptors of one analysed path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub bounding_box: BoundingBox,
    /// Length of the stroke as drawn, without the closing edge
    pub perimeter_length: f64,
    /// Shoelace area of the path treated as closed; sign follows winding
    pub signed_area: f64,
    pub closed: bool,
    /// Start-end distance over perimeter, 1.0 for a straight stroke
    pub linearity: f64,
    /// 4πA / P², 1.0 for a circle. P includes the closing edge so the
    /// same outline bounds A and P.
    pub circularity: f64,
    /// Area over bounding-box area
    pub fill_ratio: f64,
    pub vertex_count: usize,
}

impl FeatureVector {
    /// Absolute enclosed area
    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }
}

/// Computes [`FeatureVector`]s
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    /// Start-to-end gap below which a stroke counts as closed
    pub closure_distance: f64,
}

impl FeatureExtractor {
    pub fn new(closure_distance: f64) -> Self {
        Self { closure_distance }
    }

    /// Describe `path`, taking the vertex count from `polygon` (the
    /// simplified, resampled outline of the same stroke).
    pub fn extract(&self, path: &[Point], polygon: &[Point]) -> FeatureVector {
        let bounding_box = BoundingBox::from_points(path);
        let perimeter = path_length(path);
        let signed = signed_area(path);
        let area = signed.abs();

        FeatureVector {
            bounding_box,
            perimeter_length: perimeter,
            signed_area: signed,
            closed: self.is_closed(path),
            linearity: linearity(path),
            circularity: circularity(area, perimeter + closure_gap(path).unwrap_or(0.0)),
            fill_ratio: fill_ratio(area, &bounding_box),
            vertex_count: vertex_count(polygon),
        }
    }

    /// Whether the stroke ends within the closure distance of where it began
    pub fn is_closed(&self, path: &[Point]) -> bool {
        match closure_gap(path) {
            Some(gap) => gap < self.closure_distance,
            None => false,
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSURE_DISTANCE)
    }
}

/// Distance between first and last point
pub fn closure_gap(path: &[Point]) -> Option<f64> {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) => Some(first.distance_to(last)),
        _ => None,
    }
}

/// Shoelace formula over the path treated as a closed polygon
pub fn signed_area(path: &[Point]) -> f64 {
    if path.len() < 3 {
        return 0.0;
    }

    let n = path.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let p1 = path[i];
            let p2 = path[(i + 1) % n];
            p1.x * p2.y - p2.x * p1.y
        })
        .sum();

    twice / 2.0
}

pub fn linearity(path: &[Point]) -> f64 {
    let perimeter = path_length(path);
    if perimeter <= 0.0 {
        return 0.0;
    }
    closure_gap(path).unwrap_or(0.0) / perimeter
}

pub fn circularity(area: f64, perimeter: f64) -> f64 {
    if perimeter <= 0.0 {
        return 0.0;
    }
    4.0 * PI * area / (perimeter * perimeter)
}

pub fn fill_ratio(area: f64, bounding_box: &BoundingBox) -> f64 {
    let box_area = bounding_box.area();
    if box_area <= 0.0 {
        return 0.0;
    }
    area / box_area
}

/// Corners of a closed outline; its first and last point are the same corner
pub fn vertex_count(polygon: &[Point]) -> usize {
    polygon.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    fn regular_polygon(k: usize, radius: f64) -> Vec<Point> {
        (0..=k)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / k as f64;
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_shoelace_unit_square() {
        assert!((signed_area(&unit_square()).abs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_signed_area_follows_winding() {
        let ccw = unit_square();
        let cw: Vec<Point> = ccw.iter().rev().copied().collect();
        assert!(signed_area(&ccw) > 0.0);
        assert!(signed_area(&cw) < 0.0);
    }

    #[test]
    fn test_signed_area_degenerate() {
        assert_eq!(signed_area(&[]), 0.0);
        assert_eq!(signed_area(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), 0.0);
    }

    #[test]
    fn test_circularity_square() {
        let mut square = unit_square();
        square.push(Point::new(0.0, 0.0));
        let c = circularity(signed_area(&square).abs(), path_length(&square));
        assert!((c - PI / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_circularity_approaches_one() {
        let mut previous = 0.0;
        for k in [8, 16, 64, 256] {
            let polygon = regular_polygon(k, 100.0);
            let c = circularity(signed_area(&polygon).abs(), path_length(&polygon));
            assert!(c > previous);
            assert!(c <= 1.0);
            previous = c;
        }
        assert!(previous > 0.999);
    }

    #[test]
    fn test_circularity_of_unclosed_arc_stays_below_one() {
        // 342 degrees of a circle, ending ~31 px from its start
        let arc: Vec<Point> = (0..=100)
            .map(|i| {
                let angle = 1.9 * PI * i as f64 / 100.0;
                Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
            })
            .collect();

        let features = FeatureExtractor::default().extract(&arc, &arc);
        assert!(features.closed);
        assert!(features.circularity <= 1.0, "circularity {}", features.circularity);
        assert!(features.circularity > 0.95);

        let open_only = circularity(features.area(), features.perimeter_length);
        assert!(open_only > 1.0);
    }

    #[test]
    fn test_guarded_divisions() {
        assert_eq!(circularity(10.0, 0.0), 0.0);
        assert_eq!(fill_ratio(10.0, &BoundingBox::default()), 0.0);
        assert_eq!(linearity(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)]), 0.0);
        assert_eq!(linearity(&[]), 0.0);
    }

    #[test]
    fn test_linearity() {
        let straight: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 0.0)).collect();
        assert!((linearity(&straight) - 1.0).abs() < 1e-12);

        let bent = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
        assert!((linearity(&bent) - 5.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_fill_ratio_square() {
        let square = unit_square();
        let bbox = BoundingBox::from_points(&square);
        assert!((fill_ratio(signed_area(&square).abs(), &bbox) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_closed_detection() {
        let extractor = FeatureExtractor::new(5.0);
        let open = vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(10.0, 0.0)];
        let closed = vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(3.0, 0.0)];

        assert!(!extractor.is_closed(&open));
        assert!(extractor.is_closed(&closed));
        assert!(!extractor.is_closed(&[]));
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(vertex_count(&[]), 0);
        assert_eq!(vertex_count(&regular_polygon(5, 1.0)), 5);
    }

    #[test]
    fn test_extract() {
        let mut square = unit_square();
        square.push(Point::new(0.0, 0.0));
        let extractor = FeatureExtractor::new(0.5);

        let features = extractor.extract(&square, &square);

        assert!(features.closed);
        assert_eq!(features.vertex_count, 4);
        assert!((features.perimeter_length - 4.0).abs() < 1e-12);
        assert!((features.area() - 1.0).abs() < 1e-12);
        assert!((features.fill_ratio - 1.0).abs() < 1e-12);
        assert_eq!(features.linearity, 0.0);
        assert_eq!(features.bounding_box.width, 1.0);
    }
}
