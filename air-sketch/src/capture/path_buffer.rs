//! Gesture Path Buffer
//!
//! Accumulates filtered fingertip points for the gesture in progress. A
//! sample only becomes a vertex once it has moved far enough from the last
//! accepted one, so a finger held still does not pile up jitter vertices.

use crate::geometry::Point;

/// Default minimum movement between accepted points (normalized units)
pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 0.005;

/// Movement-decimated point accumulator for one gesture
#[derive(Debug, Clone)]
pub struct PathBuffer {
    movement_threshold: f64,
    points: Vec<Point>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_MOVEMENT_THRESHOLD)
    }

    /// Negative thresholds are treated as zero.
    pub fn with_threshold(movement_threshold: f64) -> Self {
        Self {
            movement_threshold: movement_threshold.max(0.0),
            points: Vec::new(),
        }
    }

    pub fn movement_threshold(&self) -> f64 {
        self.movement_threshold
    }

    /// Append `point` if the buffer is empty or it lies farther than the
    /// movement threshold from the last accepted point.
    ///
    /// Returns whether the point was kept.
    pub fn append(&mut self, point: Point) -> bool {
        let accept = match self.points.last() {
            Some(last) => last.distance_to(&point) > self.movement_threshold,
            None => true,
        };
        if accept {
            self.points.push(point);
        }
        accept
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Copy of the accepted points; the buffer keeps its contents
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.clone()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_point_always_accepted() {
        let mut buffer = PathBuffer::with_threshold(10.0);
        assert!(buffer.append(Point::new(0.5, 0.5)));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_small_moves_rejected() {
        let mut buffer = PathBuffer::with_threshold(0.01);
        buffer.append(Point::new(0.5, 0.5));

        assert!(!buffer.append(Point::new(0.505, 0.5)));
        assert!(!buffer.append(Point::new(0.5, 0.508)));
        assert!(buffer.append(Point::new(0.52, 0.5)));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_threshold_measured_from_last_accepted() {
        let mut buffer = PathBuffer::with_threshold(0.01);
        buffer.append(Point::new(0.0, 0.0));

        // Creeping in sub-threshold steps never advances the anchor
        for i in 1..=4 {
            assert!(!buffer.append(Point::new(0.002 * i as f64, 0.0)));
        }
        assert!(buffer.append(Point::new(0.012, 0.0)));
        assert_eq!(buffer.last(), Some(&Point::new(0.012, 0.0)));
    }

    #[test]
    fn test_exact_threshold_rejected() {
        let mut buffer = PathBuffer::with_threshold(1.0);
        buffer.append(Point::new(0.0, 0.0));
        assert!(!buffer.append(Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_snapshot_does_not_clear() {
        let mut buffer = PathBuffer::with_threshold(0.0);
        buffer.append(Point::new(0.0, 0.0));
        buffer.append(Point::new(1.0, 0.0));

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(buffer.len(), 2);

        buffer.append(Point::new(2.0, 0.0));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut buffer = PathBuffer::new();
        buffer.append(Point::new(0.1, 0.1));
        buffer.reset();

        assert!(buffer.is_empty());
        assert!(buffer.append(Point::new(0.1, 0.1)));
    }

    #[test]
    fn test_negative_threshold_clamped() {
        let buffer = PathBuffer::with_threshold(-1.0);
        assert_eq!(buffer.movement_threshold(), 0.0);
    }
}
