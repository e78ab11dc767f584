//! 2D geometry primitives
//!
//! Points, bounding boxes and the handful of path measurements shared by
//! the capture and analysis stages.

pub mod point;

pub use point::{BoundingBox, Point};
pub use point::{centroid, path_length};
