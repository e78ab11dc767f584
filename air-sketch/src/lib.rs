//! # Air Sketch
//!
//! Turns a fingertip path drawn in the air into a recognized geometric
//! shape: line, circle, triangle, square, rectangle, diamond, pentagon,
//! star, or a free-form blob.
//!
//! ## Overview
//!
//! A hand tracker delivers one normalized fingertip position per camera
//! frame together with a pinch state. While the pinch is held the position
//! is smoothed by an adaptive low-pass filter and accumulated into a
//! movement-decimated path. When the pinch is released the path is scaled
//! to canvas pixels, resampled by arc length, simplified into a polygon,
//! measured, and run through a rule cascade that names the shape.
//!
//! ## Quick Start
//!
//! ```no_run
//! use air_sketch::{Point, ShapeAnalyzer};
//!
//! let path: Vec<Point> = (0..=100)
//!     .map(|i| {
//!         let t = 2.0 * std::f64::consts::PI * i as f64 / 100.0;
//!         Point::new(400.0 + 100.0 * t.cos(), 300.0 + 100.0 * t.sin())
//!     })
//!     .collect();
//!
//! let result = ShapeAnalyzer::default().analyze(&path);
//! println!("{} at {:?}", result.label, result.centroid);
//! ```
//!
//! ## Architecture
//!
//! - [`geometry`]: points, bounding boxes, path length
//! - [`filter`]: One Euro adaptive smoothing
//! - [`capture`]: movement-decimated path buffer
//! - [`analysis`]: resampling, RDP simplification, features, classification
//! - [`gesture`]: per-frame controller that ties the stages together
//! - [`app`]: CLI and configuration management
//!
//! ## Gesture Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Tracker   │───▶│  One Euro   │───▶│ Path Buffer │───▶│  Canvas     │
//! │   Frames    │    │   Filter    │    │ (decimated) │    │  Scaling    │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                                                                 │
//!                                                                 ▼
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ ShapeResult │◀───│    Rule     │◀───│  Features   │◀───│ Resample &  │
//! │             │    │   Cascade   │    │             │    │  Simplify   │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```

pub mod geometry;
pub mod filter;
pub mod capture;
pub mod analysis;
pub mod gesture;
pub mod app;

// Re-export commonly used types
pub use analysis::{ShapeAnalyzer, ShapeLabel, ShapeResult};
pub use filter::{AdaptiveFilter, PointFilter};
pub use capture::PathBuffer;
pub use geometry::{BoundingBox, Point};
pub use gesture::{Frame, GestureController, GestureEvent};

/// Result type alias for air sketch
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for air sketch
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
