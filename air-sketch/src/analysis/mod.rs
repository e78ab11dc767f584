//! Stroke analysis and shape recognition
//!
//! This module turns a finished, noisy stroke into a shape label using:
//! - Arc-length resampling
//! - Ramer-Douglas-Peucker polyline simplification
//! - Scalar feature extraction (closure, linearity, circularity, fill)
//! - An ordered rule cascade over those features

pub mod resampling;
pub mod rdp_simplification;
pub mod features;
pub mod classifier;
pub mod pipeline;

pub use classifier::{Classifier, ClassifierConfig, Rule, ShapeLabel, Verdict};
pub use features::{FeatureExtractor, FeatureVector};
pub use pipeline::{AnalysisConfig, ShapeAnalyzer, ShapeResult};
pub use rdp_simplification::{simplify, RdpSimplifier};
pub use resampling::resample;
