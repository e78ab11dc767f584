//! Fingertip signal stabilization
//!
//! Online per-sample smoothing applied before points reach the path buffer.

pub mod one_euro;

pub use one_euro::{AdaptiveFilter, FilterConfig, FilterState, LowPassFilter, PointFilter};
