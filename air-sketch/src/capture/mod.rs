//! Stroke capture
//!
//! Turns the continuous filtered fingertip stream into a discrete path.

pub mod path_buffer;

pub use path_buffer::PathBuffer;
