//! Gesture orchestration
//!
//! Feeds tracker frames through filtering and capture, and runs the
//! analysis pipeline when a gesture ends.

pub mod controller;

pub use controller::{
    CaptureConfig, CompletedGesture, DiscardReason, Frame, GestureController, GestureEvent,
    GestureSession,
};
