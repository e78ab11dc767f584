//! Gesture Controller
//!
//! Boundary between the hand tracker and the analysis core. The tracker
//! delivers one [`Frame`] per camera frame: the normalized fingertip
//! position (if a hand was found) and whether the external pinch detector
//! currently reports an active gesture.
//!
//! Filter and path buffer live in a [`GestureSession`] that is created when
//! a gesture starts and dropped when it ends, so nothing from one stroke
//! leaks into the next.

use crate::analysis::{ShapeAnalyzer, ShapeResult};
use crate::capture::PathBuffer;
use crate::filter::{FilterConfig, PointFilter};
use crate::geometry::{BoundingBox, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Capture-side tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Minimum normalized distance between accepted path points
    pub movement_threshold: f64,
    /// Gestures with fewer accepted points are discarded as noise
    pub min_gesture_points: usize,
    /// Consecutive hand-less frames tolerated before a gesture is ended
    pub max_hand_loss_frames: u32,
    /// Canvas size used to convert normalized points to pixels
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            movement_threshold: 0.005,
            min_gesture_points: 6,
            max_hand_loss_frames: 15,
            canvas_width: 1280.0,
            canvas_height: 720.0,
        }
    }
}

/// One tracker frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Normalized fingertip position, `None` when no hand was detected
    #[serde(default)]
    pub point: Option<Point>,
    /// Pinch detector state
    pub active: bool,
}

impl Frame {
    pub fn tracked(x: f64, y: f64, active: bool) -> Self {
        Self {
            point: Some(Point::new(x, y)),
            active,
        }
    }

    pub fn lost() -> Self {
        Self {
            point: None,
            active: false,
        }
    }
}

/// Why a finished gesture produced no shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DiscardReason {
    TooFewPoints { count: usize, required: usize },
    TooSmall { extent: f64, required: f64 },
}

/// A recognized gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedGesture {
    /// Filtered, decimated points in normalized coordinates
    pub path: Vec<Point>,
    pub result: ShapeResult,
}

/// Controller output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    Started,
    Completed(CompletedGesture),
    Discarded(DiscardReason),
}

/// Per-gesture filter and buffer
#[derive(Debug, Clone)]
pub struct GestureSession {
    filter: PointFilter,
    buffer: PathBuffer,
}

impl GestureSession {
    pub fn new(filter_config: FilterConfig, movement_threshold: f64) -> Self {
        Self {
            filter: PointFilter::new(filter_config),
            buffer: PathBuffer::with_threshold(movement_threshold),
        }
    }

    /// Filter a raw sample and offer it to the path buffer
    pub fn feed(&mut self, raw: Point) -> bool {
        let smoothed = self.filter.filter(raw);
        self.buffer.append(smoothed)
    }

    pub fn points(&self) -> &[Point] {
        self.buffer.points()
    }
}

/// Drives filtering, accumulation and analysis for a single hand
pub struct GestureController {
    filter_config: FilterConfig,
    config: CaptureConfig,
    analyzer: ShapeAnalyzer,
    session: Option<GestureSession>,
    lost_frames: u32,
}

impl GestureController {
    pub fn new(filter_config: FilterConfig, config: CaptureConfig, analyzer: ShapeAnalyzer) -> Self {
        Self {
            filter_config,
            config,
            analyzer,
            session: None,
            lost_frames: 0,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    /// Points accepted so far in the gesture in progress
    pub fn current_path(&self) -> &[Point] {
        self.session.as_ref().map(|s| s.points()).unwrap_or(&[])
    }

    /// Feed one tracker frame
    pub fn process(&mut self, frame: Frame) -> Option<GestureEvent> {
        let Some(raw) = frame.point else {
            self.lost_frames = self.lost_frames.saturating_add(1);
            if self.is_drawing() && self.lost_frames > self.config.max_hand_loss_frames {
                debug!(lost_frames = self.lost_frames, "Hand lost, ending gesture");
                return self.finish();
            }
            return None;
        };
        self.lost_frames = 0;

        if frame.active {
            let started = self.session.is_none();
            let (filter_config, threshold) = (self.filter_config, self.config.movement_threshold);
            let session = self
                .session
                .get_or_insert_with(|| GestureSession::new(filter_config, threshold));
            session.feed(raw);

            if started {
                debug!("Gesture started");
                return Some(GestureEvent::Started);
            }
            None
        } else {
            self.finish()
        }
    }

    /// End the gesture in progress, if any, and analyse it
    pub fn finish(&mut self) -> Option<GestureEvent> {
        let session = self.session.take()?;
        let path = session.buffer.snapshot();

        if path.len() < self.config.min_gesture_points {
            debug!(
                points = path.len(),
                required = self.config.min_gesture_points,
                "Gesture too short, discarding"
            );
            return Some(GestureEvent::Discarded(DiscardReason::TooFewPoints {
                count: path.len(),
                required: self.config.min_gesture_points,
            }));
        }

        let pixels: Vec<Point> = path
            .iter()
            .map(|p| p.to_pixels(self.config.canvas_width, self.config.canvas_height))
            .collect();

        let extent = BoundingBox::from_points(&pixels).extent();
        let required = self.analyzer.config().min_extent;
        if extent < required {
            debug!(extent, required, "Gesture too small, discarding");
            return Some(GestureEvent::Discarded(DiscardReason::TooSmall { extent, required }));
        }

        let result = self.analyzer.analyze(&pixels);
        info!(label = %result.label, points = path.len(), "Gesture recognized");

        Some(GestureEvent::Completed(CompletedGesture { path, result }))
    }

    /// Drop the gesture in progress without analysing it
    pub fn cancel(&mut self) {
        self.session = None;
        self.lost_frames = 0;
    }
}
