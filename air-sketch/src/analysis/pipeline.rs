//! End-of-Gesture Analysis Pipeline
//!
//! Resample, simplify, measure, classify. Each stage returns a new path;
//! the stroke handed in is never modified.

use super::classifier::{Classifier, ClassifierConfig, Rule, ShapeLabel};
use super::features::{FeatureExtractor, FeatureVector, DEFAULT_CLOSURE_DISTANCE};
use super::rdp_simplification::RdpSimplifier;
use super::resampling::{resample, DEFAULT_RESAMPLE_COUNT};
use crate::geometry::{centroid, BoundingBox, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Analysis tunables (pixel units unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Points after arc-length resampling
    pub resample_count: usize,
    /// Simplify tolerance as a fraction of the larger bounding-box side
    pub simplify_epsilon_ratio: f64,
    /// Lower bound on the simplify tolerance
    pub min_simplify_epsilon: f64,
    /// Start-to-end gap below which a stroke is closed
    pub closure_distance: f64,
    /// Strokes whose larger bounding-box side is below this are ignored
    pub min_extent: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            resample_count: DEFAULT_RESAMPLE_COUNT,
            simplify_epsilon_ratio: 0.06,
            min_simplify_epsilon: 1.5,
            closure_distance: DEFAULT_CLOSURE_DISTANCE,
            min_extent: 30.0,
        }
    }
}

/// Shape descriptor handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeResult {
    pub label: ShapeLabel,
    /// Cascade rule that fired; `None` for a fallback decision
    pub rule: Option<Rule>,
    pub bounding_box: BoundingBox,
    /// Mean of the stroke points, where the object gets placed
    pub centroid: Point,
    /// Simplified stroke outline, kept for blobs only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub outline: Option<Vec<Point>>,
    pub features: FeatureVector,
}

/// Runs the full analysis over one finished stroke
#[derive(Debug, Clone, Default)]
pub struct ShapeAnalyzer {
    config: AnalysisConfig,
    classifier: Classifier,
}

impl ShapeAnalyzer {
    pub fn new(config: AnalysisConfig, classifier_config: ClassifierConfig) -> Self {
        Self {
            config,
            classifier: Classifier::new(classifier_config),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Simplify tolerance for a stroke with the given bounds
    pub fn effective_epsilon(&self, bounding_box: &BoundingBox) -> f64 {
        (self.config.simplify_epsilon_ratio * bounding_box.extent()).max(self.config.min_simplify_epsilon)
    }

    /// Classify a finished stroke.
    ///
    /// The caller is expected to have rejected strokes that are too short;
    /// degenerate input still resolves to a label.
    pub fn analyze(&self, path: &[Point]) -> ShapeResult {
        let resampled = resample(path, self.config.resample_count);
        let bounding_box = BoundingBox::from_points(&resampled);
        let epsilon = self.effective_epsilon(&bounding_box);

        let extractor = FeatureExtractor::new(self.config.closure_distance);
        let closed = extractor.is_closed(&resampled);

        let simplifier = RdpSimplifier::with_epsilon(epsilon);
        let polygon = if closed {
            merge_seam(simplifier.simplify(&close_loop(&resampled)), epsilon)
        } else {
            simplifier.simplify(&resampled)
        };

        let features = extractor.extract(&resampled, &polygon);
        debug!(
            points = path.len(),
            epsilon,
            compression = simplifier.compression_ratio(&resampled, &polygon),
            vertices = features.vertex_count,
            closed = features.closed,
            linearity = features.linearity,
            circularity = features.circularity,
            fill_ratio = features.fill_ratio,
            "Extracted stroke features"
        );

        let verdict = self.classifier.classify(&features, &polygon);
        let label = verdict.label();
        debug!(label = %label, rule = ?verdict.rule(), "Classified stroke");

        let outline = (label == ShapeLabel::Blob).then(|| simplifier.simplify(path));

        ShapeResult {
            label,
            rule: verdict.rule(),
            bounding_box,
            centroid: centroid(path).unwrap_or_default(),
            outline,
            features,
        }
    }
}

/// Copy of a closed stroke ending exactly on its first point.
///
/// A stroke that stops a few pixels short of its start leaves a chord too
/// short to measure against; closing it makes the endpoints coincide.
fn close_loop(path: &[Point]) -> Vec<Point> {
    let mut closed = path.to_vec();
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        if first != last {
            closed.push(first);
        }
    }
    closed
}

/// Drop the start/end vertex of a closed polygon when it sits on the
/// straight line between its neighbours, i.e. the stroke began mid-edge.
///
/// `polygon` is closed: its last point repeats the first. The result is re-closed on the new first vertex.
pub fn merge_seam(mut polygon: Vec<Point>, epsilon: f64) -> Vec<Point> {
    let n = polygon.len();
    if n < 4 {
        return polygon;
    }

    let seam = polygon[0];
    let before = polygon[n - 2];
    let after = polygon[1];

    if seam.perpendicular_distance(&before, &after) <= epsilon {
        polygon.pop();
        polygon.remove(0);
        polygon.push(after);
    }
    polygon
}
