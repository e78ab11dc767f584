//! Rule-Cascade Shape Classifier
//!
//! Maps a [`FeatureVector`] (plus the simplified polygon, for the corner
//! alignment test) onto exactly one [`ShapeLabel`]. Rules are evaluated in
//! the order of [`Rule::CASCADE`] and the first match wins; when none
//! matches, the fallback arm of [`Verdict`] decides.
//!
//! Circle and star are checked before any vertex-count rule: a wobbly
//! circle or star can simplify to four or five vertices and would
//! otherwise be taken for a quadrilateral or pentagon.

use super::features::FeatureVector;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive a stroke is recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLabel {
    Line,
    Circle,
    Triangle,
    Square,
    Rectangle,
    Diamond,
    Pentagon,
    Star,
    Blob,
}

impl ShapeLabel {
    pub const ALL: [ShapeLabel; 9] = [
        ShapeLabel::Line,
        ShapeLabel::Circle,
        ShapeLabel::Triangle,
        ShapeLabel::Square,
        ShapeLabel::Rectangle,
        ShapeLabel::Diamond,
        ShapeLabel::Pentagon,
        ShapeLabel::Star,
        ShapeLabel::Blob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Line => "line",
            ShapeLabel::Circle => "circle",
            ShapeLabel::Triangle => "triangle",
            ShapeLabel::Square => "square",
            ShapeLabel::Rectangle => "rectangle",
            ShapeLabel::Diamond => "diamond",
            ShapeLabel::Pentagon => "pentagon",
            ShapeLabel::Star => "star",
            ShapeLabel::Blob => "blob",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Open strokes above this linearity are lines
    pub line_linearity: f64,
    /// Circularity required by the circle rule
    pub circle_circularity: f64,
    /// Minimum vertex count for the circle rule
    pub circle_min_vertices: usize,
    /// Fill ratio below which a many-cornered outline is a star
    pub star_fill_ratio: f64,
    /// Minimum vertex count for the star rule
    pub star_min_vertices: usize,
    /// Allowed misalignment of opposite diamond corners, as a fraction of
    /// the bounding box side
    pub diamond_alignment_tolerance: f64,
    /// Allowed excess of the long side over the short side, as a fraction
    /// of the short side, for a square
    pub square_aspect_tolerance: f64,
    /// Circularity at which the fallback still answers circle
    pub fallback_circle_circularity: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            line_linearity: 0.85,
            circle_circularity: 0.8,
            circle_min_vertices: 7,
            star_fill_ratio: 0.4,
            star_min_vertices: 6,
            diamond_alignment_tolerance: 0.2,
            square_aspect_tolerance: 0.3,
            fallback_circle_circularity: 0.65,
        }
    }
}

/// One step of the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    OpenLine,
    Circle,
    Star,
    Triangle,
    Quadrilateral,
    Pentagon,
}

impl Rule {
    /// Evaluation order, highest priority first
    pub const CASCADE: [Rule; 6] = [
        Rule::OpenLine,
        Rule::Circle,
        Rule::Star,
        Rule::Triangle,
        Rule::Quadrilateral,
        Rule::Pentagon,
    ];

    /// Label this rule assigns, or `None` when it does not apply
    pub fn evaluate(
        &self,
        features: &FeatureVector,
        polygon: &[Point],
        config: &ClassifierConfig,
    ) -> Option<ShapeLabel> {
        let vertices = features.vertex_count;
        match self {
            Rule::OpenLine => (!features.closed && features.linearity > config.line_linearity)
                .then_some(ShapeLabel::Line),
            Rule::Circle => (features.circularity > config.circle_circularity
                && vertices >= config.circle_min_vertices)
                .then_some(ShapeLabel::Circle),
            Rule::Star => (features.fill_ratio < config.star_fill_ratio
                && vertices >= config.star_min_vertices)
                .then_some(ShapeLabel::Star),
            Rule::Triangle => (vertices == 3).then_some(ShapeLabel::Triangle),
            Rule::Quadrilateral => {
                (vertices == 4).then(|| classify_quadrilateral(features, polygon, config))
            }
            Rule::Pentagon => (vertices == 5).then_some(ShapeLabel::Pentagon),
        }
    }
}

/// Outcome of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// A cascade rule fired
    Matched { rule: Rule, label: ShapeLabel },
    /// No rule fired
    Fallback { label: ShapeLabel },
}

impl Verdict {
    pub fn label(&self) -> ShapeLabel {
        match self {
            Verdict::Matched { label, .. } | Verdict::Fallback { label } => *label,
        }
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            Verdict::Matched { rule, .. } => Some(*rule),
            Verdict::Fallback { .. } => None,
        }
    }
}

/// Rule-cascade classifier
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, features: &FeatureVector, polygon: &[Point]) -> Verdict {
        Rule::CASCADE
            .iter()
            .find_map(|rule| {
                rule.evaluate(features, polygon, &self.config)
                    .map(|label| Verdict::Matched { rule: *rule, label })
            })
            .unwrap_or_else(|| Verdict::Fallback {
                label: self.fallback(features),
            })
    }

    fn fallback(&self, features: &FeatureVector) -> ShapeLabel {
        if features.circularity >= self.config.fallback_circle_circularity {
            ShapeLabel::Circle
        } else if features.closed {
            ShapeLabel::Blob
        } else {
            ShapeLabel::Line
        }
    }
}

/// Diamond when opposite corners line up on the axes, otherwise square or
/// rectangle by aspect ratio.
fn classify_quadrilateral(
    features: &FeatureVector,
    polygon: &[Point],
    config: &ClassifierConfig,
) -> ShapeLabel {
    let bbox = &features.bounding_box;

    if let [a, b, c, d, ..] = polygon {
        let tol_x = config.diamond_alignment_tolerance * bbox.width;
        let tol_y = config.diamond_alignment_tolerance * bbox.height;

        let horizontal_then_vertical = (a.y - c.y).abs() <= tol_y && (b.x - d.x).abs() <= tol_x;
        let vertical_then_horizontal = (a.x - c.x).abs() <= tol_x && (b.y - d.y).abs() <= tol_y;

        if horizontal_then_vertical || vertical_then_horizontal {
            return ShapeLabel::Diamond;
        }
    }

    let short = bbox.width.min(bbox.height);
    let long = bbox.width.max(bbox.height);
    if short > 0.0 && long / short - 1.0 <= config.square_aspect_tolerance {
        ShapeLabel::Square
    } else {
        ShapeLabel::Rectangle
    }
}
