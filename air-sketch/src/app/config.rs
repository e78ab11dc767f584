//! Configuration Management

use crate::analysis::{AnalysisConfig, ClassifierConfig, ShapeAnalyzer};
use crate::filter::FilterConfig;
use crate::gesture::{CaptureConfig, GestureController};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fingertip smoothing
    #[serde(default)]
    pub filter: FilterConfig,
    /// Path accumulation and gesture gating
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Resampling, simplification and closure
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Rule cascade thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

fn config_error(message: String) -> crate::Error {
    crate::Error::Config(message)
}

fn require_positive(name: &str, value: f64) -> Result<(), crate::Error> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(config_error(format!("{} must be > 0, got {}", name, value)))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), crate::Error> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(config_error(format!("{} must be >= 0, got {}", name, value)))
    }
}

fn require_fraction(name: &str, value: f64) -> Result<(), crate::Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(config_error(format!("{} must be in [0, 1], got {}", name, value)))
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        require_positive("filter.min_cutoff", self.filter.min_cutoff)?;
        require_positive("filter.derivative_cutoff", self.filter.derivative_cutoff)?;
        require_positive("filter.sample_rate_hz", self.filter.sample_rate_hz)?;
        require_non_negative("filter.beta", self.filter.beta)?;

        require_non_negative("capture.movement_threshold", self.capture.movement_threshold)?;
        if self.capture.min_gesture_points < 2 {
            return Err(config_error(format!(
                "capture.min_gesture_points must be >= 2, got {}",
                self.capture.min_gesture_points
            )));
        }
        require_positive("capture.canvas_width", self.capture.canvas_width)?;
        require_positive("capture.canvas_height", self.capture.canvas_height)?;

        if self.analysis.resample_count < 2 {
            return Err(config_error(format!(
                "analysis.resample_count must be >= 2, got {}",
                self.analysis.resample_count
            )));
        }
        require_fraction("analysis.simplify_epsilon_ratio", self.analysis.simplify_epsilon_ratio)?;
        require_positive("analysis.min_simplify_epsilon", self.analysis.min_simplify_epsilon)?;
        require_positive("analysis.closure_distance", self.analysis.closure_distance)?;
        require_non_negative("analysis.min_extent", self.analysis.min_extent)?;

        let c = &self.classifier;
        require_fraction("classifier.line_linearity", c.line_linearity)?;
        require_fraction("classifier.circle_circularity", c.circle_circularity)?;
        require_fraction("classifier.star_fill_ratio", c.star_fill_ratio)?;
        require_fraction("classifier.diamond_alignment_tolerance", c.diamond_alignment_tolerance)?;
        require_fraction("classifier.square_aspect_tolerance", c.square_aspect_tolerance)?;
        require_fraction("classifier.fallback_circle_circularity", c.fallback_circle_circularity)?;
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location, falling back to defaults
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".air_sketch").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| config_error(e.to_string()))
    }

    /// Analysis pipeline built from the `[analysis]` and `[classifier]` sections
    pub fn analyzer(&self) -> ShapeAnalyzer {
        ShapeAnalyzer::new(self.analysis, self.classifier)
    }

    /// Gesture controller wired with every section of this config
    pub fn controller(&self) -> GestureController {
        GestureController::new(self.filter, self.capture, self.analyzer())
    }

    /// Look up a value by dotted key, e.g. `classifier.star_fill_ratio`
    pub fn get(&self, key: &str) -> Result<Option<toml::Value>, crate::Error> {
        let root = toml::Value::try_from(self).map_err(|e| config_error(e.to_string()))?;
        Ok(key
            .split('.')
            .try_fold(&root, |value, part| value.get(part))
            .cloned())
    }

    /// Replace a value by dotted key. The new value is parsed according to
    /// the type of the current one and the result must pass validation.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), crate::Error> {
        let mut root = toml::Value::try_from(&*self).map_err(|e| config_error(e.to_string()))?;

        let slot = key
            .split('.')
            .try_fold(&mut root, |value, part| value.get_mut(part))
            .ok_or_else(|| config_error(format!("unknown configuration key '{}'", key)))?;

        *slot = parse_like(slot, raw)
            .ok_or_else(|| config_error(format!("invalid value '{}' for '{}'", raw, key)))?;

        let updated: Config = root.try_into().map_err(|e| config_error(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_like(current: &toml::Value, raw: &str) -> Option<toml::Value> {
    let raw = raw.trim();
    match current {
        toml::Value::Integer(_) => raw.parse::<i64>().ok().map(toml::Value::Integer),
        toml::Value::Float(_) => raw.parse::<f64>().ok().map(toml::Value::Float),
        toml::Value::Boolean(_) => raw.parse::<bool>().ok().map(toml::Value::Boolean),
        toml::Value::String(_) => Some(toml::Value::String(raw.trim_matches('"').to_string())),
        _ => None,
    }
}
