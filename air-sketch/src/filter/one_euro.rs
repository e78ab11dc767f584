//! One Euro Adaptive Filter
//!
//! Low-pass filter whose cutoff frequency follows the signal's speed: slow
//! or steady motion is smoothed hard (hand tremor disappears), fast motion
//! widens the cutoff so deliberate strokes do not lag behind the finger.
//!
//! Each axis owns its own [`AdaptiveFilter`]; [`PointFilter`] just pairs two
//! of them without any coupling between x and y.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tunables for the adaptive filter.
///
/// Positions are normalized to `[0, 1]`, so speeds are in screen widths
/// (or heights) per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Cutoff frequency at rest (Hz). Lower = smoother holds.
    pub min_cutoff: f64,
    /// Cutoff increase (Hz) per normalized unit/second of filtered speed.
    /// Drawing runs at roughly 0.2 to 0.5 units/s.
    pub beta: f64,
    /// Cutoff used to smooth the derivative estimate (Hz)
    pub derivative_cutoff: f64,
    /// Assumed tracker frame rate (Hz)
    pub sample_rate_hz: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_cutoff: 1.2,
            beta: 60.0,
            derivative_cutoff: 1.0,
            sample_rate_hz: 30.0,
        }
    }
}

/// Smoothing factor of a first-order low-pass at `cutoff` Hz sampled at `rate` Hz
pub fn smoothing_factor(cutoff: f64, rate: f64) -> f64 {
    let te = 1.0 / rate;
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / te)
}

/// Plain exponential smoother with a fixed factor
#[derive(Debug, Clone, Copy)]
pub struct LowPassFilter {
    alpha: f64,
    state: Option<f64>,
}

impl LowPassFilter {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, state: None }
    }

    /// Fixed-cutoff filter at `cutoff` Hz
    pub fn with_cutoff(cutoff: f64, rate: f64) -> Self {
        Self::new(smoothing_factor(cutoff, rate))
    }

    pub fn filter(&mut self, value: f64) -> f64 {
        let filtered = match self.state {
            Some(prev) => prev + self.alpha * (value - prev),
            None => value,
        };
        self.state = Some(filtered);
        filtered
    }

    pub fn reset(&mut self) {
        self.state = None;
    }
}

/// Per-axis filter memory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub last_filtered: f64,
    pub last_raw: f64,
    /// Low-passed sample-to-sample speed (units/second)
    pub derivative: f64,
}

/// One Euro filter for a single axis
#[derive(Debug, Clone)]
pub struct AdaptiveFilter {
    config: FilterConfig,
    state: Option<FilterState>,
}

impl AdaptiveFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config, state: None }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Current memory, `None` until the first sample
    pub fn state(&self) -> Option<&FilterState> {
        self.state.as_ref()
    }

    /// Filter the next sample. The first sample after construction or
    /// [`reset`](Self::reset) passes through unchanged.
    pub fn filter(&mut self, raw: f64) -> f64 {
        let Some(state) = self.state.as_mut() else {
            self.state = Some(FilterState {
                last_filtered: raw,
                last_raw: raw,
                derivative: 0.0,
            });
            return raw;
        };

        let rate = self.config.sample_rate_hz;

        let dx = (raw - state.last_raw) * rate;
        let a_d = smoothing_factor(self.config.derivative_cutoff, rate);
        state.derivative += a_d * (dx - state.derivative);

        let cutoff = self.config.min_cutoff + self.config.beta * state.derivative.abs();
        let a = smoothing_factor(cutoff, rate);

        // Incremental form: a steady input leaves the output bit-for-bit unchanged
        state.last_filtered += a * (raw - state.last_filtered);
        state.last_raw = raw;

        state.last_filtered
    }

    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Default for AdaptiveFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

/// Independent x/y filter pair for fingertip positions
#[derive(Debug, Clone)]
pub struct PointFilter {
    pub x: AdaptiveFilter,
    pub y: AdaptiveFilter,
}

impl PointFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            x: AdaptiveFilter::new(config),
            y: AdaptiveFilter::new(config),
        }
    }

    pub fn filter(&mut self, point: Point) -> Point {
        Point::new(self.x.filter(point.x), self.y.filter(point.y))
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

impl Default for PointFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
