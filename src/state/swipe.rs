// Swipe gesture tracking for mouse and touch input
use serde::{Deserialize, Serialize};

use crate::model::SwipeDirection;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeThresholds {
    /// Minimum horizontal travel in px.
    pub min_distance: f64,
    /// Maximum gesture duration in ms.
    pub max_time_ms: f64,
    /// Travel at or below this is a click, not a swipe.
    pub click_threshold: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_time_ms: 300.0,
            click_threshold: 5.0,
        }
    }
}

/// Pointer trajectory of the gesture in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
    pub current_y: f64,
    pub start_time_ms: f64,
}

/// Classifies a finished gesture by its displacement and duration.
pub fn classify(dx: f64, dy: f64, dt_ms: f64, th: &SwipeThresholds) -> Option<SwipeDirection> {
    let dist = (dx * dx + dy * dy).sqrt();
    if dt_ms > th.max_time_ms || dx.abs() < th.min_distance || dist <= th.click_threshold {
        return None;
    }
    if dx.abs() <= dy.abs() {
        return None;
    }
    if dx > 0.0 {
        Some(SwipeDirection::Right)
    } else if dx < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Idle when `sample` is `None`, tracking otherwise.
#[derive(Default, Debug, Clone)]
pub struct SwipeTracker {
    pub thresholds: SwipeThresholds,
    sample: Option<GestureSample>,
}

impl SwipeTracker {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            sample: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.sample.is_some()
    }

    /// Begins a gesture. A start while already tracking re-arms from the new point.
    pub fn start(&mut self, x: f64, y: f64, now_ms: f64) {
        self.sample = Some(GestureSample {
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
            start_time_ms: now_ms,
        });
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        if let Some(s) = self.sample.as_mut() {
            s.current_x = x;
            s.current_y = y;
        }
    }

    pub fn end(&mut self, now_ms: f64) -> Option<SwipeDirection> {
        let s = self.sample.take()?;
        classify(
            s.current_x - s.start_x,
            s.current_y - s.start_y,
            now_ms - s.start_time_ms,
            &self.thresholds,
        )
    }

    /// Pointer left the surface mid-gesture; classified like a release.
    pub fn leave(&mut self, now_ms: f64) -> Option<SwipeDirection> {
        if !self.is_tracking() {
            return None;
        }
        self.end(now_ms)
    }
}
