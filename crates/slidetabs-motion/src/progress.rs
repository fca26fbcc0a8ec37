//! Drag progress and animation threshold

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::Result;

/// Fraction of a page the drag has covered, always within [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(MotionError::NonFinite("drag progress"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(MotionError::ProgressOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Progress of a drag that moved `distance` out of `page_width`
    pub fn of_page(distance: f64, page_width: f64) -> Result<Self> {
        Self::new(distance.abs() / page_width)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Progress past which the indicator switches to its settle formula.
///
/// Out of range values are clamped into [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.8);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True while `progress` is still in the linear phase
    pub fn is_linear(self, progress: Progress) -> bool {
        progress.0 <= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}
