//! Tabs configuration

use serde::{Deserialize, Serialize};
use slidetabs_motion::Threshold;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Index selected when the slide set changes
    pub default_tab: usize,
    /// Height of the indicator bar
    pub indicator_height: f64,
    /// Pager move animation duration in seconds
    pub anim_duration: f64,
    /// Drag progress past which the indicator settles toward its target.
    /// Clamped into [0, 1].
    pub anim_threshold: f64,
}

impl TabsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Reject unusable values and clamp the threshold
    pub fn validated(mut self) -> Result<Self> {
        if !self.indicator_height.is_finite() || self.indicator_height < 0.0 {
            return Err(CoreError::Config(format!(
                "indicator_height must be a non-negative number, got {}",
                self.indicator_height
            )));
        }
        if !self.anim_duration.is_finite() || self.anim_duration < 0.0 {
            return Err(CoreError::Config(format!(
                "anim_duration must be a non-negative number, got {}",
                self.anim_duration
            )));
        }
        if !self.anim_threshold.is_finite() {
            return Err(CoreError::Config(format!(
                "anim_threshold must be a number, got {}",
                self.anim_threshold
            )));
        }

        self.anim_threshold = self.threshold().value();
        Ok(self)
    }

    pub fn threshold(&self) -> Threshold {
        Threshold::new(self.anim_threshold)
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default_tab: 0,
            indicator_height: 2.0,
            anim_duration: 0.2,
            anim_threshold: Threshold::DEFAULT.value(),
        }
    }
}
