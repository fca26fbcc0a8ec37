//! Indicator geometry
//!
//! While the pager is dragged from the current page toward a target page the
//! indicator morphs from the current tab's bounds into the target tab's
//! bounds. Up to the threshold it stretches linearly toward the target. On
//! the first event past the threshold its bounds and the distance left to
//! drag are frozen into a [`ThresholdSnapshot`]; from there on position and
//! width are derived from the remaining distance, which lands exactly on the
//! target when the drag completes.

use serde::{Deserialize, Serialize};
use slidetabs_strip::Tab;

use crate::progress::{Progress, Threshold};

/// Horizontal extent of a tab or of the indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

impl From<&Tab> for Bounds {
    fn from(tab: &Tab) -> Self {
        Self::new(tab.x, tab.display_width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the next page
    Forward,
    /// Toward the previous page
    Backward,
}

impl Direction {
    /// Pager offsets go negative while the next page slides in
    pub fn from_offset(offset: f64) -> Self {
        if offset < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// The selection bar drawn under the tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Indicator {
    pub fn new(height: f64) -> Self {
        Self {
            x: 0.0,
            width: 0.0,
            height,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.width)
    }

    /// Move to `bounds`. Returns true if anything changed.
    pub fn snap_to(&mut self, bounds: Bounds) -> bool {
        if self.bounds() == bounds {
            return false;
        }
        self.x = bounds.x;
        self.width = bounds.width;
        true
    }
}

/// Indicator state frozen when the drag first passes the threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSnapshot {
    /// Indicator width at the crossing
    pub width: f64,
    /// Indicator x at the crossing
    pub x: f64,
    /// Drag distance still left at the crossing
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct StepInput {
    pub current: Bounds,
    pub target: Bounds,
    pub progress: Progress,
    pub direction: Direction,
    pub threshold: Threshold,
    /// Indicator as last drawn; frozen into the snapshot on crossing
    pub indicator: Bounds,
    pub snapshot: Option<ThresholdSnapshot>,
    /// Drag distance left before the target page is fully in view
    pub distance_remaining: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub bounds: Bounds,
    /// Snapshot to keep for the rest of the drag
    pub snapshot: Option<ThresholdSnapshot>,
}

/// Compute the indicator bounds for one drag event.
///
/// Returns `None` when the snapshot taken at the threshold has no distance
/// left to cover; such an event carries no movement.
pub fn step(input: &StepInput) -> Option<StepOutput> {
    let current = input.current;
    let target = input.target;

    if input.threshold.is_linear(input.progress) {
        let p = input.progress.value();
        let bounds = match input.direction {
            // left edge pinned, right edge stretches toward the target
            Direction::Forward => {
                let gap = (current.right() - target.right()).abs();
                Bounds::new(current.x, current.width + gap * p)
            }
            Direction::Backward => {
                let gap = (current.x - target.x).abs() * p;
                Bounds::new(current.x - gap, current.width + gap)
            }
        };

        return Some(StepOutput {
            bounds,
            snapshot: input.snapshot,
        });
    }

    let snapshot = input.snapshot.unwrap_or(ThresholdSnapshot {
        width: input.indicator.width,
        x: input.indicator.x,
        distance: input.distance_remaining,
    });

    if snapshot.distance == 0.0 {
        return None;
    }

    let local = (1.0 - input.distance_remaining / snapshot.distance).clamp(0.0, 1.0);
    let width = snapshot.width - (snapshot.width - target.width) * local;
    let x = match input.direction {
        Direction::Forward => current.x + (current.x - target.x).abs() * local,
        Direction::Backward => snapshot.x - (snapshot.x - target.x) * local,
    };

    if input.snapshot.is_none() {
        tracing::trace!(
            width = snapshot.width,
            x = snapshot.x,
            distance = snapshot.distance,
            "Indicator crossed threshold"
        );
    }

    Some(StepOutput {
        bounds: Bounds::new(x, width),
        snapshot: Some(snapshot),
    })
}
