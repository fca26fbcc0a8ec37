//! Drag session
//!
//! Lives from the first usable drag offset after a settle until the next
//! settle, or until the offset returns to 0.

use serde::{Deserialize, Serialize};
use slidetabs_motion::{Direction, ThresholdSnapshot};
use slidetabs_strip::TabHandle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub direction: Direction,
    /// Tab of the page being dragged away from
    pub current: TabHandle,
    /// Tab of the page being dragged toward
    pub target: TabHandle,
    /// Strip scroll offset when the target was picked
    pub origin_scroll: f64,
    /// Indicator state frozen at the threshold crossing
    pub snapshot: Option<ThresholdSnapshot>,
}

impl DragSession {
    pub fn new(
        direction: Direction,
        current: TabHandle,
        target: TabHandle,
        origin_scroll: f64,
    ) -> Self {
        Self {
            direction,
            current,
            target,
            origin_scroll,
            snapshot: None,
        }
    }

    pub fn heads_for(&self, direction: Direction, target: TabHandle) -> bool {
        self.direction == direction && self.target == target
    }

    /// Point the session at a different target.
    ///
    /// The snapshot belonged to the old target and is dropped.
    pub fn retarget(&mut self, direction: Direction, target: TabHandle, origin_scroll: f64) {
        tracing::debug!(
            from = %self.target,
            to = %target,
            direction = ?direction,
            "Drag session retargeted"
        );

        self.direction = direction;
        self.target = target;
        self.origin_scroll = origin_scroll;
        self.snapshot = None;
    }
}
