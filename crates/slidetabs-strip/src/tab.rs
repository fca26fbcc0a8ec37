//! Tab data structure
//!
//! A tab is the strip-side half of a registered panel: its label, the width
//! its content needs, the width it is actually given and where it sits in
//! strip coordinates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StripError;
use crate::state::LabelState;
use crate::Result;

/// Opaque handle returned by registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabHandle(Uuid);

impl TabHandle {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TabHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Handle given out at registration
    pub handle: TabHandle,
    /// Key of the panel this tab belongs to
    pub key: String,
    /// Label text
    pub label: String,
    /// Width the label content needs (0 = not measured yet)
    pub min_content_width: f64,
    /// Width assigned by the strip
    pub display_width: f64,
    /// Left edge in strip coordinates
    pub x: f64,
    /// Selection state of the label
    pub state: LabelState,
}

impl Tab {
    pub fn new(key: String, label: String, min_content_width: f64) -> Result<Self> {
        validate_width(min_content_width)?;

        Ok(Self {
            handle: TabHandle::new(),
            key,
            label,
            min_content_width,
            display_width: 0.0,
            x: 0.0,
            state: LabelState::Normal,
        })
    }

    /// Record a new content measurement
    pub fn set_min_content_width(&mut self, width: f64) -> Result<()> {
        validate_width(width)?;
        self.min_content_width = width;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.state.is_down()
    }

    /// Select the label. Returns true if the state changed.
    pub fn press(&mut self) -> bool {
        self.set_state(LabelState::Down)
    }

    /// Deselect the label. Returns true if the state changed.
    pub fn release(&mut self) -> bool {
        self.set_state(LabelState::Normal)
    }

    fn set_state(&mut self, state: LabelState) -> bool {
        if self.state == state {
            return false;
        }

        tracing::trace!(
            tab = %self.handle,
            from = %self.state,
            to = %state,
            "Label state transition"
        );

        self.state = state;
        true
    }

    /// Right edge in strip coordinates
    pub fn right(&self) -> f64 {
        self.x + self.display_width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.display_width / 2.0
    }
}

/// Widths are lengths: finite and never negative.
pub(crate) fn validate_width(width: f64) -> Result<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(StripError::InvalidWidth(width));
    }
    Ok(())
}
