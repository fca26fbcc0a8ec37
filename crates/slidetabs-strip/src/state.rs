//! Tab label selection state
//!
//! ```text
//! Normal  --press-->  Down
//! Down    --release-> Normal
//! ```
//!
//! Labels behave as one exclusive group: once the pager has settled exactly
//! one label is `Down`. Labels never change state on their own; the strip
//! moves them when a new tab is activated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelState {
    /// Label is not selected
    #[default]
    Normal,
    /// Label is the selected one in the group
    Down,
}

impl LabelState {
    pub fn is_down(&self) -> bool {
        matches!(self, LabelState::Down)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelState::Normal => "normal",
            LabelState::Down => "down",
        }
    }
}

impl std::fmt::Display for LabelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
