//! Tab strip error types

use thiserror::Error;

use crate::tab::TabHandle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StripError {
    #[error("Invalid panel type: {0} does not provide a tab label")]
    InvalidPanelType(String),

    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Panel already registered: {0}")]
    DuplicatePanel(String),

    #[error("Invalid width: {0}")]
    InvalidWidth(f64),

    #[error("Tab index {index} out of range for {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },
}

impl StripError {
    pub(crate) fn not_found(handle: TabHandle) -> Self {
        Self::NotFound(handle.to_string())
    }
}
