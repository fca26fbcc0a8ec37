//! Motion error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("Drag progress out of range [0, 1]: {0}")]
    ProgressOutOfRange(f64),

    #[error("Non-finite {0}")]
    NonFinite(&'static str),
}
