//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab strip error: {0}")]
    Strip(#[from] slidetabs_strip::StripError),

    #[error("Motion error: {0}")]
    Motion(#[from] slidetabs_motion::MotionError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid page width: {0}")]
    InvalidPageWidth(f64),
}
