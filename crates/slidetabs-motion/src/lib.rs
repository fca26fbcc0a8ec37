//! SlideTabs Motion
//!
//! Pure geometry driven by the pager's drag progress:
//! - where the selection indicator sits and how wide it is,
//! - how far the tab strip scrolls to keep the target tab in view.
//!
//! Nothing in here owns state between events; callers keep the returned
//! values and feed them back in.

mod autoscroll;
mod error;
mod geometry;
mod progress;

pub use autoscroll::{compute_scroll, ContentViewport, ScrollConversion, ScrollInput};
pub use error::MotionError;
pub use geometry::{step, Bounds, Direction, Indicator, StepInput, StepOutput, ThresholdSnapshot};
pub use progress::{Progress, Threshold};

pub type Result<T> = std::result::Result<T, MotionError>;
