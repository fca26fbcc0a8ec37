//! SlideTabs Core
//!
//! Keeps a tab strip in sync with a swipeable pager.
//! The pager reports drag offsets while a swipe is in flight and an index
//! once it settles; the controller turns both into indicator geometry,
//! strip scroll offsets and tab widths for the rendering side.

mod config;
mod controller;
mod error;
mod page;
mod session;
mod shared;
mod surface;
mod trigger;

pub use config::TabsConfig;
pub use controller::{IgnoreReason, OffsetOutcome, PagerSyncController, SyncPhase};
pub use error::CoreError;
pub use page::{PageView, TabsSurface};
pub use session::DragSession;
pub use shared::SharedController;
pub use surface::{Frame, RecordingSurface};
pub use trigger::{LayoutReason, LayoutTrigger};

// Re-export the building blocks
pub use slidetabs_motion::{
    Bounds, ContentViewport, Direction, Indicator, MotionError, Progress, ScrollConversion,
    Threshold, ThresholdSnapshot,
};
pub use slidetabs_strip::{LabelState, Panel, StripError, Tab, TabHandle, TabStrip, Widget};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
