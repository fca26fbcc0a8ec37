//! SlideTabs Tab Strip
//!
//! The ordered set of tabs shown above a swipeable pager.
//! Tabs keep registration order, carry their own label selection state and
//! get their display widths from the strip's available width.

mod distribute;
mod error;
mod panel;
mod state;
mod strip;
mod tab;

pub use distribute::distribute;
pub use error::StripError;
pub use panel::{Panel, Widget};
pub use state::LabelState;
pub use strip::TabStrip;
pub use tab::{Tab, TabHandle};

pub type Result<T> = std::result::Result<T, StripError>;
