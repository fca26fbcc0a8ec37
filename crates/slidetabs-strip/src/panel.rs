//! Panel capability
//!
//! Anything can be handed to the strip as a [`Widget`], but only widgets
//! that expose the [`Panel`] capability (a label and its measured content
//! width) become tabs. The check happens once, at registration.

pub trait Panel {
    /// Stable identity of the panel, unique within one strip
    fn key(&self) -> &str;

    /// Text shown in the tab label
    fn label(&self) -> &str;

    /// Width the label needs for its content; 0 while not yet measured
    fn min_content_width(&self) -> f64 {
        0.0
    }
}

pub trait Widget {
    /// Human readable widget type, used in error reports
    fn kind(&self) -> &str;

    fn as_panel(&self) -> Option<&dyn Panel> {
        None
    }
}
