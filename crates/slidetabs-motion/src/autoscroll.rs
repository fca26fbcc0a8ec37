//! Tab strip autoscroll
//!
//! Keeps the drag target in view by scrolling the strip in step with the
//! drag progress. Scroll offsets are normalized: 0 is the left end of the
//! content, 1 the right end.

use crate::progress::Progress;

/// Converts a distance in strip coordinates into a scroll fraction
pub trait ScrollConversion {
    fn distance_to_scroll(&self, dx: f64, dy: f64) -> (f64, f64);
}

/// Horizontal viewport over the laid out tabs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentViewport {
    pub viewport_width: f64,
    pub content_width: f64,
}

impl ContentViewport {
    pub fn new(viewport_width: f64, content_width: f64) -> Self {
        Self {
            viewport_width,
            content_width,
        }
    }
}

impl ScrollConversion for ContentViewport {
    fn distance_to_scroll(&self, dx: f64, _dy: f64) -> (f64, f64) {
        let scrollable = self.content_width - self.viewport_width;
        if scrollable > 0.0 {
            (dx / scrollable, 0.0)
        } else {
            (0.0, 0.0)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollInput {
    /// Center of the drag target tab in strip coordinates
    pub target_center_x: f64,
    pub viewport_width: f64,
    pub content_width: f64,
    /// Scroll offset when the drag target was picked
    pub last_offset: f64,
    pub step: Progress,
}

/// New scroll offset for this drag event, or `None` to leave it alone.
///
/// The target is centred by moving from `last_offset` toward the offset that
/// would centre it, proportionally to `step`. Targets already in the half
/// viewport at either end of the content do not move the strip.
pub fn compute_scroll(input: &ScrollInput, conversion: &dyn ScrollConversion) -> Option<f64> {
    let bound_left = input.viewport_width / 2.0;
    let bound_right = input.content_width - bound_left;
    let dx = input.target_center_x - bound_left;
    let (sx, _) = conversion.distance_to_scroll(dx, 0.0);

    let last = input.last_offset;
    let distance = (last - sx).abs();
    let late = last < sx;
    let step = input.step.value();

    if late && input.target_center_x > bound_left {
        Some((last + distance * step).clamp(0.0, 1.0))
    } else if !late && input.target_center_x < bound_right {
        Some((last - distance * step).clamp(0.0, 1.0))
    } else {
        None
    }
}
