//! Tab width distribution
//!
//! Three regimes, picked from the measured minimum widths:
//! - cramped: the minimums together exceed the strip, every tab keeps its
//!   minimum and the strip scrolls horizontally;
//! - uneven: some tab's fair share is below its minimum, widths are scaled
//!   proportionally to the minimums so they fill the strip;
//! - even: every tab gets `strip_width / len`.

use crate::tab::Tab;

/// Assign `display_width` to every tab.
///
/// No-op until at least one tab has been measured.
pub fn distribute(strip_width: f64, tabs: &mut [Tab]) {
    let min_widths: Vec<f64> = tabs
        .iter()
        .map(|t| t.min_content_width)
        .filter(|w| *w > 0.0)
        .collect();

    if min_widths.is_empty() {
        return;
    }

    let total_min: f64 = min_widths.iter().sum();
    let count = tabs.len() as f64;
    let ratio = strip_width / total_min;
    let use_ratio = min_widths.iter().any(|w| strip_width / count < *w);
    let cramped = total_min > strip_width;

    for tab in tabs.iter_mut() {
        tab.display_width = if cramped {
            tab.min_content_width
        } else if use_ratio {
            tab.min_content_width * ratio
        } else {
            strip_width / count
        };
    }

    tracing::trace!(
        strip_width,
        total_min,
        cramped,
        use_ratio,
        tabs = tabs.len(),
        "Distributed tab widths"
    );
}
