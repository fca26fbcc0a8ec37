//! Collaborator interfaces
//!
//! The pager (page view) is the source of drag offsets and of the
//! authoritative selected index. The surface is whatever draws the strip.

use slidetabs_strip::Tab;

pub trait PageView {
    /// Width of one page; drag offsets are measured against it
    fn page_width(&self) -> f64;

    fn current_index(&self) -> usize;

    fn next_index(&self) -> Option<usize>;

    fn previous_index(&self) -> Option<usize>;

    /// Page a fast swipe is heading for, beyond the immediate neighbour
    fn skip_index(&self) -> Option<usize> {
        None
    }

    /// Ask the pager to move to a page; it reports back with a settle
    fn load_slide(&mut self, index: usize);

    fn set_move_duration(&mut self, _seconds: f64) {}
}

pub trait TabsSurface {
    fn on_indicator_update(&mut self, x: f64, width: f64);

    /// Normalized strip scroll offset in [0, 1]
    fn on_scroll_update(&mut self, offset: f64);

    fn on_tab_widths_update(&mut self, tabs: &[Tab]);
}
