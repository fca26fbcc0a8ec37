//! Scripted pager

use slidetabs_core::PageView;

#[derive(Debug, Clone)]
pub struct ScriptedPager {
    count: usize,
    current: usize,
    page_width: f64,
    /// Fast swipe target of the offset being replayed
    skip: Option<usize>,
    /// Slide requested by a tab press, not settled yet
    pending: Option<usize>,
    move_duration: f64,
}

impl ScriptedPager {
    pub fn new(count: usize, page_width: f64) -> Self {
        Self {
            count,
            current: 0,
            page_width,
            skip: None,
            pending: None,
            move_duration: 0.0,
        }
    }

    pub fn set_current(&mut self, index: usize) {
        self.current = index;
    }

    pub fn set_skip(&mut self, skip: Option<usize>) {
        self.skip = skip;
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Take the slide a tab press asked for
    pub fn take_pending(&mut self) -> Option<usize> {
        self.pending.take()
    }

    pub fn move_duration(&self) -> f64 {
        self.move_duration
    }
}

impl PageView for ScriptedPager {
    fn page_width(&self) -> f64 {
        self.page_width
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn next_index(&self) -> Option<usize> {
        let next = self.current + 1;
        (next < self.count).then_some(next)
    }

    fn previous_index(&self) -> Option<usize> {
        self.current.checked_sub(1)
    }

    fn skip_index(&self) -> Option<usize> {
        self.skip.filter(|i| *i < self.count)
    }

    fn load_slide(&mut self, index: usize) {
        self.pending = Some(index);
    }

    fn set_move_duration(&mut self, seconds: f64) {
        self.move_duration = seconds;
    }
}
