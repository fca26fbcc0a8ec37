//! Layout trigger
//!
//! Resizes, tab set changes and label measurements all invalidate the tab
//! widths. Requests are coalesced: any number of them between two flushes
//! result in a single redistribution.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutReason {
    Resize,
    TabsChanged,
    Measured,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutTrigger {
    /// Requests received since the last flush
    pending: u32,
}

impl LayoutTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, reason: LayoutReason) {
        tracing::trace!(reason = ?reason, pending = self.pending, "Layout scheduled");
        self.pending = self.pending.saturating_add(1);
    }

    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Clear the trigger, returning how many requests it coalesced
    pub fn take(&mut self) -> Option<u32> {
        match std::mem::take(&mut self.pending) {
            0 => None,
            n => Some(n),
        }
    }
}
