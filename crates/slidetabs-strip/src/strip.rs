//! Tab Strip
//!
//! Owns the ordered tab list, the strip width and the horizontal layout.

use crate::distribute::distribute;
use crate::error::StripError;
use crate::panel::Widget;
use crate::tab::{validate_width, Tab, TabHandle};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    /// Tabs in registration order
    tabs: Vec<Tab>,
    /// Visible width of the strip
    width: f64,
    /// Sum of display widths after the last layout
    content_width: f64,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget as a new tab.
    ///
    /// The widget must expose the panel capability; nothing is added
    /// otherwise.
    pub fn register(&mut self, widget: &dyn Widget) -> Result<TabHandle> {
        let panel = widget
            .as_panel()
            .ok_or_else(|| StripError::InvalidPanelType(widget.kind().to_string()))?;

        if self.tabs.iter().any(|t| t.key == panel.key()) {
            return Err(StripError::DuplicatePanel(panel.key().to_string()));
        }

        let tab = Tab::new(
            panel.key().to_string(),
            panel.label().to_string(),
            panel.min_content_width(),
        )?;
        let handle = tab.handle;

        tracing::info!(tab = %handle, key = %tab.key, label = %tab.label, "Registered tab");

        self.tabs.push(tab);
        Ok(handle)
    }

    /// Unregister the tab belonging to a widget
    pub fn unregister(&mut self, widget: &dyn Widget) -> Result<Tab> {
        let panel = widget
            .as_panel()
            .ok_or_else(|| StripError::InvalidPanelType(widget.kind().to_string()))?;

        let handle = self
            .tabs
            .iter()
            .find(|t| t.key == panel.key())
            .map(|t| t.handle)
            .ok_or_else(|| StripError::NotFound(panel.key().to_string()))?;

        self.remove(handle)
    }

    /// Remove a tab by handle
    pub fn remove(&mut self, handle: TabHandle) -> Result<Tab> {
        let index = self.position(handle)?;
        let tab = self.tabs.remove(index);

        tracing::info!(tab = %handle, key = %tab.key, "Removed tab");

        Ok(tab)
    }

    pub fn get(&self, handle: TabHandle) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.handle == handle)
            .ok_or_else(|| StripError::not_found(handle))
    }

    pub fn position(&self, handle: TabHandle) -> Result<usize> {
        self.tabs
            .iter()
            .position(|t| t.handle == handle)
            .ok_or_else(|| StripError::not_found(handle))
    }

    pub fn tab_at(&self, index: usize) -> Result<&Tab> {
        self.tabs.get(index).ok_or(StripError::IndexOutOfRange {
            index,
            len: self.tabs.len(),
        })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Record a label measurement. Takes effect on the next [`Self::relayout`].
    pub fn set_min_content_width(&mut self, handle: TabHandle, width: f64) -> Result<()> {
        let index = self.position(handle)?;
        self.tabs[index].set_min_content_width(width)
    }

    /// Set the visible strip width. Takes effect on the next [`Self::relayout`].
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        validate_width(width)?;
        self.width = width;
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total width of the laid out tabs; larger than [`Self::width`] when cramped
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Redistribute widths, then lay the tabs out left to right
    pub fn relayout(&mut self) {
        distribute(self.width, &mut self.tabs);
        self.layout();
    }

    /// Place tabs side by side in registration order
    pub fn layout(&mut self) {
        let mut x = 0.0;
        for tab in &mut self.tabs {
            tab.x = x;
            x += tab.display_width;
        }
        self.content_width = x;
    }

    /// Make the tab at `index` the single selected one.
    ///
    /// Returns true if its label was not already selected.
    pub fn activate(&mut self, index: usize) -> Result<bool> {
        self.tab_at(index)?;

        let mut changed = false;
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            if i == index {
                changed = tab.press();
            } else {
                tab.release();
            }
        }

        if changed {
            tracing::debug!(index, tab = %self.tabs[index].handle, "Activated tab");
        }

        Ok(changed)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.is_active())
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.is_active())
    }
}
