//! Recording surface

use serde::{Deserialize, Serialize};
use slidetabs_strip::Tab;

use crate::page::TabsSurface;

/// One update pushed to the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum Frame {
    Indicator { x: f64, width: f64 },
    Scroll { offset: f64 },
    Widths { widths: Vec<f64> },
}

/// Surface that keeps every frame it receives, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Vec<Frame>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Drain the recorded frames
    pub fn take(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }

    pub fn last_indicator(&self) -> Option<(f64, f64)> {
        self.frames.iter().rev().find_map(|f| match f {
            Frame::Indicator { x, width } => Some((*x, *width)),
            _ => None,
        })
    }

    pub fn last_scroll(&self) -> Option<f64> {
        self.frames.iter().rev().find_map(|f| match f {
            Frame::Scroll { offset } => Some(*offset),
            _ => None,
        })
    }
}

impl TabsSurface for RecordingSurface {
    fn on_indicator_update(&mut self, x: f64, width: f64) {
        self.frames.push(Frame::Indicator { x, width });
    }

    fn on_scroll_update(&mut self, offset: f64) {
        self.frames.push(Frame::Scroll { offset });
    }

    fn on_tab_widths_update(&mut self, tabs: &[Tab]) {
        self.frames.push(Frame::Widths {
            widths: tabs.iter().map(|t| t.display_width).collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frames() {
        let mut surface = RecordingSurface::new();
        surface.on_indicator_update(1.0, 2.0);
        surface.on_scroll_update(0.5);
        surface.on_indicator_update(3.0, 4.0);

        assert_eq!(surface.last_indicator(), Some((3.0, 4.0)));
        assert_eq!(surface.last_scroll(), Some(0.5));
        assert_eq!(surface.take().len(), 3);
        assert!(surface.frames().is_empty());
    }

    #[test]
    fn test_frame_json_shape() {
        let json = serde_json::to_string(&Frame::Scroll { offset: 0.25 }).unwrap();
        assert_eq!(json, r#"{"frame":"scroll","offset":0.25}"#);
    }
}
