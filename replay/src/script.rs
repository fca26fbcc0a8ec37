//! Replay scripts

use serde::{Deserialize, Serialize};
use slidetabs_core::{Panel, TabsConfig, Widget};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: TabsConfig,
    pub strip_width: f64,
    pub page_width: f64,
    pub panels: Vec<ScriptPanel>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut script: Self = serde_json::from_str(json)?;
        script.config = script.config.validated()?;
        if !script.page_width.is_finite() || script.page_width <= 0.0 {
            anyhow::bail!("page_width must be positive, got {}", script.page_width);
        }
        Ok(script)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptPanel {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Measured label width; 0 leaves the tab unmeasured
    #[serde(default)]
    pub min_width: f64,
}

impl Panel for ScriptPanel {
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    fn min_content_width(&self) -> f64 {
        self.min_width
    }
}

impl Widget for ScriptPanel {
    fn kind(&self) -> &str {
        "ScriptPanel"
    }

    fn as_panel(&self) -> Option<&dyn Panel> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Drag offset from the pager; `skip` marks a fast swipe target
    Offset {
        offset: f64,
        #[serde(default)]
        skip: Option<usize>,
    },
    Settle {
        index: usize,
    },
    Resize {
        width: f64,
    },
    /// Press on a tab label
    Tap {
        key: String,
    },
    /// New content measurement for a label
    Measure {
        key: String,
        width: f64,
    },
}
