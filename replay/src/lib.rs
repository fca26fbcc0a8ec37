//! SlideTabs Replay
//!
//! Drives the pager synchronisation headlessly from a JSON script and prints
//! every frame pushed to the surface as one JSON object per line.

mod pager;
mod replay;
mod script;

pub use pager::ScriptedPager;
pub use replay::replay;
pub use script::{Script, ScriptEvent, ScriptPanel};

use std::io::Write;
use std::path::Path;

use anyhow::Context;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let script = Script::from_json(&json)
        .with_context(|| format!("parsing script {}", path.display()))?;

    let frames = replay(&script)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        writeln!(out, "{}", serde_json::to_string(frame)?)?;
    }

    tracing::info!(frames = frames.len(), events = script.events.len(), "Replay finished");

    Ok(())
}
