//! Replay loop
//!
//! Each script event is one turn of the event loop: the event is applied,
//! then pending layout work is flushed, the way a UI toolkit runs scheduled
//! callbacks before drawing the next frame.

use std::collections::HashMap;

use anyhow::Context;
use slidetabs_core::{Frame, PagerSyncController, RecordingSurface, SharedController, TabHandle};

use crate::pager::ScriptedPager;
use crate::script::{Script, ScriptEvent};

/// Replay a script and return every frame pushed to the surface
pub fn replay(script: &Script) -> anyhow::Result<Vec<Frame>> {
    let controller = SharedController::new(PagerSyncController::new(script.config.clone())?);
    let mut pager = ScriptedPager::new(script.panels.len(), script.page_width);
    let mut surface = RecordingSurface::new();
    let mut handles: HashMap<String, TabHandle> = HashMap::new();

    for panel in &script.panels {
        let handle = controller.with(|c| c.register_tab(panel))?;
        handles.insert(panel.key.clone(), handle);
    }

    controller.with(|c| -> anyhow::Result<()> {
        c.configure_page_view(&mut pager);
        c.resize(script.strip_width)?;
        c.flush_layout(&mut surface);
        c.on_slides_changed(&mut pager, &mut surface)?;
        settle_pending(c, &mut pager, &mut surface)?;
        Ok(())
    })?;

    tracing::debug!(
        tabs = handles.len(),
        move_duration = pager.move_duration(),
        "Replay ready"
    );

    for (n, event) in script.events.iter().enumerate() {
        controller
            .with(|c| apply(c, event, &mut pager, &mut surface, &handles))
            .with_context(|| format!("event {n}: {event:?}"))?;
        controller.with(|c| c.flush_layout(&mut surface));
        pager.set_count(controller.with(|c| c.strip().len()));
    }

    Ok(surface.take())
}

fn apply(
    controller: &mut PagerSyncController,
    event: &ScriptEvent,
    pager: &mut ScriptedPager,
    surface: &mut RecordingSurface,
    handles: &HashMap<String, TabHandle>,
) -> anyhow::Result<()> {
    let handle = |key: &str| {
        handles
            .get(key)
            .copied()
            .with_context(|| format!("unknown panel {key}"))
    };

    match event {
        ScriptEvent::Offset { offset, skip } => {
            pager.set_skip(*skip);
            let outcome = controller.on_offset(&*pager, *offset, surface)?;
            tracing::debug!(offset, outcome = ?outcome, "Replayed offset");
        }
        ScriptEvent::Settle { index } => {
            pager.set_current(*index);
            pager.set_skip(None);
            controller.on_index_settled(*index, surface)?;
        }
        ScriptEvent::Resize { width } => {
            controller.resize(*width)?;
        }
        ScriptEvent::Tap { key } => {
            controller.on_tab_pressed(handle(key)?, pager)?;
            settle_pending(controller, pager, surface)?;
        }
        ScriptEvent::Measure { key, width } => {
            controller.set_min_content_width(handle(key)?, *width)?;
        }
    }

    Ok(())
}

/// The scripted pager jumps straight to a requested slide
fn settle_pending(
    controller: &mut PagerSyncController,
    pager: &mut ScriptedPager,
    surface: &mut RecordingSurface,
) -> anyhow::Result<()> {
    if let Some(index) = pager.take_pending() {
        pager.set_current(index);
        controller.on_index_settled(index, surface)?;
    }
    Ok(())
}
