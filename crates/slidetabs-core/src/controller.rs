//! Pager synchronisation
//!
//! ```text
//! Settled
//!   ↓ nonzero drag offset toward another tab
//! Dragging
//!   ↓ index settled / offset back to 0
//! Settled
//! ```
//!
//! The controller is the only writer of the indicator, the strip scroll
//! offset and the tab geometry. Settle events are authoritative: whatever
//! drag was in flight is dropped and the indicator snaps onto the selected
//! tab.

use slidetabs_motion::{
    compute_scroll, step, Bounds, ContentViewport, Direction, Indicator, MotionError, Progress,
    ScrollConversion, ScrollInput, StepInput, Threshold,
};
use slidetabs_strip::{Tab, TabHandle, TabStrip, Widget};

use crate::config::TabsConfig;
use crate::error::CoreError;
use crate::page::{PageView, TabsSurface};
use crate::session::DragSession;
use crate::trigger::{LayoutReason, LayoutTrigger};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Settled,
    Dragging,
}

/// What a drag offset event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetOutcome {
    /// Indicator (and possibly the strip scroll) moved
    Moved,
    /// Offset returned to 0 and the drag session ended
    Released,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Offset 0 with no drag in flight
    Idle,
    /// Drag past a full page
    Overscroll,
    /// Nothing selected yet
    NoActiveTab,
    /// Pager has moved on without a settle reaching us yet
    StaleSession,
    /// Drag resolves to the tab already selected
    DegenerateDrag,
    /// Target page already fully in view
    NoMovement,
    /// Threshold snapshot has no distance left to cover
    ZeroDistance,
}

pub struct PagerSyncController {
    config: TabsConfig,
    threshold: Threshold,
    strip: TabStrip,
    indicator: Indicator,
    /// Normalized strip scroll offset
    scroll_offset: f64,
    session: Option<DragSession>,
    layout: LayoutTrigger,
    /// Overrides the default viewport conversion
    conversion: Option<Box<dyn ScrollConversion + Send + Sync>>,
}

impl PagerSyncController {
    pub fn new(config: TabsConfig) -> Result<Self> {
        let config = config.validated()?;

        Ok(Self {
            threshold: config.threshold(),
            indicator: Indicator::new(config.indicator_height),
            config,
            strip: TabStrip::new(),
            scroll_offset: 0.0,
            session: None,
            layout: LayoutTrigger::new(),
            conversion: None,
        })
    }

    /// Use the strip's own distance to scroll conversion
    pub fn with_scroll_conversion(
        mut self,
        conversion: Box<dyn ScrollConversion + Send + Sync>,
    ) -> Self {
        self.conversion = Some(conversion);
        self
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn phase(&self) -> SyncPhase {
        if self.session.is_some() {
            SyncPhase::Dragging
        } else {
            SyncPhase::Settled
        }
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn layout_pending(&self) -> bool {
        self.layout.is_pending()
    }

    /// Hand the configured move animation duration to the pager
    pub fn configure_page_view(&self, page: &mut dyn PageView) {
        page.set_move_duration(self.config.anim_duration);
    }

    // === Tab set ===

    pub fn register_tab(&mut self, widget: &dyn Widget) -> Result<TabHandle> {
        let handle = self.strip.register(widget)?;
        self.layout.schedule(LayoutReason::TabsChanged);
        Ok(handle)
    }

    /// Unregister a widget's tab.
    ///
    /// A drag heading to or from the tab is dropped. The indicator goes back
    /// to the active tab on the next [`Self::flush_layout`].
    pub fn unregister_tab(&mut self, widget: &dyn Widget) -> Result<Tab> {
        let tab = self.strip.unregister(widget)?;
        self.forget(&tab);
        Ok(tab)
    }

    pub fn remove_tab(&mut self, handle: TabHandle) -> Result<Tab> {
        let tab = self.strip.remove(handle)?;
        self.forget(&tab);
        Ok(tab)
    }

    fn forget(&mut self, tab: &Tab) {
        let in_session = self
            .session
            .as_ref()
            .is_some_and(|s| s.current == tab.handle || s.target == tab.handle);
        if in_session {
            tracing::debug!(tab = %tab.handle, "Dropped drag session of removed tab");
            self.session = None;
        }
        self.layout.schedule(LayoutReason::TabsChanged);
    }

    // === Layout ===

    pub fn set_min_content_width(&mut self, handle: TabHandle, width: f64) -> Result<()> {
        self.strip.set_min_content_width(handle, width)?;
        self.layout.schedule(LayoutReason::Measured);
        Ok(())
    }

    pub fn resize(&mut self, strip_width: f64) -> Result<()> {
        self.strip.set_width(strip_width)?;
        self.layout.schedule(LayoutReason::Resize);
        Ok(())
    }

    /// Apply pending layout requests. Returns false if there were none.
    pub fn flush_layout(&mut self, surface: &mut dyn TabsSurface) -> bool {
        let Some(requests) = self.layout.take() else {
            return false;
        };

        self.strip.relayout();
        surface.on_tab_widths_update(self.strip.tabs());

        tracing::debug!(
            requests,
            strip_width = self.strip.width(),
            content_width = self.strip.content_width(),
            "Tab layout updated"
        );

        self.on_layout_changed(surface);
        true
    }

    /// Keep the indicator on the active tab after it moved or resized.
    ///
    /// A live drag recomputes the indicator on its next event instead.
    pub fn on_layout_changed(&mut self, surface: &mut dyn TabsSurface) {
        if self.session.is_some() {
            return;
        }
        let Some(bounds) = self.strip.active().map(Bounds::from) else {
            return;
        };
        if self.indicator.snap_to(bounds) {
            surface.on_indicator_update(bounds.x, bounds.width);
        }
    }

    // === Pager events ===

    /// The slide set changed: move the pager to the configured default tab.
    ///
    /// Selection follows the pager's current page, so a pager that loads
    /// slides asynchronously reports the default tab with a later settle.
    pub fn on_slides_changed(
        &mut self,
        page: &mut dyn PageView,
        surface: &mut dyn TabsSurface,
    ) -> Result<()> {
        if self.strip.is_empty() {
            tracing::debug!("Slides changed with no tabs registered");
            return Ok(());
        }

        let default_tab = self.config.default_tab.min(self.strip.len() - 1);
        if page.current_index() != default_tab {
            tracing::debug!(index = default_tab, "Loading default slide");
            page.load_slide(default_tab);
        }

        self.on_index_settled(page.current_index(), surface)
    }

    /// The pager settled on `index`.
    ///
    /// Ends any drag session and snaps the indicator to the tab's exact
    /// bounds.
    pub fn on_index_settled(&mut self, index: usize, surface: &mut dyn TabsSurface) -> Result<()> {
        self.strip.tab_at(index)?;

        if let Some(session) = self.session.take() {
            tracing::debug!(
                target_tab = %session.target,
                "Drag session ended by settle"
            );
        }

        if self.strip.activate(index)? {
            tracing::info!(index, "Tab selected");
        }

        self.snap_to_active(surface);
        Ok(())
    }

    /// A tab label was pressed: ask the pager to show its page.
    ///
    /// Returns false for the tab that is already selected. Selection changes
    /// once the pager settles.
    pub fn on_tab_pressed(&mut self, handle: TabHandle, page: &mut dyn PageView) -> Result<bool> {
        let index = self.strip.position(handle)?;
        if self.strip.tab_at(index)?.is_active() {
            return Ok(false);
        }

        tracing::debug!(index, tab = %handle, "Loading slide for pressed tab");
        page.load_slide(index);
        Ok(true)
    }

    /// The pager's drag offset changed.
    ///
    /// Negative offsets drag toward the next page, positive toward the
    /// previous one.
    pub fn on_offset(
        &mut self,
        page: &dyn PageView,
        offset: f64,
        surface: &mut dyn TabsSurface,
    ) -> Result<OffsetOutcome> {
        if !offset.is_finite() {
            return Err(MotionError::NonFinite("drag offset").into());
        }
        let page_width = page.page_width();
        if !page_width.is_finite() || page_width <= 0.0 {
            return Err(CoreError::InvalidPageWidth(page_width));
        }

        if offset == 0.0 {
            return Ok(self.release(surface));
        }

        let distance = offset.abs();
        if distance >= page_width {
            return Ok(ignored(IgnoreReason::Overscroll));
        }

        let Some(active) = self.strip.active_index() else {
            return Ok(ignored(IgnoreReason::NoActiveTab));
        };
        if page.current_index() != active {
            return Ok(ignored(IgnoreReason::StaleSession));
        }

        let remaining = (distance - page_width).abs();
        if remaining == 0.0 {
            return Ok(ignored(IgnoreReason::NoMovement));
        }

        let direction = Direction::from_offset(offset);
        let natural = match direction {
            Direction::Forward => page.next_index(),
            Direction::Backward => page.previous_index(),
        };
        let target_index = page.skip_index().or(natural).unwrap_or(active);
        if target_index == active {
            return Ok(ignored(IgnoreReason::DegenerateDrag));
        }

        let progress = Progress::of_page(distance, page_width)?;
        let current = self.strip.tab_at(active)?;
        let target = self.strip.tab_at(target_index)?;
        let current_bounds = Bounds::from(current);
        let target_bounds = Bounds::from(target);
        let target_center = target.center_x();
        let (current_handle, target_handle) = (current.handle, target.handle);

        let mut session = match self.session.take() {
            Some(mut session) if session.current == current_handle => {
                if !session.heads_for(direction, target_handle) {
                    session.retarget(direction, target_handle, self.scroll_offset);
                }
                session
            }
            _ => {
                tracing::debug!(
                    from = %current_handle,
                    to = %target_handle,
                    direction = ?direction,
                    "Drag session started"
                );
                DragSession::new(direction, current_handle, target_handle, self.scroll_offset)
            }
        };

        let scroll = {
            let viewport = ContentViewport::new(self.strip.width(), self.strip.content_width());
            let conversion: &dyn ScrollConversion = match self.conversion.as_deref() {
                Some(conversion) => conversion,
                None => &viewport,
            };
            compute_scroll(
                &ScrollInput {
                    target_center_x: target_center,
                    viewport_width: self.strip.width(),
                    content_width: self.strip.content_width(),
                    last_offset: session.origin_scroll,
                    step: progress,
                },
                conversion,
            )
        };
        if let Some(scroll) = scroll {
            self.scroll_offset = scroll;
            surface.on_scroll_update(scroll);
        }

        let output = step(&StepInput {
            current: current_bounds,
            target: target_bounds,
            progress,
            direction,
            threshold: self.threshold,
            indicator: self.indicator.bounds(),
            snapshot: session.snapshot,
            distance_remaining: remaining,
        });

        let Some(output) = output else {
            self.session = Some(session);
            return Ok(ignored(IgnoreReason::ZeroDistance));
        };

        session.snapshot = output.snapshot;
        self.session = Some(session);
        self.indicator.snap_to(output.bounds);
        surface.on_indicator_update(output.bounds.x, output.bounds.width);

        tracing::trace!(
            progress = progress.value(),
            x = output.bounds.x,
            width = output.bounds.width,
            scroll = self.scroll_offset,
            "Indicator moved"
        );

        Ok(OffsetOutcome::Moved)
    }

    /// Offset back at 0 without a settle: the pager bounced back
    fn release(&mut self, surface: &mut dyn TabsSurface) -> OffsetOutcome {
        if self.session.take().is_none() {
            return ignored(IgnoreReason::Idle);
        }

        tracing::debug!("Drag released without settling");
        self.snap_to_active(surface);
        OffsetOutcome::Released
    }

    fn snap_to_active(&mut self, surface: &mut dyn TabsSurface) {
        if let Some(bounds) = self.strip.active().map(Bounds::from) {
            self.indicator.snap_to(bounds);
            surface.on_indicator_update(bounds.x, bounds.width);
        }
    }
}

fn ignored(reason: IgnoreReason) -> OffsetOutcome {
    tracing::trace!(reason = ?reason, "Drag offset ignored");
    OffsetOutcome::Ignored(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Frame, RecordingSurface};
    use slidetabs_strip::Panel;

    struct Label(&'static str, f64);

    impl Panel for Label {
        fn key(&self) -> &str {
            self.0
        }

        fn label(&self) -> &str {
            self.0
        }

        fn min_content_width(&self) -> f64 {
            self.1
        }
    }

    impl Widget for Label {
        fn kind(&self) -> &str {
            "Label"
        }

        fn as_panel(&self) -> Option<&dyn Panel> {
            Some(self)
        }
    }

    struct Spacer;

    impl Widget for Spacer {
        fn kind(&self) -> &str {
            "Spacer"
        }
    }

    struct Pager {
        count: usize,
        current: usize,
        skip: Option<usize>,
        loaded: Vec<usize>,
        duration: Option<f64>,
    }

    impl Pager {
        fn new(count: usize) -> Self {
            Self {
                count,
                current: 0,
                skip: None,
                loaded: Vec::new(),
                duration: None,
            }
        }
    }

    impl PageView for Pager {
        fn page_width(&self) -> f64 {
            100.0
        }

        fn current_index(&self) -> usize {
            self.current
        }

        fn next_index(&self) -> Option<usize> {
            (self.current + 1 < self.count).then_some(self.current + 1)
        }

        fn previous_index(&self) -> Option<usize> {
            self.current.checked_sub(1)
        }

        fn skip_index(&self) -> Option<usize> {
            self.skip
        }

        fn load_slide(&mut self, index: usize) {
            self.loaded.push(index);
        }

        fn set_move_duration(&mut self, seconds: f64) {
            self.duration = Some(seconds);
        }
    }

    /// Two 50 wide tabs in a 100 wide strip, first one selected
    fn two_tabs() -> (PagerSyncController, Pager, RecordingSurface) {
        two_tabs_with(PagerSyncController::new(TabsConfig::default()).unwrap())
    }

    fn two_tabs_with(
        mut controller: PagerSyncController,
    ) -> (PagerSyncController, Pager, RecordingSurface) {
        let mut pager = Pager::new(2);
        let mut surface = RecordingSurface::new();
        controller.register_tab(&Label("a", 20.0)).unwrap();
        controller.register_tab(&Label("b", 20.0)).unwrap();
        controller.resize(100.0).unwrap();
        controller.flush_layout(&mut surface);
        controller.on_slides_changed(&mut pager, &mut surface).unwrap();
        surface.take();
        (controller, pager, surface)
    }

    struct FixedScroll(f64);

    impl ScrollConversion for FixedScroll {
        fn distance_to_scroll(&self, _dx: f64, _dy: f64) -> (f64, f64) {
            (self.0, 0.0)
        }
    }

    #[test]
    fn test_initial_settle_selects_default_tab() {
        let (controller, _, _) = two_tabs();
        assert_eq!(controller.strip().active_index(), Some(0));
        assert_eq!(controller.indicator().bounds(), Bounds::new(0.0, 50.0));
        assert_eq!(controller.phase(), SyncPhase::Settled);
    }

    #[test]
    fn test_forward_drag_linear_phase() {
        let (mut controller, pager, mut surface) = two_tabs();

        let outcome = controller.on_offset(&pager, -50.0, &mut surface).unwrap();
        assert_eq!(outcome, OffsetOutcome::Moved);
        assert_eq!(controller.phase(), SyncPhase::Dragging);
        assert_eq!(surface.last_indicator(), Some((0.0, 75.0)));
    }

    #[test]
    fn test_settle_snaps_and_ends_session() {
        let (mut controller, mut pager, mut surface) = two_tabs();

        controller.on_offset(&pager, -50.0, &mut surface).unwrap();
        controller.on_offset(&pager, -90.0, &mut surface).unwrap();
        assert!(controller.session().unwrap().snapshot.is_some());

        pager.current = 1;
        controller.on_index_settled(1, &mut surface).unwrap();

        assert_eq!(controller.phase(), SyncPhase::Settled);
        assert!(controller.session().is_none());
        assert_eq!(surface.last_indicator(), Some((50.0, 50.0)));
        assert_eq!(controller.strip().active_index(), Some(1));
    }

    #[test]
    fn test_settle_without_drag_is_idempotent() {
        let (mut controller, _, mut surface) = two_tabs();
        controller.on_index_settled(0, &mut surface).unwrap();
        controller.on_index_settled(0, &mut surface).unwrap();
        assert_eq!(
            surface.frames(),
            &[
                Frame::Indicator { x: 0.0, width: 50.0 },
                Frame::Indicator { x: 0.0, width: 50.0 },
            ]
        );
    }

    #[test]
    fn test_degenerate_drag_stays_settled() {
        let (mut controller, pager, mut surface) = two_tabs();

        // no previous page before the first one
        let outcome = controller.on_offset(&pager, 30.0, &mut surface).unwrap();
        assert_eq!(
            outcome,
            OffsetOutcome::Ignored(IgnoreReason::DegenerateDrag)
        );
        assert_eq!(controller.phase(), SyncPhase::Settled);
        assert!(surface.frames().is_empty());
    }

    #[test]
    fn test_overscroll_ignored() {
        let (mut controller, pager, mut surface) = two_tabs();
        for offset in [-100.0, -130.0] {
            assert_eq!(
                controller.on_offset(&pager, offset, &mut surface).unwrap(),
                OffsetOutcome::Ignored(IgnoreReason::Overscroll)
            );
        }
    }

    #[test]
    fn test_stale_offset_discarded() {
        let (mut controller, mut pager, mut surface) = two_tabs();

        // pager already on page 1, its settle not delivered yet
        pager.current = 1;
        assert_eq!(
            controller.on_offset(&pager, 40.0, &mut surface).unwrap(),
            OffsetOutcome::Ignored(IgnoreReason::StaleSession)
        );
    }

    #[test]
    fn test_release_snaps_back() {
        let (mut controller, pager, mut surface) = two_tabs();

        controller.on_offset(&pager, -40.0, &mut surface).unwrap();
        assert_eq!(
            controller.on_offset(&pager, 0.0, &mut surface).unwrap(),
            OffsetOutcome::Released
        );
        assert_eq!(controller.phase(), SyncPhase::Settled);
        assert_eq!(surface.last_indicator(), Some((0.0, 50.0)));

        assert_eq!(
            controller.on_offset(&pager, 0.0, &mut surface).unwrap(),
            OffsetOutcome::Ignored(IgnoreReason::Idle)
        );
    }

    #[test]
    fn test_invalid_inputs_fail_fast() {
        let (mut controller, pager, mut surface) = two_tabs();

        assert!(matches!(
            controller.on_offset(&pager, f64::NAN, &mut surface),
            Err(CoreError::Motion(_))
        ));
        assert!(matches!(
            controller.on_index_settled(5, &mut surface),
            Err(CoreError::Strip(_))
        ));
        assert!(controller.resize(-10.0).is_err());
    }

    #[test]
    fn test_invalid_panel_leaves_tabs_unchanged() {
        let (mut controller, _, _) = two_tabs();

        let result = controller.register_tab(&Spacer);
        assert!(matches!(
            result,
            Err(CoreError::Strip(slidetabs_strip::StripError::InvalidPanelType(_)))
        ));
        assert_eq!(controller.strip().len(), 2);
        assert!(!controller.layout_pending());
    }

    #[test]
    fn test_tab_press_loads_slide() {
        let (mut controller, mut pager, _) = two_tabs();
        let a = controller.strip().tabs()[0].handle;
        let b = controller.strip().tabs()[1].handle;

        assert!(!controller.on_tab_pressed(a, &mut pager).unwrap());
        assert!(controller.on_tab_pressed(b, &mut pager).unwrap());
        assert_eq!(pager.loaded, vec![1]);
        // selection waits for the settle
        assert_eq!(controller.strip().active_index(), Some(0));
    }

    #[test]
    fn test_configure_page_view() {
        let (controller, mut pager, _) = two_tabs();
        controller.configure_page_view(&mut pager);
        assert_eq!(pager.duration, Some(0.2));
    }

    #[test]
    fn test_layout_follows_active_tab() {
        let (mut controller, _, mut surface) = two_tabs();

        controller.resize(300.0).unwrap();
        controller.resize(200.0).unwrap();
        assert!(controller.flush_layout(&mut surface));
        assert!(!controller.flush_layout(&mut surface));

        assert_eq!(
            surface.frames(),
            &[
                Frame::Widths {
                    widths: vec![100.0, 100.0]
                },
                Frame::Indicator { x: 0.0, width: 100.0 },
            ]
        );
    }

    #[test]
    fn test_removing_target_drops_session() {
        let (mut controller, pager, mut surface) = two_tabs();

        controller.on_offset(&pager, -40.0, &mut surface).unwrap();
        controller.unregister_tab(&Label("b", 0.0)).unwrap();
        assert_eq!(controller.phase(), SyncPhase::Settled);
        assert!(controller.layout_pending());
    }

    #[test]
    fn test_remove_tab_by_handle_resnaps_on_flush() {
        let (mut controller, pager, mut surface) = two_tabs();
        let b = controller.strip().tabs()[1].handle;

        controller.on_offset(&pager, -40.0, &mut surface).unwrap();
        assert_eq!(surface.last_indicator(), Some((0.0, 70.0)));

        let removed = controller.remove_tab(b).unwrap();
        assert_eq!(removed.key, "b");
        assert!(controller.session().is_none());
        assert!(matches!(
            controller.remove_tab(b),
            Err(CoreError::Strip(slidetabs_strip::StripError::NotFound(_)))
        ));

        // the remaining tab now spans the strip and the indicator follows it
        assert!(controller.flush_layout(&mut surface));
        assert_eq!(surface.last_indicator(), Some((0.0, 100.0)));
        assert_eq!(controller.indicator().bounds(), Bounds::new(0.0, 100.0));
    }

    #[test]
    fn test_custom_scroll_conversion_drives_autoscroll() {
        // default viewport: the strip is not scrollable, nothing moves
        let (mut controller, pager, mut surface) = two_tabs();
        controller.on_offset(&pager, -50.0, &mut surface).unwrap();
        assert_eq!(surface.last_scroll(), None);

        let controller = PagerSyncController::new(TabsConfig::default())
            .unwrap()
            .with_scroll_conversion(Box::new(FixedScroll(0.4)));
        let (mut controller, pager, mut surface) = two_tabs_with(controller);
        controller.on_offset(&pager, -50.0, &mut surface).unwrap();
        assert_eq!(surface.last_scroll(), Some(0.2));
        assert_eq!(controller.scroll_offset(), 0.2);
    }

    #[test]
    fn test_default_tab_is_requested_from_pager() {
        let config = TabsConfig {
            default_tab: 1,
            ..TabsConfig::default()
        };
        let mut controller = PagerSyncController::new(config).unwrap();
        let mut pager = Pager::new(3);
        let mut surface = RecordingSurface::new();
        for key in ["a", "b", "c"] {
            controller.register_tab(&Label(key, 20.0)).unwrap();
        }
        controller.resize(150.0).unwrap();
        controller.flush_layout(&mut surface);
        controller.on_slides_changed(&mut pager, &mut surface).unwrap();

        // this pager loads asynchronously: selection stays with its page
        assert_eq!(pager.loaded, vec![1]);
        assert_eq!(controller.strip().active_index(), Some(0));
        assert_eq!(
            controller.on_offset(&pager, -50.0, &mut surface).unwrap(),
            OffsetOutcome::Moved
        );

        pager.current = 1;
        controller.on_index_settled(1, &mut surface).unwrap();
        assert_eq!(controller.strip().active_index(), Some(1));
        assert_eq!(surface.last_indicator(), Some((50.0, 50.0)));
    }
}
