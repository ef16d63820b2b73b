use core::fmt;

use infinite_scroll::{
    ConfigError, InfiniteScroll, InfiniteScrollOptions, LayoutOutcome, VirtualCell,
};

use crate::{
    DataSource, Easing, InfiniteListDelegate, Renderer, ScrollAnchor, Tween, apply_anchor,
    capture_first_visible_anchor, nearest_slot_for_index,
};

/// A framework-neutral controller that wraps an [`InfiniteScroll`] and wires it to its
/// collaborators.
///
/// This type does not hold any UI objects or the item collection. Adapters drive it by calling:
/// - `on_viewport_extent` / `on_scroll` / `begin_drag` when UI events occur
/// - `layout(source, renderer)` on every layout pass
/// - `tick(now_ms, source, renderer)` each frame while a tween is running
///
/// The data source and renderer are borrowed per call, so the controller never outlives them.
pub struct InfiniteList {
    scroll: InfiniteScroll,
    tween: Option<Tween>,
    delegate: Option<Box<dyn InfiniteListDelegate>>,
}

impl InfiniteList {
    pub fn new(options: InfiniteScrollOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_scroll(InfiniteScroll::new(options)?))
    }

    pub fn from_scroll(scroll: InfiniteScroll) -> Self {
        Self {
            scroll,
            tween: None,
            delegate: None,
        }
    }

    pub fn scroll(&self) -> &InfiniteScroll {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut InfiniteScroll {
        &mut self.scroll
    }

    pub fn into_scroll(self) -> InfiniteScroll {
        self.scroll
    }

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn InfiniteListDelegate>>) {
        self.delegate = delegate;
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_extent(&mut self, extent: f64) {
        self.scroll.set_viewport_extent(extent);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset: f64) {
        self.cancel_animation();
        self.scroll.apply_scroll_offset(offset);
    }

    /// Call this when the user starts dragging. Cancels any active tween and notifies the
    /// delegate.
    pub fn begin_drag(&mut self) {
        self.cancel_animation();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_begin_dragging();
        }
    }

    /// Runs one layout pass against the current item count and reloads the renderer when the
    /// slot mapping changed.
    pub fn layout(
        &mut self,
        source: &dyn DataSource,
        renderer: &mut dyn Renderer,
    ) -> LayoutOutcome {
        let count = source.item_count();
        let outcome = self.scroll.on_layout(count);
        if outcome.should_reload {
            // The offset jumped by whole cells; keep a running tween on the same content.
            if let Some(tween) = self.tween.as_mut() {
                tween.translate(outcome.shift_cells as f64 * self.scroll.metrics().stride());
            }
            adebug!(
                count,
                shift_cells = outcome.shift_cells,
                drift = outcome.drift,
                "InfiniteList: reload"
            );
            renderer.reload();
        }
        outcome
    }

    /// Advances the controller.
    ///
    /// If a tween is active, moves the offset, runs a layout pass and returns the new offset.
    /// Otherwise returns `None`.
    pub fn tick(
        &mut self,
        now_ms: u64,
        source: &dyn DataSource,
        renderer: &mut dyn Renderer,
    ) -> Option<f64> {
        let tween = self.tween?;
        let off = tween.sample(now_ms);
        atrace!(now_ms, off, "InfiniteList::tick");
        self.scroll.apply_scroll_offset(off);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        self.layout(source, renderer);
        Some(self.scroll.offset())
    }

    /// Starts a tween that moves the list by `cells` whole cells (negative moves backward).
    ///
    /// Returns the target offset.
    pub fn start_tween_by_cells(
        &mut self,
        cells: i64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        let from = self.scroll.offset();
        let to = from + cells as f64 * self.scroll.metrics().stride();
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Starts a tween that brings the nearest copy of `index` to the start of the viewport.
    ///
    /// Returns the target offset, or `None` when `index` is not in the data source.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        source: &dyn DataSource,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f64> {
        let slot = nearest_slot_for_index(&self.scroll, index, source.item_count())?;
        let to = self.scroll.viewport().slot_start(slot);
        let from = self.scroll.offset();
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        Some(to)
    }

    /// Brings the nearest copy of `index` to the start of the viewport immediately.
    ///
    /// Returns the applied offset. This cancels any active tween.
    pub fn scroll_to_index(&mut self, index: usize, source: &dyn DataSource) -> Option<f64> {
        let slot = nearest_slot_for_index(&self.scroll, index, source.item_count())?;
        self.cancel_animation();
        let to = self.scroll.viewport().slot_start(slot);
        self.scroll.apply_scroll_offset(to);
        Some(self.scroll.offset())
    }

    /// Maps a selected slot to its logical index and reports it to the delegate.
    ///
    /// Returns the logical index, or `None` if the slot is outside the tiled sequence.
    pub fn select_slot(&mut self, slot: usize, source: &dyn DataSource) -> Option<usize> {
        let index = self
            .scroll
            .logical_index_for_slot(slot, source.item_count())?;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_select(index);
        }
        Some(index)
    }

    pub fn for_each_visible_cell(&self, source: &dyn DataSource, f: impl FnMut(VirtualCell)) {
        self.scroll.for_each_visible_cell(source.item_count(), f);
    }

    pub fn collect_visible_cells(&self, source: &dyn DataSource, out: &mut Vec<VirtualCell>) {
        self.scroll.collect_visible_cells(source.item_count(), out);
    }

    pub fn capture_first_visible_anchor(&self, source: &dyn DataSource) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(&self.scroll, source.item_count())
    }

    /// Applies a previously captured anchor by adjusting the scroll offset.
    ///
    /// This cancels any active tween.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor, source: &dyn DataSource) -> bool {
        self.cancel_animation();
        apply_anchor(&mut self.scroll, anchor, source.item_count())
    }
}

impl fmt::Debug for InfiniteList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfiniteList")
            .field("scroll", &self.scroll)
            .field("tween", &self.tween)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
