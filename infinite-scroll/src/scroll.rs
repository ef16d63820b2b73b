use core::ops::Range;

use crate::error::{ConfigError, Result};
use crate::index_space::{correct_slot, slot_count};
use crate::recenter::{RecenterEngine, RecenterPlan, center_offset};
use crate::viewport::ViewportTracker;
use crate::{Axis, CellMetrics, InfiniteScrollOptions, LayoutOutcome, ScrollSnapshot, VirtualCell};

/// A headless circular list.
///
/// This type is UI-agnostic:
/// - It does not own the item collection; every call that needs the item count takes it as an
///   argument, so callers query their data source fresh on each pass.
/// - Your adapter drives it with viewport extents and scroll offsets, then calls
///   [`Self::on_layout`] once per layout pass.
/// - Rendering is exposed via zero-allocation iteration ([`Self::for_each_visible_cell`]).
///
/// All calls must come from the single thread that drives layout.
#[derive(Clone, Debug)]
pub struct InfiniteScroll {
    options: InfiniteScrollOptions,
    viewport: ViewportTracker,
    engine: RecenterEngine,
}

impl InfiniteScroll {
    /// Creates a list from options, rejecting invalid cell geometry up front.
    pub fn new(options: InfiniteScrollOptions) -> Result<Self> {
        let metrics = options.metrics()?;
        options.validate_viewport()?;
        let initial_offset = options.initial_offset.resolve();
        if !initial_offset.is_finite() {
            return Err(ConfigError::InvalidViewport {
                name: "initial_offset",
                value: initial_offset,
            });
        }
        sdebug!(
            axis = ?options.axis,
            cell_extent = metrics.cell_extent(),
            padding = metrics.padding(),
            "InfiniteScroll::new"
        );

        let mut viewport = ViewportTracker::new(options.axis, metrics);
        viewport.set_extent(options.initial_extent);
        viewport.set_offset(initial_offset);
        let engine = RecenterEngine::with_drift(options.initial_drift);
        Ok(Self {
            options,
            viewport,
            engine,
        })
    }

    pub fn options(&self) -> &InfiniteScrollOptions {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.viewport.axis()
    }

    pub fn metrics(&self) -> CellMetrics {
        self.viewport.metrics()
    }

    pub fn viewport(&self) -> &ViewportTracker {
        &self.viewport
    }

    pub fn offset(&self) -> f64 {
        self.viewport.offset()
    }

    pub fn extent(&self) -> f64 {
        self.viewport.extent()
    }

    pub fn drift(&self) -> i64 {
        self.engine.drift()
    }

    pub fn set_on_recenter(
        &mut self,
        on_recenter: Option<impl Fn(&LayoutOutcome) + Send + Sync + 'static>,
    ) {
        self.options.on_recenter = on_recenter.map(|f| std::sync::Arc::new(f) as _);
    }

    /// Applies a scroll offset reported by the UI layer (e.g. wheel/drag).
    pub fn apply_scroll_offset(&mut self, offset: f64) {
        strace!(offset, "apply_scroll_offset");
        self.viewport.set_offset(offset);
    }

    pub fn set_viewport_extent(&mut self, extent: f64) {
        self.viewport.set_extent(extent);
    }

    pub fn set_viewport_and_scroll(&mut self, extent: f64, offset: f64) {
        self.viewport.set_extent(extent);
        self.viewport.set_offset(offset);
    }

    /// Number of slots the renderer should lay out for `item_count` items.
    pub fn slot_count(&self, item_count: usize) -> usize {
        slot_count(item_count)
    }

    /// Extent of one copy of the collection.
    pub fn total_content_extent(&self, item_count: usize) -> f64 {
        self.viewport.total_content_extent(item_count)
    }

    /// The offset a layout pass re-centers toward.
    pub fn center_offset(&self, item_count: usize) -> f64 {
        center_offset(&self.viewport, item_count)
    }

    /// Moves the viewport to the middle of the tiled content without touching the drift.
    ///
    /// Useful right after the first layout so the list can scroll both ways immediately.
    pub fn scroll_to_center(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        let center = self.center_offset(item_count);
        self.viewport.set_offset(center);
    }

    /// The re-center the next layout pass would apply, if any.
    pub fn pending_recenter(&self, item_count: usize) -> Option<RecenterPlan> {
        self.engine.plan(item_count, &self.viewport)
    }

    /// Runs one layout pass and fires `on_recenter` when the viewport was moved.
    ///
    /// When the returned outcome has `should_reload`, every visible slot maps to a different
    /// logical index than before and must be re-resolved.
    pub fn on_layout(&mut self, item_count: usize) -> LayoutOutcome {
        let outcome = self.engine.on_layout(item_count, &mut self.viewport);
        if outcome.should_reload {
            if let Some(cb) = &self.options.on_recenter {
                cb(&outcome);
            }
        }
        outcome
    }

    /// Maps a slot (e.g. one the user selected) to the logical index it displays.
    ///
    /// Returns `None` for an empty collection or a slot outside the tiled sequence.
    pub fn logical_index_for_slot(&self, slot: usize, item_count: usize) -> Option<usize> {
        if slot >= slot_count(item_count) {
            return None;
        }
        Some(correct_slot(slot, item_count, self.engine.drift()))
    }

    pub fn visible_slots(&self, item_count: usize) -> Range<usize> {
        self.viewport.visible_slots(item_count)
    }

    /// The cell under `position` along the axis (positions inside padding resolve to the
    /// preceding cell).
    pub fn cell_at_offset(&self, position: f64, item_count: usize) -> Option<VirtualCell> {
        let slot = self.viewport.slot_at(position, item_count)?;
        Some(self.cell(slot, item_count))
    }

    pub fn for_each_visible_cell(&self, item_count: usize, f: impl FnMut(VirtualCell)) {
        self.for_each_visible_cell_for(self.offset(), self.extent(), item_count, f);
    }

    /// Same as [`Self::for_each_visible_cell`] for an arbitrary offset/extent pair.
    pub fn for_each_visible_cell_for(
        &self,
        offset: f64,
        extent: f64,
        item_count: usize,
        mut f: impl FnMut(VirtualCell),
    ) {
        for slot in self.viewport.visible_slots_for(offset, extent, item_count) {
            f(self.cell(slot, item_count));
        }
    }

    /// Collects visible cells into `out` (clears `out` first).
    pub fn collect_visible_cells(&self, item_count: usize, out: &mut Vec<VirtualCell>) {
        out.clear();
        let range = self.visible_slots(item_count);
        out.reserve(range.len());
        self.for_each_visible_cell(item_count, |cell| out.push(cell));
    }

    /// Returns a snapshot of the scroll state.
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.offset(),
            extent: self.extent(),
            drift: self.drift(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The snapshot is applied as a whole or not at all: an offset that is not finite, or an
    /// extent that is not finite or negative, leaves the list untouched.
    pub fn restore(&mut self, snapshot: ScrollSnapshot) -> Result<()> {
        if !snapshot.offset.is_finite() {
            swarn!(offset = snapshot.offset, "restore: rejected snapshot");
            return Err(ConfigError::InvalidViewport {
                name: "offset",
                value: snapshot.offset,
            });
        }
        if !snapshot.extent.is_finite() || snapshot.extent < 0.0 {
            swarn!(extent = snapshot.extent, "restore: rejected snapshot");
            return Err(ConfigError::InvalidViewport {
                name: "extent",
                value: snapshot.extent,
            });
        }
        sdebug!(
            offset = snapshot.offset,
            extent = snapshot.extent,
            drift = snapshot.drift,
            "restore"
        );
        self.viewport.set_extent(snapshot.extent);
        self.viewport.set_offset(snapshot.offset);
        self.engine = RecenterEngine::with_drift(snapshot.drift);
        Ok(())
    }

    /// Forgets the accumulated drift. The visible content jumps unless the offset is reset too.
    pub fn reset_drift(&mut self) {
        self.engine.reset();
    }

    fn cell(&self, slot: usize, item_count: usize) -> VirtualCell {
        let metrics = self.viewport.metrics();
        VirtualCell {
            slot,
            index: correct_slot(slot, item_count, self.engine.drift()),
            start: self.viewport.slot_start(slot),
            extent: metrics.cell_extent(),
        }
    }
}
