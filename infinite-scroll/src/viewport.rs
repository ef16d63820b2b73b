use core::ops::Range;

use crate::index_space::slot_count;
use crate::{Axis, CellMetrics};

/// Scroll position, visible extent and cell geometry along one axis.
///
/// The tracker never decides when to re-center; it only answers geometric questions about the
/// tiled sequence. Its offset is written by scroll input and by [`crate::RecenterEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTracker {
    axis: Axis,
    metrics: CellMetrics,
    offset: f64,
    extent: f64,
}

impl ViewportTracker {
    pub fn new(axis: Axis, metrics: CellMetrics) -> Self {
        Self {
            axis,
            metrics,
            offset: 0.0,
            extent: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Updates the scroll offset. Non-finite values are ignored.
    pub fn set_offset(&mut self, offset: f64) {
        if !offset.is_finite() {
            swarn!(offset, "ViewportTracker: ignoring non-finite offset");
            return;
        }
        self.offset = offset;
    }

    /// Updates the visible extent. Non-finite or negative values are ignored.
    pub fn set_extent(&mut self, extent: f64) {
        if !extent.is_finite() || extent < 0.0 {
            swarn!(extent, "ViewportTracker: ignoring invalid extent");
            return;
        }
        self.extent = extent;
    }

    /// Extent of one copy of the collection.
    ///
    /// The vertical axis does not count the trailing padding; the horizontal axis does.
    pub fn total_content_extent(&self, item_count: usize) -> f64 {
        if item_count == 0 {
            return 0.0;
        }
        let span = item_count as f64 * self.metrics.stride();
        match self.axis {
            Axis::Horizontal => span,
            Axis::Vertical => span - self.metrics.padding(),
        }
    }

    /// Start of `slot` along the axis.
    pub fn slot_start(&self, slot: usize) -> f64 {
        slot as f64 * self.metrics.stride()
    }

    /// The slot under `position`, if any. Positions inside padding resolve to the preceding
    /// cell.
    pub fn slot_at(&self, position: f64, item_count: usize) -> Option<usize> {
        if !position.is_finite() || position < 0.0 {
            return None;
        }
        let slot = (position / self.metrics.stride()).floor();
        let slots = slot_count(item_count);
        if slot >= slots as f64 {
            return None;
        }
        Some(slot as usize)
    }

    /// Slots whose cell intersects `[offset, offset + extent)`.
    pub fn visible_slots(&self, item_count: usize) -> Range<usize> {
        self.visible_slots_for(self.offset, self.extent, item_count)
    }

    pub fn visible_slots_for(&self, offset: f64, extent: f64, item_count: usize) -> Range<usize> {
        let slots = slot_count(item_count);
        if slots == 0 || extent <= 0.0 {
            return 0..0;
        }
        let stride = self.metrics.stride();
        let end_pos = offset + extent;
        if end_pos <= 0.0 {
            return 0..0;
        }

        let mut start = 0usize;
        if offset > 0.0 {
            let first = (offset / stride).floor();
            if first >= slots as f64 {
                return slots..slots;
            }
            start = first as usize;
            // The leading slot only shows padding; skip it.
            if offset - self.slot_start(start) >= self.metrics.cell_extent() {
                start += 1;
            }
        }

        let last = (end_pos / stride).ceil();
        let end = if last >= slots as f64 {
            slots
        } else {
            last as usize
        };
        start.min(end)..end
    }
}
