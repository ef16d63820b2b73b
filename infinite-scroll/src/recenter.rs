use crate::shift::ShiftAccumulator;
use crate::viewport::ViewportTracker;
use crate::{Axis, LayoutOutcome};

/// A re-center decision, computed without touching any state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecenterPlan {
    /// Extent of one copy of the collection.
    pub total_extent: f64,
    /// Offset that puts the viewport in the middle of the tiled content.
    pub center: f64,
    /// `center - offset` at planning time.
    pub distance: f64,
    /// `distance` in (fractional) cells.
    pub cell_count: f64,
    /// Whole cells to add to the drift.
    pub shift_cells: i64,
    /// Sub-cell remainder kept in the offset so the content does not visibly move.
    pub correction: f64,
    /// Offset to apply.
    pub new_offset: f64,
}

/// Offset that puts the viewport in the middle of the tiled content.
pub fn center_offset(viewport: &ViewportTracker, item_count: usize) -> f64 {
    let total_extent = viewport.total_content_extent(item_count);
    // Vertical lists do not subtract the viewport extent. Shift math downstream relies on that
    // offset, so keep it.
    match viewport.axis() {
        Axis::Horizontal => (3.0 * total_extent - viewport.extent()) / 2.0,
        Axis::Vertical => (3.0 * total_extent) / 2.0,
    }
}

/// Keeps the viewport near the middle copy of the tiled content.
///
/// Each [`Self::on_layout`] call checks how far the viewport drifted from the center. Once it is
/// more than a quarter of one copy away, the offset jumps back by a whole number of cells and
/// the same number of cells is added to the drift, so every fixed screen position keeps
/// resolving to the same logical index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecenterEngine {
    shift: ShiftAccumulator,
}

impl RecenterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drift(drift: i64) -> Self {
        Self {
            shift: ShiftAccumulator::with_drift(drift),
        }
    }

    pub fn drift(&self) -> i64 {
        self.shift.get()
    }

    pub fn reset(&mut self) {
        self.shift.reset();
    }

    /// Computes the re-center for the current viewport, or `None` when the viewport is close
    /// enough to the center (or there is nothing to show).
    pub fn plan(&self, item_count: usize, viewport: &ViewportTracker) -> Option<RecenterPlan> {
        if item_count == 0 {
            return None;
        }
        let stride = viewport.metrics().stride();
        let total_extent = viewport.total_content_extent(item_count);
        let center = center_offset(viewport, item_count);
        let offset = viewport.offset();
        let distance = center - offset;

        if distance.abs() <= total_extent / 4.0 {
            return None;
        }

        let cell_count = distance / stride;
        let whole = if cell_count > 0.0 {
            cell_count.floor()
        } else {
            cell_count.ceil()
        };
        let correction = cell_count.abs().fract() * stride;
        let new_offset = if offset < center {
            center - correction
        } else if offset > center {
            center + correction
        } else {
            offset
        };

        Some(RecenterPlan {
            total_extent,
            center,
            distance,
            cell_count,
            shift_cells: whole as i64,
            correction,
            new_offset,
        })
    }

    /// Runs one layout pass: re-centers `viewport` when needed and reports whether the
    /// renderer has to reload.
    ///
    /// `item_count` must be queried from the data source for every pass.
    pub fn on_layout(&mut self, item_count: usize, viewport: &mut ViewportTracker) -> LayoutOutcome {
        strace!(
            item_count,
            offset = viewport.offset(),
            extent = viewport.extent(),
            "RecenterEngine::on_layout"
        );
        let idle = LayoutOutcome {
            offset: viewport.offset(),
            drift: self.shift.get(),
            shift_cells: 0,
            should_reload: false,
        };

        let Some(plan) = self.plan(item_count, viewport) else {
            return idle;
        };
        // Behavior change: a plan past the threshold with a zero-cell shift does not set
        // `should_reload`, and the drift and offset are left alone. The offset would not move
        // anyway, and reloading here would make tiny collections reload on every pass.
        if plan.shift_cells == 0 {
            return idle;
        }

        self.shift.add(plan.shift_cells);
        viewport.set_offset(plan.new_offset);
        sdebug!(
            shift_cells = plan.shift_cells,
            drift = self.shift.get(),
            from = idle.offset,
            to = plan.new_offset,
            "re-centered"
        );

        LayoutOutcome {
            offset: viewport.offset(),
            drift: self.shift.get(),
            shift_cells: plan.shift_cells,
            should_reload: true,
        }
    }
}
