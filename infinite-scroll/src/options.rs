use std::sync::Arc;

use crate::error::{ConfigError, Result};
use crate::scroll::InfiniteScroll;
use crate::{Axis, CellMetrics, ItemLayout, LayoutOutcome};

/// A callback fired after a layout pass moved the viewport back toward the center.
pub type OnRecenterCallback = Arc<dyn Fn(&LayoutOutcome) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(f64),
    /// A lazily evaluated initial offset provider (called by `InfiniteScroll::new`).
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::InfiniteScroll`].
///
/// Fields are validated by [`Self::build`]; cell geometry is fixed for the lifetime of the list.
pub struct InfiniteScrollOptions {
    pub axis: Axis,
    /// Size of one cell along the scroll axis.
    pub cell_extent: f64,
    /// Space between adjacent cells.
    pub padding: f64,
    /// Visible size along the scroll axis before the first layout event.
    pub initial_extent: f64,
    pub initial_offset: InitialOffset,
    /// Drift to start from, e.g. when restoring a list that was already scrolled.
    pub initial_drift: i64,
    /// Optional callback fired after each re-center.
    pub on_recenter: Option<OnRecenterCallback>,
}

impl Clone for InfiniteScrollOptions {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            cell_extent: self.cell_extent,
            padding: self.padding,
            initial_extent: self.initial_extent,
            initial_offset: self.initial_offset.clone(),
            initial_drift: self.initial_drift,
            on_recenter: self.on_recenter.clone(),
        }
    }
}

impl InfiniteScrollOptions {
    /// Creates options for a horizontal list of `cell_extent`-sized cells with no padding.
    pub fn new(cell_extent: f64) -> Self {
        Self {
            axis: Axis::Horizontal,
            cell_extent,
            padding: 0.0,
            initial_extent: 0.0,
            initial_offset: InitialOffset::default(),
            initial_drift: 0,
            on_recenter: None,
        }
    }

    /// Creates options from a flow layout description for `axis`.
    pub fn from_layout(layout: ItemLayout, axis: Axis) -> Self {
        let cell_extent = match axis {
            Axis::Horizontal => layout.item_width,
            Axis::Vertical => layout.item_height,
        };
        Self::new(cell_extent)
            .with_axis(axis)
            .with_padding(layout.inter_item_spacing)
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_metrics(mut self, metrics: CellMetrics) -> Self {
        self.cell_extent = metrics.cell_extent();
        self.padding = metrics.padding();
        self
    }

    pub fn with_initial_extent(mut self, initial_extent: f64) -> Self {
        self.initial_extent = initial_extent;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: f64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_initial_drift(mut self, initial_drift: i64) -> Self {
        self.initial_drift = initial_drift;
        self
    }

    pub fn with_on_recenter(
        mut self,
        on_recenter: Option<impl Fn(&LayoutOutcome) + Send + Sync + 'static>,
    ) -> Self {
        self.on_recenter = on_recenter.map(|f| Arc::new(f) as _);
        self
    }

    /// Validated cell geometry.
    pub fn metrics(&self) -> Result<CellMetrics> {
        CellMetrics::new(self.cell_extent, self.padding)
    }

    /// Validates the options and creates the list.
    pub fn build(self) -> Result<InfiniteScroll> {
        InfiniteScroll::new(self)
    }

    pub(crate) fn validate_viewport(&self) -> Result<()> {
        if !self.initial_extent.is_finite() || self.initial_extent < 0.0 {
            return Err(ConfigError::InvalidViewport {
                name: "initial_extent",
                value: self.initial_extent,
            });
        }
        Ok(())
    }
}

impl core::fmt::Debug for InfiniteScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteScrollOptions")
            .field("axis", &self.axis)
            .field("cell_extent", &self.cell_extent)
            .field("padding", &self.padding)
            .field("initial_extent", &self.initial_extent)
            .field("initial_offset", &self.initial_offset)
            .field("initial_drift", &self.initial_drift)
            .finish_non_exhaustive()
    }
}
