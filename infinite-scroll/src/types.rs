use crate::error::{ConfigError, Result};

/// The scroll axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Flow-layout description of a uniform cell grid line.
///
/// This mirrors what a platform flow layout usually exposes (an item size and the spacing
/// between items). Use [`CellMetrics::from_layout`] to pick the values for one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub item_width: f64,
    pub item_height: f64,
    pub inter_item_spacing: f64,
}

/// Uniform cell geometry along the scroll axis.
///
/// Construct through [`CellMetrics::new`] so the stride is guaranteed to be positive.
/// Deserialization goes through the same validation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCellMetrics"))]
pub struct CellMetrics {
    cell_extent: f64,
    padding: f64,
}

/// Unchecked wire form of [`CellMetrics`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCellMetrics {
    cell_extent: f64,
    padding: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCellMetrics> for CellMetrics {
    type Error = ConfigError;

    fn try_from(raw: RawCellMetrics) -> Result<Self> {
        Self::new(raw.cell_extent, raw.padding)
    }
}

impl CellMetrics {
    pub fn new(cell_extent: f64, padding: f64) -> Result<Self> {
        if !cell_extent.is_finite() {
            return Err(ConfigError::NonFiniteMetric {
                name: "cell_extent",
                value: cell_extent,
            });
        }
        if !padding.is_finite() {
            return Err(ConfigError::NonFiniteMetric {
                name: "padding",
                value: padding,
            });
        }
        if cell_extent <= 0.0 {
            return Err(ConfigError::NonPositiveCellExtent(cell_extent));
        }
        if padding < 0.0 {
            return Err(ConfigError::NegativePadding(padding));
        }
        let stride = cell_extent + padding;
        if stride <= 0.0 || !stride.is_finite() {
            return Err(ConfigError::NonPositiveStride(stride));
        }
        Ok(Self {
            cell_extent,
            padding,
        })
    }

    /// Picks the cell extent for `axis` from a flow layout; the inter-item spacing becomes the
    /// padding.
    pub fn from_layout(layout: ItemLayout, axis: Axis) -> Result<Self> {
        let extent = match axis {
            Axis::Horizontal => layout.item_width,
            Axis::Vertical => layout.item_height,
        };
        Self::new(extent, layout.inter_item_spacing)
    }

    pub fn cell_extent(&self) -> f64 {
        self.cell_extent
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the starts of two adjacent cells.
    pub fn stride(&self) -> f64 {
        self.cell_extent + self.padding
    }
}

/// One rendered cell: the slot it is dequeued for and the logical item it displays.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualCell {
    /// Position in the tiled sequence, `0..3 * count`.
    pub slot: usize,
    /// Position in the data source, `0..count`.
    pub index: usize,
    /// Start offset along the scroll axis.
    pub start: f64,
    /// Extent along the scroll axis (excludes padding).
    pub extent: f64,
}

impl VirtualCell {
    pub fn end(&self) -> f64 {
        self.start + self.extent
    }
}

/// Result of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOutcome {
    /// Scroll offset after the pass.
    pub offset: f64,
    /// Accumulated drift after the pass.
    pub drift: i64,
    /// Whole cells applied by this pass (0 when nothing happened).
    pub shift_cells: i64,
    /// Whether every visible slot must be re-resolved.
    pub should_reload: bool,
}
