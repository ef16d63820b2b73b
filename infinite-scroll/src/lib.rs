//! A headless engine for circular ("infinite") lists.
//!
//! A finite collection of `N` items is laid out three times back to back. The viewport starts in
//! the middle copy; whenever it drifts more than a quarter of a copy away from the center, the
//! engine jumps it back by a whole number of cells and records that shift as drift. Slots in the
//! tiled sequence are then resolved to logical indexes with [`correct`], so the jump is
//! invisible: every screen position shows the same item before and after.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport extent along the scroll axis
//! - scroll offset
//! - the current item count, on every layout pass
//!
//! For adapter-level utilities (data source/renderer wiring, anchors, tweens), see the
//! `infinite-scroll-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod index_space;
mod options;
mod recenter;
mod scroll;
mod shift;
mod state;
mod types;
mod viewport;


pub use error::{ConfigError, Result};
pub use index_space::{TILING_FACTOR, correct, correct_slot, slot_count};
pub use options::{InfiniteScrollOptions, InitialOffset, OnRecenterCallback};
pub use recenter::{RecenterEngine, RecenterPlan, center_offset};
pub use scroll::InfiniteScroll;
pub use shift::ShiftAccumulator;
pub use state::ScrollSnapshot;
pub use types::{Axis, CellMetrics, ItemLayout, LayoutOutcome, VirtualCell};
pub use viewport::ViewportTracker;
