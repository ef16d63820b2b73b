//! Adapter utilities for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An owning controller wired to injected collaborators (data source, renderer, delegate)
//! - Scroll anchoring across data or drift changes
//! - Tween-based smooth scrolling helpers (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod source;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor, nearest_slot_for_index};
pub use controller::InfiniteList;
pub use source::{DataSource, InfiniteListDelegate, Renderer};
pub use tween::{Easing, Tween};
