//! Service layer for selection state and view rendering.
//!
//! This module contains the logic between the immutable catalog and the
//! HTTP handlers: the per-dashboard selection slots updated by click events,
//! and the pure derivation of the full dashboard view.

pub mod selection;

pub mod view_model;

pub use selection::{ApplyOutcome, ClickEvent, ClickOrigin, Selection, SelectionStore};
pub use view_model::render;
