//! Adapter utilities for the `fastscroller` crate.
//!
//! The `fastscroller` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - The [`ScrollableList`] seam between the engine and a real list widget
//! - A [`Controller`] that wires frame/drag events through the engine and
//!   applies the resulting jump-scroll commands
//! - A simulated virtualized list ([`SimList`]) for tests and examples
//! - Presentation helpers: thumb style constants and a pure
//!   state-to-rectangle render function
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod list;
mod sim;
mod style;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use list::ScrollableList;
pub use sim::SimList;
pub use style::{Rgba, THUMB_HORIZONTAL_INSET, THUMB_THICKNESS, ThumbRect, ThumbStyle, thumb_rect};
