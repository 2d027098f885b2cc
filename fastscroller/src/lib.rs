//! A headless fast-scroller engine for virtualized lists.
//!
//! For adapter-level utilities (list seam, controller, simulated list, thumb
//! styling), see the `fastscroller-adapter` crate.
//!
//! A virtualized list only materializes the items near the viewport, so the
//! true content extent is never known. This crate implements the two
//! estimation algorithms that keep a draggable scrollbar thumb in sync with
//! such a list anyway:
//!
//! - scroll → thumb: extrapolate scroll offset/range from the visible sample
//!   and map them to a thumb offset within the track
//! - thumb → scroll: map a dragged thumb offset back to a jump-scroll
//!   command, using the visible item sizes as a local density estimate
//!
//! plus the interaction state machine around them: drag/scroll mutual
//! exclusion, activity-driven fade-out, and gesture-exclusion gating.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - a layout snapshot per frame (visible items, counts, padding)
//! - drag deltas and frame timestamps
//! - a `scroll_to_item`-style command sink
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod estimate;
mod fade;
mod mapper;
mod options;
mod scroller;
mod signal;
mod types;


pub use estimate::{scroll_offset, scroll_range};
pub use fade::Fade;
pub use mapper::{scroll_command_for_thumb, thumb_offset_for_scroll};
pub use options::{FADE_DELAY_MS, FADE_DURATION_MS, OnChangeCallback, ScrollerOptions, THUMB_LENGTH};
pub use scroller::FastScroller;
pub use signal::ActivitySlot;
pub use types::{FadePhase, LayoutInfo, ScrollCommand, TrackGeometry, VisibleItem};
