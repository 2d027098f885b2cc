//! Bidirectional mapping between scroll position and thumb position.
//!
//! The forward map turns an estimated scroll offset/range pair into a thumb
//! offset within the track. The inverse map turns a thumb offset back into a
//! jump-scroll command, using the materialized items as a local density
//! estimate. Both are pure functions of `(layout, geometry)`.

use crate::estimate::{self, round_half_up};
use crate::{LayoutInfo, ScrollCommand, TrackGeometry};

/// Maps the current scroll position to a thumb offset within the track.
///
/// The proportion is intentionally not clamped: near the list ends the
/// estimate can exceed `[0, 1]` and push the thumb slightly past the track.
/// That boundary quirk is part of the upstream behavior and is preserved;
/// only non-finite results (near-zero denominator, degenerate geometry) are
/// rejected.
///
/// Returns `None` when the list is empty or the result would be non-finite;
/// callers keep the previous thumb offset in that case.
pub fn thumb_offset_for_scroll(layout: &LayoutInfo<'_>, track: &TrackGeometry) -> Option<f32> {
    if layout.total_item_count == 0 || layout.visible_items.is_empty() {
        return None;
    }

    let scroll_offset = estimate::scroll_offset(layout) as f32;
    let scroll_range = estimate::scroll_range(layout) as f32;
    let proportion = scroll_offset / (scroll_range - track.track_extent());
    let offset = track.track_height() * proportion + track.top_inset;
    offset.is_finite().then_some(offset)
}

/// Maps a thumb offset back to a jump-scroll command.
///
/// The target index comes from the thumb's proportion along the track; the
/// intra-item offset is scaled by the target item's size if it happens to be
/// materialized, and degrades to `0` otherwise. Far-away jumps are therefore
/// coarser than near jumps, which is inherent to virtualization.
///
/// Returns `None` when the list is empty or the track is degenerate.
pub fn scroll_command_for_thumb(
    layout: &LayoutInfo<'_>,
    track: &TrackGeometry,
    thumb_offset: f32,
) -> Option<ScrollCommand> {
    if layout.total_item_count == 0 || track.is_degenerate() {
        return None;
    }

    let scroll_ratio = (thumb_offset - track.top_inset) / track.track_height();
    let scroll_item = layout.total_item_count as f32 * scroll_ratio;
    let index = round_half_up(scroll_item);
    if !scroll_item.is_finite() || index < 0 {
        return None;
    }

    let item_size = layout
        .visible_items
        .iter()
        .find(|it| it.index == index as usize)
        .map(|it| it.size)
        .unwrap_or(0);
    let offset = round_half_up(item_size as f32 * (scroll_item - index as f32));

    Some(ScrollCommand {
        index: index as usize,
        offset,
    })
}
