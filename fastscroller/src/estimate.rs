//! Scroll offset/range estimation from the materialized items only.
//!
//! A virtualized list never lays out off-screen items, so the true content
//! extent is unknown. Both estimates extrapolate the average size of the
//! currently visible sample across the whole list. This is a local linear
//! extrapolation: lists with widely varying item sizes get approximate (and
//! non-linear) results. That is the accepted contract, not a defect.

use crate::LayoutInfo;

/// Estimated pixel distance from the top of the full content to the top of
/// the viewport.
///
/// Returns `0` for an empty list or an empty visible set.
pub fn scroll_offset(layout: &LayoutInfo<'_>) -> i64 {
    // Reversed layouts would count items after the viewport instead
    // (`total - max_index - 1`); that branch is unfinished upstream and the
    // public path is hardcoded to the forward layout.
    scroll_offset_for(layout, false)
}

fn scroll_offset_for(layout: &LayoutInfo<'_>, reverse_layout: bool) -> i64 {
    if layout.total_item_count == 0 {
        return 0;
    }
    let (Some(start), Some(end)) = (layout.visible_items.first(), layout.visible_items.last())
    else {
        return 0;
    };

    let min_index = start.index.min(end.index);
    let max_index = start.index.max(end.index);
    let items_before = if reverse_layout {
        layout.total_item_count.saturating_sub(max_index + 1)
    } else {
        min_index
    };

    let laid_out_span = (end.bottom() - start.top).unsigned_abs();
    let laid_out_count = max_index - min_index + 1;
    let avg_item_size = laid_out_span as f32 / laid_out_count as f32;

    round_half_up(items_before as f32 * avg_item_size - start.top as f32)
}

/// Estimated total scrollable pixel extent of the full content.
///
/// Returns `0` for an empty list or an empty visible set.
pub fn scroll_range(layout: &LayoutInfo<'_>) -> i64 {
    if layout.total_item_count == 0 {
        return 0;
    }
    let (Some(start), Some(end)) = (layout.visible_items.first(), layout.visible_items.last())
    else {
        return 0;
    };

    let laid_out_span = end.bottom() - start.top;
    let laid_out_count = start.index.abs_diff(end.index) + 1;

    round_half_up(laid_out_span as f32 / laid_out_count as f32 * layout.total_item_count as f32)
}

/// `floor(v + 0.5)` rounding, kept dependency-free so the crate stays
/// `no_std`-friendly (`f32::round` lives in `std`).
pub(crate) fn round_half_up(v: f32) -> i64 {
    let shifted = v + 0.5;
    let truncated = shifted as i64;
    if shifted < 0.0 && shifted != truncated as f32 {
        truncated - 1
    } else {
        truncated
    }
}
