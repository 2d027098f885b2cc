/// A single materialized item of a virtualized list, as reported by the list
/// widget for the current layout pass.
///
/// Off-screen items are never materialized; the engine only ever sees the
/// items that intersect the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    pub index: usize,
    /// Top edge in the scroll axis, relative to the viewport start.
    ///
    /// Negative when the item is partially scrolled off the top.
    pub top: i64,
    /// Size in the scroll axis.
    pub size: u32,
}

impl VisibleItem {
    pub fn bottom(&self) -> i64 {
        self.top + self.size as i64
    }
}

/// A borrowed snapshot of the list layout for the current pass.
///
/// This is the only thing the engine knows about the list: aggregate counts,
/// content padding, the currently materialized items, and whether a scroll
/// (user fling or animation) is in progress. The adapter rebuilds it every
/// frame; the engine never stores it.
#[derive(Clone, Copy, Debug)]
pub struct LayoutInfo<'a> {
    pub total_item_count: usize,
    /// Materialized items, ordered by index. May be empty.
    pub visible_items: &'a [VisibleItem],
    pub before_content_padding: f32,
    pub after_content_padding: f32,
    pub is_scrolling: bool,
}

/// An imperative jump-scroll command for the list widget: scroll so that the
/// item at `index` sits `offset` pixels above the viewport start.
///
/// `index` may equal the item count when the thumb sits at the very end of
/// the track; the list widget is expected to clamp (lazy lists do).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub index: usize,
    pub offset: i64,
}

/// Geometry of the scrollbar track in pixels.
///
/// The track is the region the thumb's top edge can occupy: the viewport
/// minus the content insets minus the thumb length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackGeometry {
    /// Height of the scroll container.
    pub viewport: f32,
    /// Inset above the track (the list's before-content padding).
    pub top_inset: f32,
    /// Inset below the track (the list's after-content padding).
    pub bottom_inset: f32,
    pub thumb_length: f32,
}

impl TrackGeometry {
    /// The usable extent of the scrollbar: viewport minus both insets.
    pub fn track_extent(&self) -> f32 {
        self.viewport - self.top_inset - self.bottom_inset
    }

    /// The range the thumb's top edge can travel.
    pub fn track_height(&self) -> f32 {
        self.track_extent() - self.thumb_length
    }

    /// A degenerate track has no room for the thumb to move (or is not a
    /// finite layout at all). Interaction on a degenerate track is a no-op.
    pub fn is_degenerate(&self) -> bool {
        !(self.track_height() > 0.0)
    }

    /// Clamps a thumb offset into `[top_inset, top_inset + track_height]`.
    ///
    /// On a degenerate track this pins the thumb at `top_inset`.
    pub fn clamp_thumb_offset(&self, offset: f32) -> f32 {
        if self.is_degenerate() {
            return self.top_inset;
        }
        offset.clamp(self.top_inset, self.top_inset + self.track_height())
    }
}

/// Presentation phase of the thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FadePhase {
    Hidden,
    Visible,
    FadingOut,
}
