use alloc::sync::Arc;
use core::cell::Cell;

use crate::fade::Fade;
use crate::signal::ActivitySlot;
use crate::{FadePhase, LayoutInfo, ScrollCommand, ScrollerOptions, TrackGeometry, mapper};

/// The fast-scroller engine: thumb state plus the two update paths.
///
/// This type is intentionally UI-agnostic. An adapter drives it with:
/// - [`FastScroller::on_scroll`] whenever the list reports a scroll change
/// - [`FastScroller::on_drag_start`] / [`FastScroller::on_drag`] /
///   [`FastScroller::on_drag_end`] for thumb drag gestures
/// - [`FastScroller::tick`] once per frame to advance the fade
///
/// The two update paths are mutually exclusive by the drag flag: while the
/// thumb is dragged, scroll notifications must not move the thumb, otherwise
/// the scroll command issued by the drag would immediately feed back into the
/// thumb position and oscillate. Drag state wins.
///
/// The presentation layer re-derives its visuals from this state whenever
/// `on_change` fires (or simply every frame).
#[derive(Debug)]
pub struct FastScroller {
    options: ScrollerOptions,
    track: TrackGeometry,
    thumb_offset: f32,
    alpha: f32,
    dragged: bool,
    list_scrolling: bool,
    fade: Fade,
    activity: ActivitySlot,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl FastScroller {
    pub fn new(options: ScrollerOptions) -> Self {
        fdebug!(
            thumb_length = options.thumb_length,
            fade_delay_ms = options.fade_delay_ms,
            "FastScroller::new"
        );
        let fade = Fade::new(options.fade_delay_ms, options.fade_duration_ms);
        Self {
            track: TrackGeometry {
                viewport: 0.0,
                top_inset: 0.0,
                bottom_inset: 0.0,
                thumb_length: options.thumb_length,
            },
            thumb_offset: 0.0,
            alpha: 0.0,
            dragged: false,
            list_scrolling: false,
            fade,
            activity: ActivitySlot::new(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&FastScroller) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn track(&self) -> TrackGeometry {
        self.track
    }

    /// The thumb's top edge, in pixels from the container top.
    ///
    /// Updated by the scroll path (unclamped, see [`crate::thumb_offset_for_scroll`])
    /// and by the drag path (clamped into the track).
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_offset
    }

    /// Alpha as of the last [`FastScroller::tick`].
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Mirrors the list's scrolling-in-progress flag from the last snapshot.
    pub fn is_list_scrolling(&self) -> bool {
        self.list_scrolling
    }

    pub fn fade_phase(&self, now_ms: u64) -> FadePhase {
        self.fade.phase(now_ms)
    }

    /// Drag gestures are only accepted while the thumb is visible and the
    /// list is not scroll-animating (prevents input races with momentum).
    pub fn drag_enabled(&self) -> bool {
        self.is_visible() && !self.list_scrolling
    }

    /// Whether the thumb's hit region should be excluded from system-level
    /// back/forward gestures right now. The actual exclusion is performed by
    /// an external gesture-routing collaborator; this is only the predicate.
    pub fn system_gesture_exclusion(&self) -> bool {
        self.is_visible() && !self.dragged && !self.list_scrolling
    }

    pub fn set_viewport_height(&mut self, viewport: f32) {
        if self.track.viewport == viewport {
            return;
        }
        self.track.viewport = viewport;
        self.notify();
    }

    /// Refreshes insets and the scrolling flag from a layout snapshot without
    /// running either update path. Useful on frames where the scroll position
    /// did not change.
    pub fn sync_layout(&mut self, layout: &LayoutInfo<'_>) {
        self.batch_update(|s| s.apply_layout(layout));
    }

    /// The scroll-driven path: recomputes the thumb offset from the layout
    /// snapshot.
    ///
    /// No-op while the thumb is dragged (drag wins), when the list is empty,
    /// or when the mapping would produce a non-finite offset; the thumb then
    /// keeps its previous position.
    pub fn on_scroll(&mut self, layout: &LayoutInfo<'_>, now_ms: u64) {
        self.batch_update(|s| {
            s.apply_layout(layout);
            if layout.total_item_count == 0 || s.dragged {
                return;
            }
            let Some(offset) = mapper::thumb_offset_for_scroll(layout, &s.track) else {
                return;
            };
            ftrace!(thumb_offset = offset, now_ms, "on_scroll");
            if s.thumb_offset != offset {
                s.thumb_offset = offset;
                s.notify();
            }
            s.activity.emit(now_ms);
        });
    }

    /// Starts a drag gesture. Returns `false` (and stays idle) when dragging
    /// is currently disabled.
    pub fn on_drag_start(&mut self) -> bool {
        if self.dragged {
            return true;
        }
        if !self.drag_enabled() {
            return false;
        }
        self.dragged = true;
        self.notify();
        true
    }

    /// The drag-driven path: moves the thumb by `delta` pixels (clamped into
    /// the track) and returns the jump-scroll command for the list.
    ///
    /// Ignored unless a drag is in progress. On a degenerate track the whole
    /// interaction is a no-op. Returns `None` for an empty list; the thumb
    /// still moves, but there is nothing to scroll.
    pub fn on_drag(
        &mut self,
        delta: f32,
        layout: &LayoutInfo<'_>,
        now_ms: u64,
    ) -> Option<ScrollCommand> {
        if !self.dragged {
            return None;
        }
        let mut cmd = None;
        self.batch_update(|s| {
            s.apply_layout(layout);
            if s.track.is_degenerate() {
                return;
            }
            let next = s.track.clamp_thumb_offset(s.thumb_offset + delta);
            if s.thumb_offset != next {
                s.thumb_offset = next;
                s.notify();
            }
            cmd = mapper::scroll_command_for_thumb(layout, &s.track, s.thumb_offset);
            if let Some(c) = cmd {
                ftrace!(index = c.index, offset = c.offset, now_ms, "on_drag");
                s.activity.emit(now_ms);
            }
        });
        cmd
    }

    pub fn on_drag_end(&mut self) {
        if !self.dragged {
            return;
        }
        self.dragged = false;
        self.notify();
    }

    /// Advances the fade and returns the current alpha.
    ///
    /// Pending activity (coalesced, latest wins) restarts the fade cycle
    /// before sampling.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        if let Some(ts) = self.activity.take() {
            self.fade.restart(ts);
        }
        let alpha = self.fade.sample(now_ms);
        if self.alpha != alpha {
            self.alpha = alpha;
            self.notify();
        }
        alpha
    }

    fn apply_layout(&mut self, layout: &LayoutInfo<'_>) {
        let top = layout.before_content_padding;
        let bottom = layout.after_content_padding;
        if self.track.top_inset != top || self.track.bottom_inset != bottom {
            self.track.top_inset = top;
            self.track.bottom_inset = bottom;
            self.notify();
        }
        if self.list_scrolling != layout.is_scrolling {
            self.list_scrolling = layout.is_scrolling;
            self.notify();
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame an adapter updates the viewport, forwards a scroll
    /// notification, and ticks the fade together; without batching each step
    /// may fire `on_change`, which can be expensive if the callback drives
    /// rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}
