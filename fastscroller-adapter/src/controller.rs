use fastscroller::{FastScroller, ScrollCommand, ScrollerOptions};

use crate::ScrollableList;

/// A framework-neutral controller that wraps a [`FastScroller`] and drives it
/// from per-frame list snapshots and drag gestures.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_frame(list, viewport, now_ms)` once per frame/layout pass
/// - `on_drag_start` / `on_drag` / `on_drag_end` for thumb gestures
/// - `tick(now_ms)` each frame to advance the fade
///
/// `on_frame` forwards a scroll notification only when the first visible
/// item actually moved, so idle frames refresh layout flags without
/// restarting the fade.
#[derive(Debug)]
pub struct Controller {
    scroller: FastScroller,
    last_first_item: Option<(usize, i64)>,
}

impl Controller {
    pub fn new(options: ScrollerOptions) -> Self {
        Self {
            scroller: FastScroller::new(options),
            last_first_item: None,
        }
    }

    pub fn from_scroller(scroller: FastScroller) -> Self {
        Self {
            scroller,
            last_first_item: None,
        }
    }

    pub fn scroller(&self) -> &FastScroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut FastScroller {
        &mut self.scroller
    }

    pub fn into_scroller(self) -> FastScroller {
        self.scroller
    }

    /// Per-frame entry point: applies viewport geometry and either runs the
    /// scroll-driven path (when the list moved) or just refreshes layout
    /// flags.
    pub fn on_frame(&mut self, list: &impl ScrollableList, viewport: f32, now_ms: u64) {
        let layout = list.layout_info();
        let first = layout.visible_items.first().map(|it| (it.index, it.top));
        let moved = first != self.last_first_item;
        self.last_first_item = first;

        self.scroller.batch_update(|s| {
            s.set_viewport_height(viewport);
            if moved {
                s.on_scroll(&layout, now_ms);
            } else {
                s.sync_layout(&layout);
            }
        });
    }

    /// Starts a drag gesture. Returns `false` when dragging is disabled
    /// (thumb hidden, or the list is scroll-animating).
    pub fn on_drag_start(&mut self) -> bool {
        self.scroller.on_drag_start()
    }

    /// Routes a drag delta through the engine and applies the resulting
    /// jump-scroll command to the list.
    pub fn on_drag(
        &mut self,
        list: &mut impl ScrollableList,
        delta: f32,
        now_ms: u64,
    ) -> Option<ScrollCommand> {
        let cmd = {
            let layout = list.layout_info();
            self.scroller.on_drag(delta, &layout, now_ms)
        };
        if let Some(cmd) = cmd {
            list.scroll_to_item(cmd);
        }
        cmd
    }

    pub fn on_drag_end(&mut self) {
        self.scroller.on_drag_end();
    }

    /// Advances the fade and returns the current alpha.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        self.scroller.tick(now_ms)
    }

    pub fn drag_enabled(&self) -> bool {
        self.scroller.drag_enabled()
    }

    pub fn system_gesture_exclusion(&self) -> bool {
        self.scroller.system_gesture_exclusion()
    }
}
