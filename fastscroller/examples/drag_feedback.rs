// Example: drive the scroller state machine by hand and watch the drag path
// emit jump-scroll commands while the fade follows activity.
use fastscroller::{FastScroller, LayoutInfo, ScrollerOptions, VisibleItem};

fn main() {
    let items: Vec<VisibleItem> = (0..10)
        .map(|index| VisibleItem {
            index,
            top: index as i64 * 40,
            size: 40,
        })
        .collect();
    let layout = LayoutInfo {
        total_item_count: 200,
        visible_items: &items,
        before_content_padding: 0.0,
        after_content_padding: 0.0,
        is_scrolling: false,
    };

    let mut scroller = FastScroller::new(ScrollerOptions::new());
    scroller.set_viewport_height(400.0);

    scroller.on_scroll(&layout, 0);
    println!("alpha after scroll tick: {}", scroller.tick(1));

    assert!(scroller.on_drag_start());
    for (now_ms, delta) in [(16u64, 40.0f32), (32, 40.0), (48, 40.0)] {
        let cmd = scroller.on_drag(delta, &layout, now_ms);
        println!(
            "drag to {:>6.1}px -> {:?}",
            scroller.thumb_offset(),
            cmd
        );
    }
    scroller.on_drag_end();

    for now_ms in [100u64, 2100, 2173, 2300] {
        println!("t={now_ms}ms alpha={}", scroller.tick(now_ms));
    }
}
