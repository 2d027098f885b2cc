// Example: a full feedback loop against a simulated lazy list. User scroll
// moves the thumb; dragging the thumb jump-scrolls the list.
use fastscroller::ScrollerOptions;
use fastscroller_adapter::{Controller, ScrollableList, SimList, ThumbStyle, thumb_rect};

fn main() {
    let mut list = SimList::uniform(500, 40, 400).with_padding(16, 36);
    let mut c = Controller::new(ScrollerOptions::new());
    let style = ThumbStyle::new();

    // The user flings the list.
    let mut now_ms = 0u64;
    for _ in 0..5 {
        let next = list.scroll_offset() + 600;
        list.set_scroll_offset(next);
        c.on_frame(&list, 400.0, now_ms);
        c.tick(now_ms);
        println!(
            "scroll={:>5} thumb={:?}",
            list.scroll_offset(),
            thumb_rect(c.scroller(), &style, 1080.0)
        );
        now_ms += 16;
    }

    // Then grabs the thumb and drags it back to the top of the track.
    assert!(c.on_drag_start());
    for _ in 0..4 {
        let cmd = c.on_drag(&mut list, -40.0, now_ms);
        c.on_frame(&list, 400.0, now_ms);
        println!(
            "drag  cmd={cmd:?} scroll={:>5} first_visible={:?}",
            list.scroll_offset(),
            list.layout_info().visible_items.first().map(|it| it.index)
        );
        now_ms += 16;
    }
    c.on_drag_end();

    // Quiet: the thumb fades out after the delay.
    for now_ms in [now_ms, now_ms + 2000, now_ms + 2125, now_ms + 2300] {
        println!("t={now_ms}ms alpha={}", c.tick(now_ms));
    }
}
