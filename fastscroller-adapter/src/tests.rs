use crate::*;

use fastscroller::{ScrollCommand, ScrollerOptions};

#[test]
fn sim_materializes_only_viewport_items() {
    let list = SimList::uniform(50, 40, 400);
    let layout = list.layout_info();
    assert_eq!(layout.total_item_count, 50);
    assert_eq!(layout.visible_items.len(), 10);
    assert_eq!(layout.visible_items.first().map(|it| it.index), Some(0));
    assert_eq!(layout.visible_items.last().map(|it| it.index), Some(9));

    let mut list = list;
    list.set_scroll_offset(20);
    let layout = list.layout_info();
    // Item 0 is half off-screen but still materialized; item 10 peeks in.
    assert_eq!(layout.visible_items.first().map(|it| it.top), Some(-20));
    assert_eq!(layout.visible_items.last().map(|it| it.index), Some(10));
}

#[test]
fn sim_respects_content_padding() {
    let list = SimList::uniform(50, 40, 400).with_padding(16, 36);
    let layout = list.layout_info();
    assert_eq!(layout.before_content_padding, 16.0);
    assert_eq!(layout.after_content_padding, 36.0);
    assert_eq!(layout.visible_items.first().map(|it| it.top), Some(16));
}

#[test]
fn sim_scroll_to_item_clamps() {
    let mut list = SimList::uniform(50, 40, 400);
    list.scroll_to_item(ScrollCommand {
        index: 500,
        offset: 0,
    });
    assert_eq!(list.scroll_offset(), list.max_scroll_offset());

    list.scroll_to_item(ScrollCommand {
        index: 0,
        offset: -50,
    });
    assert_eq!(list.scroll_offset(), 0);
}

#[test]
fn drag_round_trip_reaches_mid_list() {
    let mut list = SimList::uniform(50, 40, 400);
    let mut c = Controller::new(ScrollerOptions::new());

    c.on_frame(&list, 400.0, 0);
    assert_eq!(c.tick(1), 1.0);
    assert!(c.on_drag_start());

    // Track height is 400 - 48 = 352; halfway targets item 25.
    let cmd = c.on_drag(&mut list, 176.0, 10).unwrap();
    assert_eq!(cmd, ScrollCommand { index: 25, offset: 0 });
    assert_eq!(list.scroll_offset(), 1000);

    // The jump produces a scroll notification on the next frame; while the
    // drag is live it must not move the thumb back.
    c.on_frame(&list, 400.0, 20);
    assert_eq!(c.scroller().thumb_offset(), 176.0);

    // After the drag ends, list scrolling drives the thumb again.
    c.on_drag_end();
    list.set_scroll_offset(400);
    c.on_frame(&list, 400.0, 30);
    assert_eq!(c.scroller().thumb_offset(), 88.0);
}

#[test]
fn idle_frames_do_not_restart_the_fade() {
    let list = SimList::uniform(50, 40, 400);
    let mut c = Controller::new(ScrollerOptions::new());

    c.on_frame(&list, 400.0, 0);
    assert_eq!(c.tick(1), 1.0);

    // The list did not move: this frame must not count as activity, so the
    // fade stays anchored at t=0 and is half done at 2125ms.
    c.on_frame(&list, 400.0, 2100);
    assert_eq!(c.tick(2125), 0.5);
}

#[test]
fn drag_is_refused_while_the_list_animates() {
    let mut list = SimList::uniform(50, 40, 400);
    let mut c = Controller::new(ScrollerOptions::new());
    c.on_frame(&list, 400.0, 0);
    c.tick(1);
    assert!(c.drag_enabled());

    list.set_is_scrolling(true);
    c.on_frame(&list, 400.0, 5);
    assert!(!c.drag_enabled());
    assert!(!c.on_drag_start());
    assert!(!c.system_gesture_exclusion());

    list.set_is_scrolling(false);
    c.on_frame(&list, 400.0, 10);
    assert!(c.on_drag_start());
}

#[test]
fn thumb_rect_follows_state() {
    let list = SimList::uniform(50, 40, 400);
    let mut c = Controller::new(ScrollerOptions::new());
    c.on_frame(&list, 400.0, 0);
    c.tick(1);

    let style = ThumbStyle::new();
    let rect = thumb_rect(c.scroller(), &style, 1080.0);
    assert_eq!(rect.x, 1064.0); // 1080 - inset 8 - thickness 8
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.width, 8.0);
    assert_eq!(rect.height, 48.0);
    assert_eq!(rect.corner_radius, 4.0);
    assert_eq!(rect.alpha, 1.0);
}
