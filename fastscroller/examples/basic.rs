// Example: estimate scroll offset/range from the visible sample and map it
// to a thumb offset.
use fastscroller::{
    LayoutInfo, THUMB_LENGTH, TrackGeometry, VisibleItem, scroll_offset, scroll_range,
    thumb_offset_for_scroll,
};

fn main() {
    // 50 rows of 40px, rows 10..=19 materialized, row 10 flush with the top.
    let items: Vec<VisibleItem> = (10..20)
        .map(|index| VisibleItem {
            index,
            top: (index as i64 - 10) * 40,
            size: 40,
        })
        .collect();
    let layout = LayoutInfo {
        total_item_count: 50,
        visible_items: &items,
        before_content_padding: 0.0,
        after_content_padding: 0.0,
        is_scrolling: true,
    };
    let track = TrackGeometry {
        viewport: 400.0,
        top_inset: 0.0,
        bottom_inset: 0.0,
        thumb_length: THUMB_LENGTH,
    };

    println!("scroll_offset={}", scroll_offset(&layout));
    println!("scroll_range={}", scroll_range(&layout));
    println!(
        "thumb_offset={:?} (track height {})",
        thumb_offset_for_scroll(&layout, &track),
        track.track_height()
    );
}
