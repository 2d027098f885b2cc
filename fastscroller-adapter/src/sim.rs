use alloc::vec::Vec;

use fastscroller::{LayoutInfo, ScrollCommand, VisibleItem};

use crate::ScrollableList;

/// A simulated virtualized list for tests and examples.
///
/// Only the items intersecting the viewport are materialized into the layout
/// snapshot, exactly like a real lazy list: the engine under test never gets
/// to see off-screen geometry.
#[derive(Clone, Debug)]
pub struct SimList {
    sizes: Vec<u32>,
    viewport: u32,
    before_padding: u32,
    after_padding: u32,
    scroll_offset: i64,
    is_scrolling: bool,
    visible: Vec<VisibleItem>,
}

impl SimList {
    pub fn new(sizes: Vec<u32>, viewport: u32) -> Self {
        let mut list = Self {
            sizes,
            viewport,
            before_padding: 0,
            after_padding: 0,
            scroll_offset: 0,
            is_scrolling: false,
            visible: Vec::new(),
        };
        list.refresh();
        list
    }

    pub fn uniform(count: usize, size: u32, viewport: u32) -> Self {
        Self::new(alloc::vec![size; count], viewport)
    }

    pub fn with_padding(mut self, before_padding: u32, after_padding: u32) -> Self {
        self.before_padding = before_padding;
        self.after_padding = after_padding;
        self.refresh();
        self
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        self.is_scrolling = is_scrolling;
    }

    pub fn total_size(&self) -> i64 {
        let items: i64 = self.sizes.iter().map(|&s| s as i64).sum();
        self.before_padding as i64 + items + self.after_padding as i64
    }

    pub fn max_scroll_offset(&self) -> i64 {
        (self.total_size() - self.viewport as i64).max(0)
    }

    pub fn set_scroll_offset(&mut self, offset: i64) {
        self.scroll_offset = offset.clamp(0, self.max_scroll_offset());
        self.refresh();
    }

    fn item_start(&self, index: usize) -> i64 {
        self.sizes[..index].iter().map(|&s| s as i64).sum()
    }

    fn refresh(&mut self) {
        self.visible.clear();
        let viewport = self.viewport as i64;
        let mut start = 0i64;
        for (index, &size) in self.sizes.iter().enumerate() {
            let top = self.before_padding as i64 + start - self.scroll_offset;
            if top >= viewport {
                break;
            }
            if top + size as i64 > 0 {
                self.visible.push(VisibleItem { index, top, size });
            }
            start += size as i64;
        }
    }
}

impl ScrollableList for SimList {
    fn layout_info(&self) -> LayoutInfo<'_> {
        LayoutInfo {
            total_item_count: self.sizes.len(),
            visible_items: &self.visible,
            before_content_padding: self.before_padding as f32,
            after_content_padding: self.after_padding as f32,
            is_scrolling: self.is_scrolling,
        }
    }

    fn scroll_to_item(&mut self, command: ScrollCommand) {
        if self.sizes.is_empty() {
            return;
        }
        let index = command.index.min(self.sizes.len() - 1);
        self.set_scroll_offset(self.item_start(index) + command.offset);
    }
}
