use fastscroller::{LayoutInfo, ScrollCommand};

/// The seam between the fast-scroller engine and a real list widget.
///
/// The engine only ever consumes a per-frame layout snapshot and issues
/// jump-scroll commands; it does not own the list's data or layout.
pub trait ScrollableList {
    /// Layout snapshot for the current frame.
    fn layout_info(&self) -> LayoutInfo<'_>;

    /// Scrolls so the item at `command.index` sits `command.offset` pixels
    /// above the viewport start. Out-of-range indexes are clamped.
    fn scroll_to_item(&mut self, command: ScrollCommand);
}
