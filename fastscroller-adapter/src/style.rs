use fastscroller::FastScroller;

/// Default thumb thickness, in pixels (8 density-independent units).
pub const THUMB_THICKNESS: f32 = 8.0;
/// Default horizontal inset between the thumb and the container edge.
pub const THUMB_HORIZONTAL_INSET: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Visual parameters of the thumb overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbStyle {
    /// `None` means "use the host theme's primary color".
    pub color: Option<Rgba>,
    pub thickness: f32,
    /// Rounded-corner radius; defaults to half the thickness (a pill shape).
    pub corner_radius: f32,
    pub horizontal_inset: f32,
    /// Caller-supplied extra end padding (e.g. to clear a side panel).
    pub end_padding: f32,
}

impl ThumbStyle {
    pub fn new() -> Self {
        Self {
            color: None,
            thickness: THUMB_THICKNESS,
            corner_radius: THUMB_THICKNESS / 2.0,
            horizontal_inset: THUMB_HORIZONTAL_INSET,
            end_padding: 0.0,
        }
    }

    pub fn with_color(mut self, color: Option<Rgba>) -> Self {
        self.color = color;
        self
    }

    pub fn with_end_padding(mut self, end_padding: f32) -> Self {
        self.end_padding = end_padding;
        self
    }
}

impl Default for ThumbStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// The thumb's on-screen rectangle, ready for a rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub alpha: f32,
}

/// Pure render function of the scroller state: the right-aligned pill, at
/// the current thumb offset, with the current fade alpha.
///
/// Any presentation layer (retained- or immediate-mode) can call this on
/// every state change and draw the result; no other state is needed.
pub fn thumb_rect(scroller: &FastScroller, style: &ThumbStyle, viewport_width: f32) -> ThumbRect {
    ThumbRect {
        x: viewport_width - style.horizontal_inset - style.end_padding - style.thickness,
        y: scroller.thumb_offset(),
        width: style.thickness,
        height: scroller.track().thumb_length,
        corner_radius: style.corner_radius,
        alpha: scroller.alpha(),
    }
}
