use alloc::sync::Arc;

use crate::scroller::FastScroller;

/// A callback fired when the scroller's observable state changes (thumb
/// offset, alpha, drag flag, geometry).
pub type OnChangeCallback = Arc<dyn Fn(&FastScroller) + Send + Sync>;

/// Default thumb length, in pixels (48 density-independent units).
pub const THUMB_LENGTH: f32 = 48.0;
/// Quiet period before the thumb starts fading out.
pub const FADE_DELAY_MS: u64 = 2000;
/// Platform scrollbar fade duration default.
pub const FADE_DURATION_MS: u64 = 250;

/// Configuration for [`FastScroller`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct ScrollerOptions {
    /// Thumb length in the scroll axis, in pixels.
    pub thumb_length: f32,
    /// Quiet period before the fade-out starts.
    pub fade_delay_ms: u64,
    /// Duration of the fade-out ramp.
    pub fade_duration_ms: u64,
    /// Optional callback fired when the scroller's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self {
            thumb_length: THUMB_LENGTH,
            fade_delay_ms: FADE_DELAY_MS,
            fade_duration_ms: FADE_DURATION_MS,
            on_change: None,
        }
    }

    pub fn with_thumb_length(mut self, thumb_length: f32) -> Self {
        self.thumb_length = thumb_length;
        self
    }

    pub fn with_fade_delay_ms(mut self, fade_delay_ms: u64) -> Self {
        self.fade_delay_ms = fade_delay_ms;
        self
    }

    pub fn with_fade_duration_ms(mut self, fade_duration_ms: u64) -> Self {
        self.fade_duration_ms = fade_duration_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FastScroller) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("thumb_length", &self.thumb_length)
            .field("fade_delay_ms", &self.fade_delay_ms)
            .field("fade_duration_ms", &self.fade_duration_ms)
            .finish_non_exhaustive()
    }
}
