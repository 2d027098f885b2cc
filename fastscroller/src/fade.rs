use crate::FadePhase;

/// Quiet-period fade for the thumb.
///
/// Any activity snaps the alpha to `1.0` and (re)arms the timer: after
/// `delay_ms` of quiet the alpha ramps linearly to `0.0` over `duration_ms`.
/// A restart preempts an in-flight ramp, so bursts of activity coalesce into
/// a single fade cycle (latest wins).
///
/// Timestamps are adapter-provided milliseconds, sampled the same way the
/// rest of the engine is driven: once per frame/tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fade {
    delay_ms: u64,
    duration_ms: u64,
    shown_at: Option<u64>,
}

impl Fade {
    pub fn new(delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            delay_ms,
            duration_ms: duration_ms.max(1),
            shown_at: None,
        }
    }

    /// Restarts the cycle from `now_ms`, canceling any in-flight fade.
    pub fn restart(&mut self, now_ms: u64) {
        self.shown_at = Some(now_ms);
    }

    /// Samples the alpha at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> f32 {
        let Some(shown_at) = self.shown_at else {
            return 0.0;
        };
        let quiet = now_ms.saturating_sub(shown_at);
        if quiet < self.delay_ms {
            return 1.0;
        }
        let ran = quiet - self.delay_ms;
        if ran >= self.duration_ms {
            0.0
        } else {
            1.0 - ran as f32 / self.duration_ms as f32
        }
    }

    pub fn phase(&self, now_ms: u64) -> FadePhase {
        let alpha = self.sample(now_ms);
        if alpha <= 0.0 {
            FadePhase::Hidden
        } else if alpha >= 1.0 {
            FadePhase::Visible
        } else {
            FadePhase::FadingOut
        }
    }
}
