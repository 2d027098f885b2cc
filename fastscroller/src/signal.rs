/// A single-slot, drop-oldest activity signal.
///
/// Scroll and drag ticks both land here; a new emission overwrites any
/// pending one, so a burst of events within one frame collapses into a
/// single fade restart instead of queuing several. This is the deliberate
/// backpressure policy of the engine, equivalent to a bounded channel of
/// capacity 1 with overwrite-on-full semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivitySlot {
    slot: Option<u64>,
}

impl ActivitySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records activity at `now_ms`, replacing any pending emission.
    pub fn emit(&mut self, now_ms: u64) {
        self.slot = Some(now_ms);
    }

    /// Drains the pending emission, if any.
    pub fn take(&mut self) -> Option<u64> {
        self.slot.take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}
