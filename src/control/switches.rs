//! Latched switch edges
//!
//! The debouncer (outside this crate) records every settled level change.
//! A line settling low is a press: it sets that switch's pending bit, which
//! the control tick clears exactly once. A release in between does not undo
//! the press, however many ticks pass before it is seen.

use std::sync::atomic::{AtomicU8, Ordering};

/// Front-panel mode switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// SW1, steps the mode up
    Up,
    /// SW2, steps the mode down
    Down,
}

impl Switch {
    pub const ALL: [Switch; 2] = [Switch::Up, Switch::Down];

    const fn mask(self) -> u8 {
        match self {
            Switch::Up => 0x01,
            Switch::Down => 0x02,
        }
    }
}

/// Press-pending bits, one per switch
#[derive(Debug, Default)]
pub struct SwitchLatch {
    pending: AtomicU8,
}

impl SwitchLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicU8::new(0),
        }
    }

    /// Record a settled level change (debouncer side)
    ///
    /// Only the high-to-low settle is latched; releases carry no event.
    pub fn record(&self, switch: Switch, level: bool) {
        if !level {
            self.pending.fetch_or(switch.mask(), Ordering::Release);
        }
    }

    /// Consume a pending press of `switch`
    pub fn take(&self, switch: Switch) -> bool {
        let prev = self.pending.fetch_and(!switch.mask(), Ordering::AcqRel);
        prev & switch.mask() != 0
    }

    pub fn any_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_once() {
        let latch = SwitchLatch::new();
        latch.record(Switch::Up, false);
        assert!(latch.any_pending());
        assert!(latch.take(Switch::Up));
        assert!(!latch.take(Switch::Up));
        assert!(!latch.any_pending());
    }

    #[test]
    fn test_switches_independent() {
        let latch = SwitchLatch::new();
        latch.record(Switch::Down, false);
        assert!(!latch.take(Switch::Up));
        assert!(latch.take(Switch::Down));
    }

    #[test]
    fn test_release_is_not_an_event() {
        let latch = SwitchLatch::new();
        latch.record(Switch::Up, true);
        assert!(!latch.any_pending());
    }

    #[test]
    fn test_release_keeps_pending_press() {
        let latch = SwitchLatch::new();
        latch.record(Switch::Up, false);
        latch.record(Switch::Up, true);
        assert!(latch.take(Switch::Up));
    }
}
