//! Mode state machine
//!
//! The audio callback and the control tick run in different contexts and
//! share nothing but [`SharedState`]. Every field is a single atomic byte:
//!
//! | field            | written by            | read by               |
//! |------------------|-----------------------|-----------------------|
//! | mode             | control tick          | audio callback        |
//! | switch pending   | debouncer (set), control tick (clear) | control tick |

mod mode;
mod switches;

pub use mode::{Mode, ModeCell};
pub use switches::{Switch, SwitchLatch};

use log::info;

use crate::traits::{Indicators, Led};

/// State shared between the audio callback and the control tick
#[derive(Debug, Default)]
pub struct SharedState {
    pub mode: ModeCell,
    pub switches: SwitchLatch,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            mode: ModeCell::new(Mode::PassThrough),
            switches: SwitchLatch::new(),
        }
    }
}

/// Consume latched switch presses and step the mode
///
/// Each press steps the mode once: SW1 up, SW2 down. On a change the
/// indicators are refreshed and the new mode returned.
pub fn control_tick<I: Indicators>(shared: &SharedState, indicators: &mut I) -> Option<Mode> {
    if !shared.switches.any_pending() {
        return None;
    }

    let before = shared.mode.load();
    let mut mode = before;

    for switch in Switch::ALL {
        if shared.switches.take(switch) {
            mode = match switch {
                Switch::Up => mode.next(),
                Switch::Down => mode.prev(),
            };
        }
    }

    if mode == before {
        return None;
    }

    shared.mode.store(mode);
    show_mode(mode, indicators);
    info!("mode {:?} -> {:?}", before, mode);
    Some(mode)
}

/// LED2 red shows bit 0 of the mode, LED1 red shows bit 1
pub fn show_mode<I: Indicators>(mode: Mode, indicators: &mut I) {
    let level = |bit: u8| if mode.index() >> bit & 0x01 != 0 { 255 } else { 0 };
    indicators.set_colour(Led::Led2, level(0), 0, 0);
    indicators.set_colour(Led::Led1, level(1), 0, 0);
}
