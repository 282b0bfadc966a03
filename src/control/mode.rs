//! Processing modes

use std::sync::atomic::{AtomicU8, Ordering};

/// The four processing modes, stepped cyclically by the front-panel switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mode {
    /// Input copied straight to output
    #[default]
    PassThrough = 0,
    /// LMS interference canceller on the left input
    AdaptiveNotch = 1,
    /// Steady sine at the board tone frequency
    Tone = 2,
    /// Differential BPSK, one symbol per block
    Modulate = 3,
}

impl Mode {
    pub const COUNT: u8 = 4;

    /// Mode for the two low bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Mode::PassThrough,
            1 => Mode::AdaptiveNotch,
            2 => Mode::Tone,
            _ => Mode::Modulate,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Next mode, wrapping after the last
    pub const fn next(self) -> Self {
        Self::from_bits(self.index() + 1)
    }

    /// Previous mode, wrapping before the first
    pub const fn prev(self) -> Self {
        Self::from_bits(self.index() + Self::COUNT - 1)
    }
}

/// Current mode, shared between the control tick (writer) and the audio
/// callback (reader)
#[derive(Debug, Default)]
pub struct ModeCell(AtomicU8);

impl ModeCell {
    pub const fn new(mode: Mode) -> Self {
        Self(AtomicU8::new(mode as u8))
    }

    pub fn load(&self) -> Mode {
        Mode::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, mode: Mode) {
        self.0.store(mode.index(), Ordering::Release);
    }
}
