//! Bit sources for the modulator

use crate::config::DEFAULT_MESSAGE;
use crate::tables::PRN_SEQUENCE;
use crate::traits::BitSource;

/// Alternating pairs of zeros and ones: two phase reversals, two holds
pub const DEFAULT_PATTERN: &[bool] = &[false, false, true, true];

/// Cycles a fixed bit pattern
#[derive(Debug, Clone)]
pub struct TestPattern {
    pattern: &'static [bool],
    pos: usize,
}

impl TestPattern {
    /// An empty pattern sends idle ones
    pub fn new(pattern: &'static [bool]) -> Self {
        Self { pattern, pos: 0 }
    }
}

impl Default for TestPattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl BitSource for TestPattern {
    fn next_bit(&mut self) -> bool {
        let Some(&bit) = self.pattern.get(self.pos) else {
            return true;
        };
        self.pos = (self.pos + 1) % self.pattern.len();
        bit
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}

/// Cycles the seeded pseudo-random table
#[derive(Debug, Clone, Default)]
pub struct PseudoRandom {
    pos: usize,
}

impl PseudoRandom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BitSource for PseudoRandom {
    fn next_bit(&mut self) -> bool {
        let bit = PRN_SEQUENCE[self.pos];
        self.pos = (self.pos + 1) % PRN_SEQUENCE.len();
        bit
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}

/// Sends a byte message LSB first, wrapping at the end
#[derive(Debug, Clone)]
pub struct TextBits {
    text: &'static [u8],
    char_idx: usize,
    bit_idx: u8,
}

impl TextBits {
    /// An empty message sends idle ones
    pub fn new(text: &'static [u8]) -> Self {
        Self {
            text,
            char_idx: 0,
            bit_idx: 0,
        }
    }
}

impl Default for TextBits {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl BitSource for TextBits {
    fn next_bit(&mut self) -> bool {
        let Some(&byte) = self.text.get(self.char_idx) else {
            return true;
        };
        let bit = (byte >> self.bit_idx) & 0x01 != 0;
        self.bit_idx += 1;
        if self.bit_idx >= 8 {
            self.bit_idx = 0;
            self.char_idx = (self.char_idx + 1) % self.text.len();
        }
        bit
    }

    fn reset(&mut self) {
        self.char_idx = 0;
        self.bit_idx = 0;
    }
}
