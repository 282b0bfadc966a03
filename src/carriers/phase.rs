//! Wrapping phase accumulator

/// One full turn of the accumulator
pub const FULL_TURN: u32 = 1 << 16;

/// A quarter turn (90°)
pub const QUARTER_TURN: u16 = (FULL_TURN / 4) as u16;

/// 16-bit angle register advanced by a fixed increment per sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAccumulator {
    phase: u16,
    increment: u16,
}

impl PhaseAccumulator {
    pub const fn new(increment: u16) -> Self {
        Self { phase: 0, increment }
    }

    /// Accumulator stepping at `freq_hz` for a given sample rate
    pub const fn for_tone(freq_hz: u32, sample_rate: u32) -> Self {
        Self::new(increment_for(freq_hz, sample_rate))
    }

    /// Add one increment, wrapping modulo a full turn, and return the new phase
    #[inline]
    pub fn advance(&mut self) -> u16 {
        self.phase = self.phase.wrapping_add(self.increment);
        self.phase
    }

    pub fn phase(&self) -> u16 {
        self.phase
    }

    pub fn increment(&self) -> u16 {
        self.increment
    }

    pub fn reset(&mut self) {
        self.phase = 0;
    }
}

/// Per-sample increment for a tone, rounded to the nearest step
///
/// `freq_hz` must be below `sample_rate`.
pub const fn increment_for(freq_hz: u32, sample_rate: u32) -> u16 {
    let num = FULL_TURN as u64 * freq_hz as u64 + sample_rate as u64 / 2;
    (num / sample_rate as u64) as u16
}
