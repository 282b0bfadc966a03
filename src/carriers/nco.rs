//! Numerically Controlled Oscillator (NCO)
//!
//! Table-driven quadrature carrier. Sine and cosine come from the same
//! accumulator, the cosine read a quarter turn ahead. Nearest-neighbour
//! lookup, no interpolation.

use super::phase::{PhaseAccumulator, QUARTER_TURN};
use crate::tables::{SINE_INDEX_SHIFT, SINE_TABLE};
use crate::traits::Carrier;
use crate::utils::Sample;

/// Numerically Controlled Oscillator
#[derive(Debug, Clone)]
pub struct Nco {
    acc: PhaseAccumulator,
    freq_hz: u32,
}

impl Nco {
    /// Create a new NCO
    ///
    /// # Arguments
    /// * `freq_hz` - Carrier frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(freq_hz: u32, sample_rate: u32) -> Self {
        Self {
            acc: PhaseAccumulator::for_tone(freq_hz, sample_rate),
            freq_hz,
        }
    }

    /// Create NCO at the board tone frequency
    pub fn default_for_board() -> Self {
        Self::new(crate::config::TONE_HZ, crate::config::SAMPLE_RATE)
    }

    /// Per-sample phase step
    pub fn increment(&self) -> u16 {
        self.acc.increment()
    }
}

#[inline]
fn lookup(phase: u16) -> Sample {
    SINE_TABLE[(phase >> SINE_INDEX_SHIFT) as usize]
}

impl Carrier for Nco {
    fn next(&mut self) -> (Sample, Sample) {
        let phase = self.acc.advance();
        (lookup(phase.wrapping_add(QUARTER_TURN)), lookup(phase))
    }

    fn reset(&mut self) {
        self.acc.reset();
    }

    fn phase(&self) -> u16 {
        self.acc.phase()
    }

    fn frequency(&self) -> u32 {
        self.freq_hz
    }
}
