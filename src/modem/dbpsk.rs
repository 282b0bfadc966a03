//! Differential BPSK modulator
//!
//! One symbol per block. A 1 keeps the carrier phase; a 0 reverses it by
//! swinging the baseband amplitude through zero along a raised-cosine
//! envelope. Which envelope (falling or rising) depends on the current
//! polarity, tracked by a sign flag that flips once per reversal.
//!
//! ```text
//!  bit:        0          0          1          1
//!  level:  +1 ╲____   ____╱‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//!               ╲__╱  -1            (held)
//! ```

use crate::config::SYMBOL_LEN;
use crate::tables::{SHAPING_FALLING, SHAPING_RISING};
use crate::traits::{BitSource, Carrier};
use crate::utils::{saturate, Sample};

/// Differential BPSK modulator
///
/// # Type Parameters
/// * `K` - Carrier (NCO)
/// * `B` - Bit source
pub struct DbpskModulator<K, B>
where
    K: Carrier,
    B: BitSource,
{
    carrier: K,
    bits: B,
    /// High while the baseband level sits at positive full scale
    sign_high: bool,
    i_coeff: Sample,
    q_coeff: Sample,
}

impl<K, B> DbpskModulator<K, B>
where
    K: Carrier,
    B: BitSource,
{
    /// Create a modulator resting at positive full scale
    pub fn new(carrier: K, bits: B) -> Self {
        let level = SHAPING_FALLING[0];
        Self {
            carrier,
            bits,
            sign_high: true,
            i_coeff: level,
            q_coeff: level,
        }
    }

    /// Modulate the next bit into one symbol of samples
    ///
    /// Returns the bit that was sent.
    pub fn modulate_symbol(&mut self, out: &mut [Sample; SYMBOL_LEN]) -> bool {
        let bit = self.bits.next_bit();

        let envelope: Option<&[Sample; SYMBOL_LEN]> = match (bit, self.sign_high) {
            (true, _) => None,
            (false, true) => Some(&*SHAPING_FALLING),
            (false, false) => Some(&*SHAPING_RISING),
        };

        for (i, sample) in out.iter_mut().enumerate() {
            if let Some(env) = envelope {
                self.i_coeff = env[i];
                self.q_coeff = env[i];
            }
            let (cos, sin) = self.carrier.next();
            *sample = mix(self.i_coeff, cos, self.q_coeff, sin);
        }

        if !bit {
            self.sign_high = !self.sign_high;
        }
        bit
    }

    /// Rewind carrier and bit source, back to positive full scale
    pub fn reset(&mut self) {
        self.carrier.reset();
        self.bits.reset();
        self.sign_high = true;
        self.i_coeff = SHAPING_FALLING[0];
        self.q_coeff = SHAPING_FALLING[0];
    }

    pub fn sign_high(&self) -> bool {
        self.sign_high
    }

    /// Current `(in-phase, quadrature)` baseband coefficients
    pub fn coefficients(&self) -> (Sample, Sample) {
        (self.i_coeff, self.q_coeff)
    }

    pub fn carrier(&self) -> &K {
        &self.carrier
    }
}

/// `(i·cos + q·sin) >> 16`, saturated
///
/// The extra bit of shift beyond Q15 leaves headroom for the sum of the two
/// full-scale products.
#[inline]
fn mix(i: Sample, cos: Sample, q: Sample, sin: Sample) -> Sample {
    saturate((i as i64 * cos as i64 + q as i64 * sin as i64) >> 16)
}
