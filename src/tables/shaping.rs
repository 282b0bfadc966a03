//! Raised-cosine phase-reversal envelopes
//!
//! A 180° phase shift is sent as a smooth swing of the baseband amplitude
//! through zero instead of a jump, which keeps the spectrum narrow.

use std::f64::consts::PI;

use crate::config::SYMBOL_LEN;
use crate::utils::{from_f64, Sample};

lazy_static::lazy_static! {
    /// Full scale positive down to full scale negative over one symbol
    pub static ref SHAPING_FALLING: [Sample; SYMBOL_LEN] = build_envelope(1.0);

    /// Full scale negative up to full scale positive over one symbol
    pub static ref SHAPING_RISING: [Sample; SYMBOL_LEN] = build_envelope(-1.0);
}

fn build_envelope(start: f64) -> [Sample; SYMBOL_LEN] {
    let mut table = [0; SYMBOL_LEN];
    let last = (SYMBOL_LEN - 1) as f64;
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = from_f64(start * (PI * i as f64 / last).cos());
    }
    table
}
