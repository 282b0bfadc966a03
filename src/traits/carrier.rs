//! Carrier trait - quadrature oscillator
//!
//! Defines the local oscillator used by the tone and modulation pipelines.
//! Pure phase bookkeeping - no modulation awareness.

use crate::utils::Sample;

/// Carrier oscillator trait
///
/// Implementations advance a phase once per sample and return the carrier
/// pair for the new phase. Typically a table-driven NCO.
pub trait Carrier: Send + Sync {
    /// Advance one sample and return `(cos, sin)` in Q15
    fn next(&mut self) -> (Sample, Sample);

    /// Reset the phase to zero
    fn reset(&mut self);

    /// Current phase, full turn = 65536
    fn phase(&self) -> u16;

    /// Carrier frequency in Hz
    fn frequency(&self) -> u32;
}
