//! Carrier oscillator implementations
//!
//! A wrapping phase accumulator and the table-driven NCO built on it.

mod nco;
mod phase;

pub use nco::Nco;
pub use phase::{increment_for, PhaseAccumulator, FULL_TURN, QUARTER_TURN};
