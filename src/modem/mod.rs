//! Modulation
//!
//! Differential BPSK and the bit sources that feed it.

mod bit_sources;
mod dbpsk;

pub use bit_sources::{PseudoRandom, TestPattern, TextBits, DEFAULT_PATTERN};
pub use dbpsk::DbpskModulator;
