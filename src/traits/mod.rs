//! Core traits for the board DSP engine
//!
//! Each trait is one seam: the oscillator, the modulator's data feed, and the
//! board hardware the firmware wraps around the core.

mod bit_source;
mod board;
mod carrier;

pub use bit_source::BitSource;
pub use board::{Codec, CodecInput, Indicators, Led, TestLine};
pub use carrier::Carrier;
