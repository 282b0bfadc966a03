//! Compile-time board configuration
//!
//! Everything the audio path sizes its buffers with lives here. Nothing is
//! reconfigurable at run time.

use crate::utils::Sample;

/// Codec sample rate in Hz
pub const SAMPLE_RATE: u32 = 8000;

/// Samples per interleaved stereo block handed over by the codec
pub const BLOCK_LEN: usize = 512;

/// Samples per mono channel per block
pub const FRAMES: usize = BLOCK_LEN / 2;

/// Adaptive filter order
pub const N_TAPS: usize = 32;

/// Look-back between the filter input and the desired signal (8 ms)
pub const DELAY: usize = 64;

/// LMS step size, Q15 (~0.153)
pub const MU: Sample = 5000;

/// Test tone and modulation carrier frequency in Hz
pub const TONE_HZ: u32 = 1500;

/// One modulation symbol spans one block (31.25 baud at 8 kHz)
pub const SYMBOL_LEN: usize = FRAMES;

/// Length of the cycling pseudo-random bit table
pub const PRN_LEN: usize = 255;

/// Seed for the pseudo-random bit table
pub const PRN_SEED: u64 = 0x5EED_B95C;

/// Message sent by the text bit source
pub const DEFAULT_MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog 123456789";

const _: () = assert!(BLOCK_LEN % 2 == 0, "stereo blocks hold sample pairs");
const _: () = assert!(TONE_HZ < SAMPLE_RATE / 2, "tone must sit below Nyquist");
