//! Cycling pseudo-random bit table
//!
//! Generated once from a fixed seed so every board sends the same sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{PRN_LEN, PRN_SEED};

lazy_static::lazy_static! {
    pub static ref PRN_SEQUENCE: [bool; PRN_LEN] = build_sequence(PRN_SEED);
}

fn build_sequence(seed: u64) -> [bool; PRN_LEN] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bits = [false; PRN_LEN];
    for bit in bits.iter_mut() {
        *bit = rng.gen();
    }
    bits
}
