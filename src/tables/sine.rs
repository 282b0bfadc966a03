//! One full sine period in Q15

use std::f64::consts::PI;

use crate::utils::{from_f64, Sample};

/// Entries in the sine table
pub const SINE_TABLE_LEN: usize = 4096;

/// Right shift mapping a 16-bit phase onto a table index
pub const SINE_INDEX_SHIFT: u32 = 4;

lazy_static::lazy_static! {
    /// `SINE_TABLE[i] = sin(2π·i / SINE_TABLE_LEN)`
    pub static ref SINE_TABLE: [Sample; SINE_TABLE_LEN] = build_sine_table();
}

fn build_sine_table() -> [Sample; SINE_TABLE_LEN] {
    let mut table = [0; SINE_TABLE_LEN];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = from_f64((2.0 * PI * i as f64 / SINE_TABLE_LEN as f64).sin());
    }
    table
}
