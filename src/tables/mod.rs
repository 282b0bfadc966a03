//! Precomputed read-only signal tables
//!
//! Tables are built lazily on first use. [`initialize`] forces them so the
//! first audio block never pays for the construction.

mod prn;
mod shaping;
mod sine;

pub use prn::PRN_SEQUENCE;
pub use shaping::{SHAPING_FALLING, SHAPING_RISING};
pub use sine::{SINE_INDEX_SHIFT, SINE_TABLE, SINE_TABLE_LEN};

/// Build every table now
pub fn initialize() {
    lazy_static::initialize(&SINE_TABLE);
    lazy_static::initialize(&SHAPING_FALLING);
    lazy_static::initialize(&SHAPING_RISING);
    lazy_static::initialize(&PRN_SEQUENCE);
    log::debug!(
        "signal tables ready: sine {} entries, shaping {} entries, prn {} bits",
        SINE_TABLE.len(),
        SHAPING_FALLING.len(),
        PRN_SEQUENCE.len()
    );
}
