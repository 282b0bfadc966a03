//! Fixed-point helpers for the audio path

mod fixed;
mod math;

pub use fixed::*;
pub use math::{peak, rms};
