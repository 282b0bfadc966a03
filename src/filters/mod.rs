//! Adaptive notch building blocks
//!
//! The LMS filter and the sliding source/reference window that feeds it.

mod delay;
mod lms;

pub use delay::DelayWindow;
pub use lms::AdaptiveFir;

use crate::config::{DELAY, FRAMES, N_TAPS};

/// The board's adaptive filter
pub type NotchFilter = AdaptiveFir<N_TAPS>;

/// The board's source/reference window
pub type NotchWindow = DelayWindow<FRAMES, { FRAMES + DELAY }>;
