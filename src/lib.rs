//! Board DSP - per-block audio core for a stereo codec board
//!
//! Everything here runs inside the codec's block-complete callback or the
//! periodic control tick. The firmware around it owns the DMA buffers, the
//! switch debouncer and the indicator drivers; this crate only turns one
//! interleaved block into the next and steps the processing mode.
//!
//! The `nif` feature builds a BEAM bridge so the core can be driven from an
//! Elixir test bench.

pub mod carriers;
pub mod config;
pub mod control;
pub mod error;
pub mod filters;
pub mod modem;
pub mod processor;
pub mod tables;
pub mod traits;
pub mod utils;

#[cfg(feature = "nif")]
pub mod nif;

// Re-export core types for convenience
pub use carriers::Nco;
pub use control::{control_tick, show_mode, Mode, SharedState, Switch};
pub use error::DspError;
pub use filters::{NotchFilter, NotchWindow};
pub use modem::{DbpskModulator, PseudoRandom, TestPattern, TextBits};
pub use processor::BlockProcessor;
pub use traits::{BitSource, Carrier, Codec, CodecInput, Indicators, Led, TestLine};
pub use utils::Sample;
