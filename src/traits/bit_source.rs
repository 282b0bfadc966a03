//! BitSource trait - baseband data for the modulator

/// Supplies one data bit per modulation symbol
pub trait BitSource: Send + Sync {
    /// Next bit; advances the cursor
    fn next_bit(&mut self) -> bool;

    /// Rewind to the first bit
    fn reset(&mut self);
}

impl BitSource for Box<dyn BitSource> {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
