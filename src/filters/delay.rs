//! Source/reference sliding window
//!
//! One array of `WINDOW` samples holds the last `WINDOW` samples of a mono
//! stream. The newest block sits in the reference region at the top; the
//! source region starts at the bottom, `DELAY = WINDOW - FRAMES` samples
//! earlier:
//!
//! ```text
//!   index:  0        DELAY              FRAMES        WINDOW
//!           |--------|-------------------|-------------|
//!   source: [0 ........................ FRAMES)
//!   reference:       [DELAY ............................ WINDOW)
//! ```
//!
//! So `source()[i]` is always the stream sample `DELAY` positions before
//! `reference()[i]`, across block boundaries.

use crate::utils::Sample;

/// Sliding window over a mono stream, `FRAMES` new samples per block
#[derive(Debug, Clone)]
pub struct DelayWindow<const FRAMES: usize, const WINDOW: usize> {
    buf: [Sample; WINDOW],
}

impl<const FRAMES: usize, const WINDOW: usize> DelayWindow<FRAMES, WINDOW> {
    /// Look-back between the two regions
    pub const DELAY: usize = WINDOW - FRAMES;

    pub fn new() -> Self {
        const { assert!(WINDOW >= FRAMES, "window must hold at least one block") };
        Self { buf: [0; WINDOW] }
    }

    pub fn delay(&self) -> usize {
        Self::DELAY
    }

    /// Slide the window forward by one block
    ///
    /// The newest `DELAY` samples of the stream move to the bottom of the
    /// array, then `block` fills the reference region.
    pub fn advance(&mut self, block: &[Sample; FRAMES]) {
        self.buf.copy_within(FRAMES.., 0);
        self.buf[Self::DELAY..].copy_from_slice(block);
    }

    /// Delayed samples, aligned with [`reference`](Self::reference)
    pub fn source(&self) -> &[Sample] {
        &self.buf[..FRAMES]
    }

    /// The block passed to the latest [`advance`](Self::advance)
    pub fn reference(&self) -> &[Sample] {
        &self.buf[Self::DELAY..]
    }

    pub fn clear(&mut self) {
        self.buf = [0; WINDOW];
    }
}

impl<const FRAMES: usize, const WINDOW: usize> Default for DelayWindow<FRAMES, WINDOW> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stream sample at global time t is t + 1, so zero means "before start"
    fn check_alignment<const F: usize, const W: usize>(blocks: usize) {
        let mut window = DelayWindow::<F, W>::new();
        let delay = window.delay();

        for b in 0..blocks {
            let mut block = [0; F];
            for (i, s) in block.iter_mut().enumerate() {
                *s = (b * F + i + 1) as Sample;
            }
            window.advance(&block);

            assert_eq!(window.reference(), &block[..]);
            for i in 0..F {
                let t = b * F + i;
                let expected = if t >= delay { (t - delay + 1) as Sample } else { 0 };
                assert_eq!(
                    window.source()[i],
                    expected,
                    "block {} index {} delay {}",
                    b,
                    i,
                    delay
                );
            }
        }
    }

    #[test]
    fn test_delay_shorter_than_block() {
        check_alignment::<16, 20>(5);
    }

    #[test]
    fn test_delay_equal_to_block() {
        check_alignment::<16, 32>(5);
    }

    #[test]
    fn test_delay_longer_than_block() {
        check_alignment::<16, 56>(6);
    }

    #[test]
    fn test_board_geometry() {
        check_alignment::<256, 320>(4);
    }

    #[test]
    fn test_zero_delay() {
        check_alignment::<8, 8>(3);
    }

    #[test]
    fn test_first_block_sees_zero_history() {
        let mut window = DelayWindow::<8, 12>::new();
        window.advance(&[9; 8]);
        assert_eq!(&window.source()[..4], &[0; 4]);
        assert_eq!(&window.source()[4..], &[9; 4]);
    }

    #[test]
    fn test_clear() {
        let mut window = DelayWindow::<4, 6>::new();
        window.advance(&[1, 2, 3, 4]);
        window.clear();
        assert_eq!(window.source(), &[0; 4]);
        assert_eq!(window.reference(), &[0; 4]);
    }
}
