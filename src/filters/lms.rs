//! LMS-adapted FIR filter
//!
//! Predicts a desired signal from a delayed copy of itself (or from any
//! correlated reference) and nudges its taps toward the prediction that
//! minimises the squared error:
//!
//! ```text
//!   x ──►[delay line]──►(Σ taps·x)──► y
//!                                     │
//!   d ───────────────────────────►(−)─┴─► e ──► taps[k] += MU·e·x[k]
//! ```
//!
//! All arithmetic is Q15 with a wide accumulator and saturation, matching
//! the DSP's MAC unit.

use crate::utils::{mul_q15, round_q30, Sample};

/// Adaptive FIR filter with `N` taps
#[derive(Debug, Clone)]
pub struct AdaptiveFir<const N: usize> {
    taps: [Sample; N],
    delay: [Sample; N],
    /// Slot holding the oldest sample; the next input overwrites it
    cursor: usize,
    mu: Sample,
}

impl<const N: usize> AdaptiveFir<N> {
    /// Create a filter with zeroed taps and delay line
    ///
    /// # Arguments
    /// * `mu` - Q15 step size. Too large diverges, too small tracks slowly.
    pub fn new(mu: Sample) -> Self {
        Self {
            taps: [0; N],
            delay: [0; N],
            cursor: 0,
            mu,
        }
    }

    /// Zero taps and delay line
    pub fn reset(&mut self) {
        self.taps = [0; N];
        self.delay = [0; N];
        self.cursor = 0;
    }

    pub fn taps(&self) -> &[Sample; N] {
        &self.taps
    }

    pub fn mu(&self) -> Sample {
        self.mu
    }

    /// Filter and adapt over a block
    ///
    /// Writes the prediction of `desired[i]` into `output[i]`. All three
    /// slices must have the same length.
    pub fn process_block(&mut self, input: &[Sample], desired: &[Sample], output: &mut [Sample]) {
        debug_assert_eq!(input.len(), desired.len());
        debug_assert_eq!(input.len(), output.len());

        for ((&x, &d), y) in input.iter().zip(desired).zip(output.iter_mut()) {
            *y = self.step(x, d);
        }
    }

    /// One sample: predict, adapt, then shift `input` into the delay line
    #[inline]
    pub fn step(&mut self, input: Sample, desired: Sample) -> Sample {
        let prediction = self.predict();
        let error = desired.saturating_sub(prediction);
        let scaled = mul_q15(self.mu, error);

        if scaled != 0 {
            let (recent, old) = self.delay.split_at(self.cursor);
            let history = recent.iter().rev().chain(old.iter().rev());
            for (tap, &x) in self.taps.iter_mut().zip(history) {
                *tap = tap.saturating_add(mul_q15(scaled, x));
            }
        }

        self.delay[self.cursor] = input;
        self.cursor += 1;
        if self.cursor == N {
            self.cursor = 0;
        }

        prediction
    }

    #[inline]
    fn predict(&self) -> Sample {
        let acc: i64 = self
            .taps
            .iter()
            .zip(self.history())
            .map(|(&t, &x)| t as i64 * x as i64)
            .sum();
        round_q30(acc)
    }

    /// Delay-line contents, newest first; pairs with `taps[0..N]`
    #[inline]
    fn history(&self) -> impl Iterator<Item = &Sample> + '_ {
        let (recent, old) = self.delay.split_at(self.cursor);
        recent.iter().rev().chain(old.iter().rev())
    }
}
