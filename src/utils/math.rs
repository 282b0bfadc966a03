//! Small measurement helpers

use super::Sample;

/// Root-mean-square amplitude of a block, in LSBs
pub fn rms(samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let energy: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (energy / samples.len() as f64).sqrt()
}

/// Largest absolute sample value
pub fn peak(samples: &[Sample]) -> u16 {
    samples.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0)
}
