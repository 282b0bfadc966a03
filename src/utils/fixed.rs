//! Q15 fixed-point arithmetic with saturation
//!
//! Every multiply/accumulate in the audio path goes through these helpers so
//! overflow clamps instead of wrapping.

/// Signed Q15 fraction in [-1, 1)
pub type Sample = i16;

/// Number of fractional bits in a [`Sample`]
pub const Q15_SHIFT: u32 = 15;

const Q15_HALF: i64 = 1 << (Q15_SHIFT - 1);

/// Clamp a wide accumulator to the sample range
#[inline]
pub fn saturate(val: i64) -> Sample {
    if val > Sample::MAX as i64 {
        Sample::MAX
    } else if val < Sample::MIN as i64 {
        Sample::MIN
    } else {
        val as Sample
    }
}

/// Round a Q30 product or sum of products back to Q15
#[inline]
pub fn round_q30(acc: i64) -> Sample {
    saturate((acc + Q15_HALF) >> Q15_SHIFT)
}

/// Rounded, saturating Q15 multiply
#[inline]
pub fn mul_q15(a: Sample, b: Sample) -> Sample {
    round_q30(a as i64 * b as i64)
}

/// Element-wise `dst = a - b`, saturating
pub fn subtract_into(dst: &mut [Sample], a: &[Sample], b: &[Sample]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x.saturating_sub(y);
    }
}

/// Convert a float in [-1, 1] to Q15, clamping the positive end
#[inline]
pub fn from_f64(val: f64) -> Sample {
    let scaled = (val * 32768.0).round();
    if scaled >= 32767.0 {
        32767
    } else if scaled <= -32768.0 {
        -32768
    } else {
        scaled as Sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_in_range() {
        assert_eq!(saturate(0), 0);
        assert_eq!(saturate(1000), 1000);
        assert_eq!(saturate(-1000), -1000);
    }

    #[test]
    fn test_saturate_overflow() {
        assert_eq!(saturate(40000), 32767);
        assert_eq!(saturate(-40000), -32768);
    }

    #[test]
    fn test_mul_q15() {
        // 0.5 * 0.5 = 0.25
        assert_eq!(mul_q15(16384, 16384), 8192);
        assert_eq!(mul_q15(-16384, 16384), -8192);
        assert_eq!(mul_q15(0, Sample::MIN), 0);
    }

    #[test]
    fn test_mul_q15_saturates_minus_one_squared() {
        // -1.0 * -1.0 is not representable in Q15
        assert_eq!(mul_q15(Sample::MIN, Sample::MIN), Sample::MAX);
    }

    #[test]
    fn test_subtract_saturates() {
        let mut dst = [0; 3];
        subtract_into(&mut dst, &[100, 30000, -30000], &[40, -30000, 30000]);
        assert_eq!(dst, [60, Sample::MAX, Sample::MIN]);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(from_f64(0.0), 0);
        assert_eq!(from_f64(0.5), 16384);
        assert_eq!(from_f64(1.0), 32767);
        assert_eq!(from_f64(-1.0), -32768);
        assert_eq!(from_f64(-2.0), -32768);
    }
}
