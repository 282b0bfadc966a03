//! Block processing entry point
//!
//! Called once per codec block from the DMA-complete callback. Splits the
//! interleaved stereo block, runs exactly one pipeline for the current mode
//! and interleaves the result back. No allocation, no locks, no waiting:
//! everything it touches is a fixed-size array owned by the processor.

use log::info;

use crate::carriers::Nco;
use crate::config::{BLOCK_LEN, FRAMES, MU};
use crate::control::{Mode, SharedState};
use crate::error::DspError;
use crate::filters::{NotchFilter, NotchWindow};
use crate::modem::DbpskModulator;
use crate::tables;
use crate::traits::{BitSource, Carrier, Codec, CodecInput, TestLine};
use crate::utils::{subtract_into, Sample};

/// Per-block DSP engine
///
/// # Type Parameters
/// * `B` - Bit source for the modulation mode
/// * `L` - Digital test output driven with the current bit
pub struct BlockProcessor<B, L>
where
    B: BitSource,
    L: TestLine,
{
    rx_left: [Sample; FRAMES],
    rx_right: [Sample; FRAMES],
    tx_left: [Sample; FRAMES],
    tx_right: [Sample; FRAMES],

    // Adaptive notch
    window: NotchWindow,
    filter: NotchFilter,
    prediction: [Sample; FRAMES],

    tone: Nco,
    modulator: DbpskModulator<Nco, B>,
    test_line: L,
}

impl<B, L> BlockProcessor<B, L>
where
    B: BitSource,
    L: TestLine,
{
    pub fn new(bits: B, test_line: L) -> Self {
        Self {
            rx_left: [0; FRAMES],
            rx_right: [0; FRAMES],
            tx_left: [0; FRAMES],
            tx_right: [0; FRAMES],
            window: NotchWindow::new(),
            filter: NotchFilter::new(MU),
            prediction: [0; FRAMES],
            tone: Nco::default_for_board(),
            modulator: DbpskModulator::new(Nco::default_for_board(), bits),
            test_line,
        }
    }

    /// Start-up: build the signal tables, select the line input and clear the
    /// adaptive filter
    pub fn init<C: Codec>(&mut self, codec: &mut C) {
        tables::initialize();
        codec.set_input(CodecInput::Line);
        self.filter.reset();
        self.window.clear();
        info!(
            "dsp core ready: {} frames/block, {} taps, delay {}, mu {}",
            FRAMES,
            self.filter.taps().len(),
            self.window.delay(),
            self.filter.mu()
        );
    }

    /// Process one interleaved stereo block
    pub fn process(
        &mut self,
        shared: &SharedState,
        input: &[Sample; BLOCK_LEN],
        output: &mut [Sample; BLOCK_LEN],
    ) {
        for ((frame, l), r) in input
            .chunks_exact(2)
            .zip(self.rx_left.iter_mut())
            .zip(self.rx_right.iter_mut())
        {
            *l = frame[0];
            *r = frame[1];
        }

        match shared.mode.load() {
            Mode::PassThrough => self.pass_through(),
            Mode::AdaptiveNotch => self.adaptive_notch(),
            Mode::Tone => self.tone(),
            Mode::Modulate => self.modulate(),
        }

        for ((frame, &l), &r) in output
            .chunks_exact_mut(2)
            .zip(self.tx_left.iter())
            .zip(self.tx_right.iter())
        {
            frame[0] = l;
            frame[1] = r;
        }
    }

    /// Same as [`process`](Self::process) for hosts holding plain slices
    pub fn process_interleaved(
        &mut self,
        shared: &SharedState,
        input: &[Sample],
        output: &mut [Sample],
    ) -> Result<(), DspError> {
        let input: &[Sample; BLOCK_LEN] = input.try_into().map_err(|_| DspError::BlockLength {
            expected: BLOCK_LEN,
            actual: input.len(),
        })?;
        let actual = output.len();
        let output: &mut [Sample; BLOCK_LEN] = output.try_into().map_err(|_| DspError::BlockLength {
            expected: BLOCK_LEN,
            actual,
        })?;
        self.process(shared, input, output);
        Ok(())
    }

    pub fn filter(&self) -> &NotchFilter {
        &self.filter
    }

    pub fn modulator(&self) -> &DbpskModulator<Nco, B> {
        &self.modulator
    }

    pub fn test_line(&self) -> &L {
        &self.test_line
    }

    // -------------------------------------------------------------------------
    // Pipelines
    // -------------------------------------------------------------------------

    fn pass_through(&mut self) {
        self.tx_left = self.rx_left;
        self.tx_right = self.rx_right;
    }

    /// Cancel the predictable part of the left input; both outputs carry
    /// the residual
    fn adaptive_notch(&mut self) {
        self.window.advance(&self.rx_left);
        self.filter.process_block(
            self.window.source(),
            self.window.reference(),
            &mut self.prediction,
        );
        subtract_into(&mut self.tx_left, self.window.reference(), &self.prediction);
        self.tx_right = self.tx_left;
    }

    fn tone(&mut self) {
        for (l, r) in self.tx_left.iter_mut().zip(self.tx_right.iter_mut()) {
            let (_, sin) = self.tone.next();
            *l = sin;
            *r = sin;
        }
    }

    fn modulate(&mut self) {
        let bit = self.modulator.modulate_symbol(&mut self.tx_left);
        self.test_line.set(bit);
        self.tx_right = self.tx_left;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{control_tick, Switch};
    use crate::modem::TestPattern;
    use crate::traits::{Indicators, Led};
    use crate::utils::{from_f64, peak, rms};
    use std::f64::consts::PI;

    #[derive(Default)]
    struct ProbeLine {
        levels: Vec<bool>,
    }

    impl TestLine for ProbeLine {
        fn set(&mut self, level: bool) {
            self.levels.push(level);
        }
    }

    #[derive(Default)]
    struct BenchCodec {
        input: Option<CodecInput>,
    }

    impl Codec for BenchCodec {
        fn set_input(&mut self, input: CodecInput) {
            self.input = Some(input);
        }
    }

    struct NoLeds;

    impl Indicators for NoLeds {
        fn set_colour(&mut self, _led: Led, _red: u8, _green: u8, _blue: u8) {}
    }

    fn make_test_processor() -> BlockProcessor<TestPattern, ProbeLine> {
        let mut processor = BlockProcessor::new(TestPattern::default(), ProbeLine::default());
        processor.init(&mut BenchCodec::default());
        processor
    }

    fn shared_in(mode: Mode) -> SharedState {
        let shared = SharedState::new();
        shared.mode.store(mode);
        shared
    }

    /// Interleaved block of a tone on both channels, continuing at `block`
    fn tone_block(block: usize, freq: f64, amp: f64) -> [Sample; BLOCK_LEN] {
        let mut out = [0; BLOCK_LEN];
        for (i, frame) in out.chunks_exact_mut(2).enumerate() {
            let n = (block * FRAMES + i) as f64;
            let s = from_f64(amp * (2.0 * PI * freq * n / 8000.0).sin());
            frame[0] = s;
            frame[1] = s;
        }
        out
    }

    fn left(block: &[Sample; BLOCK_LEN]) -> Vec<Sample> {
        block.iter().step_by(2).copied().collect()
    }

    fn right(block: &[Sample; BLOCK_LEN]) -> Vec<Sample> {
        block.iter().skip(1).step_by(2).copied().collect()
    }

    #[test]
    fn test_init_selects_line_input() {
        let mut codec = BenchCodec::default();
        let mut processor = BlockProcessor::new(TestPattern::default(), ProbeLine::default());
        processor.init(&mut codec);
        assert_eq!(codec.input, Some(CodecInput::Line));
        assert!(processor.filter().taps().iter().all(|&t| t == 0));
    }

    #[test]
    fn test_pass_through_is_exact() {
        let mut processor = make_test_processor();
        let shared = shared_in(Mode::PassThrough);
        let mut output = [0; BLOCK_LEN];

        for b in 0..3 {
            let mut input = [0; BLOCK_LEN];
            for (i, s) in input.iter_mut().enumerate() {
                *s = (i as i32 * 131 + b * 977 - 30000) as Sample;
            }
            input[0] = Sample::MIN;
            input[1] = Sample::MAX;
            processor.process(&shared, &input, &mut output);
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_notch_cancels_tone() {
        let mut processor = make_test_processor();
        let shared = shared_in(Mode::AdaptiveNotch);
        let mut output = [0; BLOCK_LEN];
        let mut input = [0; BLOCK_LEN];

        for b in 0..500 {
            input = tone_block(b, 1000.0, 0.5);
            processor.process(&shared, &input, &mut output);
        }

        let input_rms = rms(&left(&input));
        let residual_rms = rms(&left(&output));
        assert!(
            residual_rms < 0.1 * input_rms,
            "residual {} vs input {}",
            residual_rms,
            input_rms
        );
        assert_eq!(left(&output), right(&output));
    }

    #[test]
    fn test_notch_first_block_passes_unpredicted_head() {
        // Before the delay line has seen anything the prediction is zero
        let mut processor = make_test_processor();
        let shared = shared_in(Mode::AdaptiveNotch);
        let input = tone_block(0, 1000.0, 0.5);
        let mut output = [0; BLOCK_LEN];
        processor.process(&shared, &input, &mut output);

        let l_in = left(&input);
        let l_out = left(&output);
        assert_eq!(&l_out[..64], &l_in[..64]);
    }

    #[test]
    fn test_tone_ignores_input_and_is_continuous() {
        let mut processor = make_test_processor();
        let shared = shared_in(Mode::Tone);
        let mut reference = Nco::default_for_board();
        let input = [1234; BLOCK_LEN];
        let mut output = [0; BLOCK_LEN];

        for _ in 0..3 {
            processor.process(&shared, &input, &mut output);
            let expected: Vec<Sample> = (0..FRAMES).map(|_| reference.next().1).collect();
            assert_eq!(left(&output), expected);
            assert_eq!(right(&output), expected);
        }
    }

    #[test]
    fn test_modulate_drives_test_line() {
        let mut processor = make_test_processor();
        let shared = shared_in(Mode::Modulate);
        let input = [0; BLOCK_LEN];
        let mut output = [0; BLOCK_LEN];

        for _ in 0..8 {
            processor.process(&shared, &input, &mut output);
            assert_eq!(left(&output), right(&output));
            assert!(peak(&output) > 0);
        }
        assert_eq!(
            processor.test_line().levels,
            [false, false, true, true, false, false, true, true]
        );
    }

    #[test]
    fn test_switch_press_changes_pipeline() {
        let mut processor = make_test_processor();
        let shared = SharedState::new();
        let input = tone_block(0, 700.0, 0.3);
        let mut output = [0; BLOCK_LEN];

        processor.process(&shared, &input, &mut output);
        assert_eq!(output, input);

        // Two downs: PassThrough -> Modulate -> Tone
        for _ in 0..2 {
            shared.switches.record(Switch::Down, true);
            shared.switches.record(Switch::Down, false);
            control_tick(&shared, &mut NoLeds);
        }
        assert_eq!(shared.mode.load(), Mode::Tone);

        processor.process(&shared, &input, &mut output);
        assert_ne!(output, input);
        assert!(processor.test_line().levels.is_empty());
    }

    #[test]
    fn test_interleaved_length_checked() {
        let mut processor = make_test_processor();
        let shared = SharedState::new();
        let input = vec![0; BLOCK_LEN - 2];
        let mut output = vec![0; BLOCK_LEN];
        assert_eq!(
            processor.process_interleaved(&shared, &input, &mut output),
            Err(DspError::BlockLength { expected: BLOCK_LEN, actual: BLOCK_LEN - 2 })
        );

        let input = vec![7; BLOCK_LEN];
        let mut short = vec![0; 4];
        assert_eq!(
            processor.process_interleaved(&shared, &input, &mut short),
            Err(DspError::BlockLength { expected: BLOCK_LEN, actual: 4 })
        );

        processor.process_interleaved(&shared, &input, &mut output).unwrap();
        assert_eq!(output, input);
    }
}
