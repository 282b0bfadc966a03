//! NIF interface for Elixir
//!
//! Wraps one simulated board per resource: the processor and its collaborators
//! behind a mutex, the shared switch/mode state outside it so switch edges can
//! be recorded while a block is being processed.

use rustler::{Atom, NifResult, ResourceArc};
use std::sync::{Mutex, MutexGuard};

use crate::control::{control_tick, show_mode, Mode, SharedState, Switch};
use crate::modem::{PseudoRandom, TestPattern, TextBits};
use crate::processor::BlockProcessor;
use crate::traits::{BitSource, Codec, CodecInput, Indicators, Led, TestLine};

rustler::atoms! {
    ok,
    // Bit sources
    test_pattern,
    pseudo_random,
    text,
    // Switches
    up,
    down,
    // Modes
    pass_through,
    adaptive_notch,
    tone,
    modulate,
    // Codec inputs
    line,
    microphone,
}

fn atom_to_bit_source(atom: Atom) -> Result<Box<dyn BitSource>, &'static str> {
    if atom == test_pattern() {
        Ok(Box::new(TestPattern::default()))
    } else if atom == pseudo_random() {
        Ok(Box::new(PseudoRandom::new()))
    } else if atom == text() {
        Ok(Box::new(TextBits::default()))
    } else {
        Err("unsupported_bit_source")
    }
}

fn atom_to_switch(atom: Atom) -> Result<Switch, &'static str> {
    if atom == up() {
        Ok(Switch::Up)
    } else if atom == down() {
        Ok(Switch::Down)
    } else {
        Err("unsupported_switch")
    }
}

fn mode_to_atom(mode: Mode) -> Atom {
    match mode {
        Mode::PassThrough => pass_through(),
        Mode::AdaptiveNotch => adaptive_notch(),
        Mode::Tone => tone(),
        Mode::Modulate => modulate(),
    }
}

// ============================================================================
// Host-side collaborators
// ============================================================================

type Rgb = (u8, u8, u8);

#[derive(Default)]
struct HostLeds {
    led1: Rgb,
    led2: Rgb,
}

impl Indicators for HostLeds {
    fn set_colour(&mut self, led: Led, red: u8, green: u8, blue: u8) {
        match led {
            Led::Led1 => self.led1 = (red, green, blue),
            Led::Led2 => self.led2 = (red, green, blue),
        }
    }
}

#[derive(Default)]
struct HostLine {
    level: bool,
}

impl TestLine for HostLine {
    fn set(&mut self, level: bool) {
        self.level = level;
    }
}

#[derive(Default)]
struct HostCodec {
    input: Option<CodecInput>,
}

impl Codec for HostCodec {
    fn set_input(&mut self, input: CodecInput) {
        self.input = Some(input);
    }
}

struct HostBoard {
    processor: BlockProcessor<Box<dyn BitSource>, HostLine>,
    leds: HostLeds,
    codec: HostCodec,
}

/// Resource wrapper for one simulated board
pub struct BoardResource {
    shared: SharedState,
    board: Mutex<HostBoard>,
}

#[rustler::resource_impl]
impl rustler::Resource for BoardResource {}

impl BoardResource {
    fn lock(&self) -> NifResult<MutexGuard<'_, HostBoard>> {
        self.board
            .lock()
            .map_err(|_| rustler::Error::Term(Box::new("lock_poisoned")))
    }
}

// ============================================================================
// NIFs
// ============================================================================

/// Create a board in pass-through with its codec on the line input
#[rustler::nif]
pub fn board_new(bit_source: Atom) -> NifResult<ResourceArc<BoardResource>> {
    let bits = atom_to_bit_source(bit_source).map_err(|e| rustler::Error::Term(Box::new(e)))?;

    let mut board = HostBoard {
        processor: BlockProcessor::new(bits, HostLine::default()),
        leds: HostLeds::default(),
        codec: HostCodec::default(),
    };
    board.processor.init(&mut board.codec);

    let shared = SharedState::new();
    show_mode(shared.mode.load(), &mut board.leds);

    Ok(ResourceArc::new(BoardResource {
        shared,
        board: Mutex::new(board),
    }))
}

/// One interleaved stereo block in, one out
#[rustler::nif]
pub fn board_process(board: ResourceArc<BoardResource>, samples: Vec<i16>) -> NifResult<Vec<i16>> {
    let mut output = vec![0; samples.len()];
    board
        .lock()?
        .processor
        .process_interleaved(&board.shared, &samples, &mut output)
        .map_err(|e| rustler::Error::Term(Box::new(e.to_string())))?;
    Ok(output)
}

/// Record a debounced switch level change
#[rustler::nif]
pub fn board_switch(board: ResourceArc<BoardResource>, switch: Atom, level: bool) -> NifResult<Atom> {
    let switch = atom_to_switch(switch).map_err(|e| rustler::Error::Term(Box::new(e)))?;
    board.shared.switches.record(switch, level);
    Ok(ok())
}

/// Run the control tick; returns the mode after it
#[rustler::nif]
pub fn board_control_tick(board: ResourceArc<BoardResource>) -> NifResult<Atom> {
    let mut guard = board.lock()?;
    control_tick(&board.shared, &mut guard.leds);
    Ok(mode_to_atom(board.shared.mode.load()))
}

#[rustler::nif]
pub fn board_mode(board: ResourceArc<BoardResource>) -> Atom {
    mode_to_atom(board.shared.mode.load())
}

#[rustler::nif]
pub fn board_test_line(board: ResourceArc<BoardResource>) -> NifResult<bool> {
    Ok(board.lock()?.processor.test_line().level)
}

/// Indicator colours as `{led1, led2}`
#[rustler::nif]
pub fn board_leds(board: ResourceArc<BoardResource>) -> NifResult<(Rgb, Rgb)> {
    let guard = board.lock()?;
    Ok((guard.leds.led1, guard.leds.led2))
}

#[rustler::nif]
pub fn board_codec_input(board: ResourceArc<BoardResource>) -> NifResult<Option<Atom>> {
    Ok(board.lock()?.codec.input.map(|input| match input {
        CodecInput::Line => line(),
        CodecInput::Microphone => microphone(),
    }))
}

/// Current adaptive filter coefficients
#[rustler::nif]
pub fn board_taps(board: ResourceArc<BoardResource>) -> NifResult<Vec<i16>> {
    Ok(board.lock()?.processor.filter().taps().to_vec())
}

rustler::init!("Elixir.BoardDsp.Native");
