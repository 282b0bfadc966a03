//! Board collaborators
//!
//! Thin I/O wrappers owned by the firmware around this core. The core only
//! ever calls into them; none of them is touched from the audio path except
//! the test line.

/// Analog source feeding the codec ADC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecInput {
    Line,
    Microphone,
}

/// Front-panel RGB indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Led1,
    Led2,
}

/// Codec configuration
pub trait Codec {
    fn set_input(&mut self, input: CodecInput);
}

/// RGB indicator driver
pub trait Indicators {
    fn set_colour(&mut self, led: Led, red: u8, green: u8, blue: u8);
}

/// Digital output line for scope/logic-analyzer probing
pub trait TestLine: Send + Sync {
    fn set(&mut self, level: bool);
}
