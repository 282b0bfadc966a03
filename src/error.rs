//! Errors at the host boundary
//!
//! The real-time path has no failure modes; only callers that hand over
//! unchecked slices can get one of these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DspError {
    #[error("block holds {actual} samples, expected {expected}")]
    BlockLength { expected: usize, actual: usize },
}
