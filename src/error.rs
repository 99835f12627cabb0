//! Error types

use std::io;

use thiserror::Error;

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring or running a benchmark
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration values that cannot produce a meaningful run
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The shared source buffer is shorter than the configured signal length
    #[error("signal too short: expected at least {expected} samples, got {actual}")]
    SignalTooShort { expected: usize, actual: usize },

    /// The FFT subject cannot transform a slice of this length
    #[error("{subject} does not support transforms of length {len}")]
    UnsupportedLength { subject: String, len: usize },

    /// Writing a result line or the results table failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
