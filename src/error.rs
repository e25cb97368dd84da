//! Error types for analysis and resynthesis.

use thiserror::Error;

/// Result type for seda operations.
pub type Result<T> = std::result::Result<T, SedaError>;

/// Errors that can occur while analyzing or rebuilding a tone.
#[derive(Debug, Error)]
pub enum SedaError {
    /// Zero-length sample buffer handed to the spectral transform.
    #[error("input buffer is empty")]
    EmptyInput,

    /// Input contains NaN or infinite samples.
    #[error("input buffer contains non-finite samples")]
    NonFiniteInput,

    /// The low-frequency peak is exactly zero (silent or degenerate input).
    #[error("no signal: peak magnitude in the fundamental search window is zero")]
    NoSignal,

    /// Partial ratios would divide by a zero fundamental magnitude.
    #[error("fundamental magnitude is zero")]
    ZeroFundamentalMagnitude,

    /// The fundamental landed on the DC bin, so frequency ratios are undefined.
    #[error("fundamental frequency is zero (DC bin dominates the search window)")]
    ZeroFundamentalFrequency,

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// An ADSR parameter is out of range.
    #[error("invalid envelope parameter '{name}': {value}")]
    InvalidEnvelope {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// WAV container could not be decoded in a supported layout.
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// WAV encode/decode error.
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile (de)serialization error.
    #[error("profile error: {0}")]
    Json(#[from] serde_json::Error),
}
