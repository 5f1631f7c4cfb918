//! Error types for evalpix

use thiserror::Error;

/// Main error type for evalpix operations.
///
/// Undefined arithmetic (0/0, sqrt of a negative number) is never reported
/// here; it shows up as NaN in the affected output channel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown band name: {0}")]
    UnknownBand(String),

    #[error("Missing required band: {band}")]
    MissingBand { band: &'static str },

    #[error("Invalid value for band {band}: {value} ({reason})")]
    InvalidBandValue {
        band: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Output {0} is not declared")]
    UnknownOutput(String),

    #[error("Declared output {0} is missing from the evaluation")]
    MissingOutput(String),

    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("No valid samples left for {0}")]
    NoValidSamples(&'static str),

    #[error("Invalid date: {value} ({reason})")]
    InvalidDate { value: String, reason: String },

    #[error("Unknown evalscript: {0}")]
    UnknownScript(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for evalpix operations
pub type Result<T> = std::result::Result<T, Error>;
