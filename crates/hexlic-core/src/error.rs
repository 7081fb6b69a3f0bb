//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Clock failures abort generation; no partial license is produced.
//! Invariant errors carry the offending field and both values so a
//! `check` failure can be read without re-running anything.

use thiserror::Error;

/// Top-level error type for hexlic.
#[derive(Error, Debug)]
pub enum HexlicError {
    /// The time source could not produce a timestamp.
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),

    /// Canonical serialization or decoding failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A structural invariant of the license record does not hold.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

/// Error in timestamp arithmetic or parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Advancing the clock left the representable calendar range.
    #[error("advancing {from} by {years} years overflows the calendar range")]
    Overflow {
        /// The instant being advanced, formatted.
        from: String,
        /// Requested number of years.
        years: u32,
    },

    /// A timestamp string did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Error during canonical serialization or decoding.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization or parsing failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    /// Encoder produced bytes that are not UTF-8.
    #[error("encoded output is not UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Decoded text re-encodes to different bytes.
    #[error("input is not in canonical form (re-encoding differs at byte {offset})")]
    NotCanonical {
        /// First byte offset where input and re-encoding diverge.
        offset: usize,
    },
}
