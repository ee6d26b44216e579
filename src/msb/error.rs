//! Custom error types for MSB script parsing.

use thiserror::Error;

/// The primary error type for MSB operations.
///
/// Only structural problems with the input file are fatal; per-character
/// lookup misses and truncated opcode operands are handled inline by the
/// decoder and surfaced as log diagnostics instead.
#[derive(Debug, Error)]
pub enum MsbError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the `MES\0` signature.
    #[error("Bad magic: expected \"MES\\0\", got {found:02X?}")]
    BadMagic { found: [u8; 4] },

    /// The buffer ends before a required structure is complete.
    #[error("Truncated {context}: need {needed} bytes, only {available} available")]
    Truncated {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// The file is structurally invalid in some other way.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A convenience `Result` type alias using the crate's `MsbError` type.
pub type Result<T> = std::result::Result<T, MsbError>;
