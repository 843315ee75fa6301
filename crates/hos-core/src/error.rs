//! Boundary error type.
//!
//! The simulator itself has no error taxonomy — every non-negative numeric
//! input yields a result, and "needs a reset" is data, not an error.
//! `HosError` exists for the boundaries around it: decoding wire status
//! codes, parsing scenario files, and I/O.

use thiserror::Error;

/// The common error type for `hos-core` and a base for sub-crates.
#[derive(Debug, Error)]
pub enum HosError {
    #[error("invalid duty status code {0}: expected 1..=4")]
    InvalidStatusCode(u8),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hos-*` crates.
pub type HosResult<T> = Result<T, HosError>;
