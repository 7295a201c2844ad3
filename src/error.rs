//! # Error
//! Contains the Error messages from this crate.

use thiserror::Error;

/// An Error enum capturing the errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The provided symbol is not one of `r`, `p` or `s`
    #[error("Unrecognized choice {0:?}, expected one of \"r\", \"p\", \"s\"")]
    UnrecognizedChoice(String),
    /// The provided string is not a decimal integer
    #[error("The provided nonce is not a decimal integer")]
    ParseNonce,
    /// The provided nonce does not have exactly 51 digits
    #[error("The provided nonce is outside [10^50, 10^51)")]
    NonceOutOfRange,
    #[error("Failed to write the report: {0}")]
    Io(#[from] std::io::Error),
}
