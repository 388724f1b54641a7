//! The module for describing recoverable errors in `itemcount`.
//!
//! Every failure the counting engine can produce is a local, recoverable
//! condition, so they are all represented as variants of a single enum that
//! callers branch on. Nothing in this crate should ever panic on user input.
//!
//! The format of this error handling is heavily based on
//! [the error handling guide](https://blog.burntsushi.net/rust-error-handling/)
//! from Andrew Gallant, which is a terrific resource for handling errors
//! and understanding combinators in Rust.

use std::error::Error;
use std::fmt;

use crate::counting::{SupportedKind, SUPPORTED_KINDS};

/// An alias for a `Result` with a `CountError` failure side.
pub type CountResult<T> = Result<T, CountError>;

/// Covers all failures the counting engine can report.
///
/// All of these describe problems with the caller's input, not with the
/// program itself, so the front ends render them as plain messages rather
/// than crashing.
#[derive(Debug, Clone, PartialEq)]
pub enum CountError {
    /// There were no items to count. The front ends treat this as a
    /// "nothing to do" signal rather than a hard error.
    EmptyInput,
    /// The requested data type is not one of the six the engine supports.
    /// The message enumerates the valid names so the user can correct it.
    UnsupportedKind(String),
    /// A single token could not be parsed as the requested kind. The whole
    /// call is aborted; no partial table is ever produced.
    ParseFailure {
        /// The offending token, exactly as the caller supplied it.
        value: String,
        /// The kind the token was supposed to parse as.
        kind: SupportedKind,
        /// A description of the expected format.
        reason: String,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CountError::EmptyInput => write!(f, "No items provided for counting."),
            CountError::UnsupportedKind(ref requested) => write!(
                f,
                "Unsupported data type: {}. Supported types: {}",
                requested,
                SUPPORTED_KINDS.join(", ")
            ),
            CountError::ParseFailure {
                ref value,
                ref kind,
                ref reason,
            } => write!(f, "'{}' is not a valid {} value: {}", value, kind, reason),
        }
    }
}

impl Error for CountError {}
