//! Error types shared across the workspace.
//!
//! The `EphemeraError` enum unifies the failure cases for I/O, serialization,
//! and quote list validation, allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the CLI.
#[derive(Error, Debug)]
pub enum EphemeraError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// A quote list ended up with no entries. Selection divides by the list
    /// length, so an empty list is rejected at construction time.
    #[error("Quote list is empty")]
    EmptyQuoteList,

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
