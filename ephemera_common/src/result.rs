//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `EphemeraError`, so functions can simply return `Result<T>`.
use crate::error::EphemeraError;

/// Workspace-wide `Result` alias with `EphemeraError` as the default error.
pub type Result<T, E = EphemeraError> = std::result::Result<T, E>;
