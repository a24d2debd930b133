//!
//! Common types and utilities for the Trek ephemera toolkit.
//!
//! This crate aggregates:
//! - `error` — unified error type `EphemeraError` used across the workspace.
//! - `result` — handy `Result<T, EphemeraError>` alias.
//! - `edition` — quote list revisions and their embedded quote data.
//! - `quote` — the `QuoteList` store and random quote selection.
//! - `stardate` — cosmetic stardate display formatting.
//! - `payload` — serializable output payload for JSON consumers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod edition;
pub mod quote;
pub mod stardate;
pub mod payload;

pub use error::EphemeraError;
pub use result::Result;
pub use edition::Edition;
pub use quote::{QuoteList, random_quote};
pub use stardate::{stardate_for, to_stardate};
