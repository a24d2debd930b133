//! Serializable output payload.
//!
//! An `Ephemera` bundles the drawn quotes with the stardate and the edition
//! they were drawn from. Values are serialized with `serde_json` for
//! machine-readable consumers of the CLI.

use serde::{Deserialize, Serialize};

use crate::edition::Edition;
use crate::result::Result;

/// One CLI invocation's worth of output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ephemera {
    /// Quotes in the order they were drawn, case transform already applied.
    pub quotes: Vec<String>,
    /// Stardate string in the `YYMM.DD` display format.
    pub stardate: String,
    /// Edition the quotes were drawn from (governs the case transform even
    /// when the quote data comes from a user-provided file).
    pub edition: Edition,
}

impl Ephemera {
    /// Bundle drawn quotes with their stardate and edition.
    pub fn new(quotes: Vec<String>, stardate: String, edition: Edition) -> Self {
        Ephemera {
            quotes,
            stardate,
            edition,
        }
    }

    /// Encode the payload as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
