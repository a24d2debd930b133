//! Quote storage and random selection.
//!
//! A `QuoteList` is an immutable, ordered, non-empty sequence of quote
//! strings plus a flag saying whether selection upper-cases the result.
//! Selection draws a uniform index with a caller-provided `rand::Rng`, which
//! keeps the function deterministic under test; the free `random_quote`
//! helper wraps the thread-local RNG for callers that just want a quote.

use std::io::BufRead;

use rand::Rng;

use crate::edition::Edition;
use crate::error::EphemeraError;
use crate::result::Result;

/// Immutable, non-empty quote store with an optional case transform.
#[derive(Debug, Clone)]
pub struct QuoteList {
    quotes: Vec<String>,
    uppercase: bool,
}

impl QuoteList {
    /// Create a list from owned quotes.
    ///
    /// Returns `EphemeraError::EmptyQuoteList` if `quotes` is empty; every
    /// list that exists can therefore be selected from without a bounds guard.
    pub fn new(quotes: Vec<String>, uppercase: bool) -> Result<Self> {
        if quotes.is_empty() {
            return Err(EphemeraError::EmptyQuoteList);
        }
        Ok(Self { quotes, uppercase })
    }

    /// Build a list from embedded data. The embedded arrays are non-empty,
    /// so this bypasses the emptiness check.
    pub(crate) fn builtin(quotes: &'static [&'static str], uppercase: bool) -> Self {
        Self {
            quotes: quotes.iter().map(|q| q.to_string()).collect(),
            uppercase,
        }
    }

    /// Parses quotes from a buffered reader, one quote per line.
    ///
    /// Lines are trimmed and empty lines are skipped. Returns
    /// `EphemeraError::EmptyQuoteList` if no quotes remain after filtering.
    pub fn parse_from_file<R: BufRead>(reader: R, uppercase: bool) -> Result<Self> {
        let mut quotes = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(EphemeraError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            quotes.push(trimmed_line.to_string());
        }
        Self::new(quotes, uppercase)
    }

    /// Number of quotes in the list. Always at least 1.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always `false` for a constructed list; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The stored quotes in source order, before any case transform.
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// The quote at `index` with the list's case transform applied.
    pub fn get(&self, index: usize) -> Option<String> {
        self.quotes.get(index).map(|q| self.apply_case(q))
    }

    /// Draw one quote with a uniformly distributed index in `[0, len)`.
    ///
    /// The result is always a member of the list, modulo the case transform.
    pub fn random_quote<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let i = rng.random_range(0..self.quotes.len());
        self.apply_case(&self.quotes[i])
    }

    fn apply_case(&self, quote: &str) -> String {
        if self.uppercase {
            quote.to_uppercase()
        } else {
            quote.to_string()
        }
    }
}

/// One upper-cased quote from the built-in revised list, drawn with the
/// thread-local RNG. This matches the surface the site exposes.
pub fn random_quote() -> String {
    let mut rng = rand::rng();
    Edition::Revised.quote_list().random_quote(&mut rng)
}
