//! Quote list revisions and their embedded quote data.
//!
//! The site shipped two revisions of its quote list. The first displayed the
//! quotes verbatim; the current one displays them upper-cased and carries a
//! slightly different set of entries. Both are embedded here bit-for-bit so
//! either can be selected at runtime.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::quote::QuoteList;

/// Quotes from the first revision. Displayed verbatim.
const CLASSIC_QUOTES: &[&str] = &[
    "Live long and prosper",
    "Infinite diversity in infinite combinations",
    "Resistance is futile",
    "Make it so!",
    "Engage!",
    "The needs of the many outweigh the needs of the few",
    "Logic is the beginning of wisdom, not the end",
    "what it is to be human: To make yourself more than you are",
    "Openness, optimism and the spirit of curiosity",
    "Things are only impossible until they are not",
    "It's the unknown that defines our existence",
    "Vamoose, ya little varmint",
];

/// Quotes from the current revision. Displayed upper-cased.
const REVISED_QUOTES: &[&str] = &[
    "Live long and prosper",
    "Infinite diversity in infinite combinations",
    "Resistance is futile",
    "Make it so",
    "Engage!",
    "Logic is the beginning of wisdom, not the end",
    "to be human is to make yourself more than you are",
    "Openness, optimism and the spirit of curiosity",
    "Things are only impossible until they are not",
    "It is the unknown that defines our existence",
    "Vamoose ya little varmint",
    "The glory of creation is in its infinite diversity",
    "Jolan tru",
    "Voka a Bentel",
];

/// Revision of the built-in quote list.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// First revision: 12 quotes, returned verbatim.
    Classic,
    /// Current revision: 14 quotes, returned upper-cased.
    Revised,
}

impl Edition {
    /// The embedded quote data for this revision, in source order.
    pub fn quotes(self) -> &'static [&'static str] {
        match self {
            Edition::Classic => CLASSIC_QUOTES,
            Edition::Revised => REVISED_QUOTES,
        }
    }

    /// Whether selection upper-cases the quotes of this revision.
    pub fn uppercases(self) -> bool {
        matches!(self, Edition::Revised)
    }

    /// Build the `QuoteList` backed by this revision's embedded data.
    pub fn quote_list(self) -> QuoteList {
        QuoteList::builtin(self.quotes(), self.uppercases())
    }
}
