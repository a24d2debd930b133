//! Ephemera CLI — prints randomly selected Trek quotes and the current
//! stardate. It draws from one of the built-in quote list editions (or from a
//! user-provided text file with one quote per line), applies the edition's
//! case transform, and emits either plain text or a JSON payload.
//!
//! Usage example (CLI):
//! ```bash
//! ephemera_cli --edition revised --count 3 --seed 1701 --json
//! ```
//!
//! A custom quote file may be supplied with `--path`; quotes are separated by
//! new lines and blank lines are skipped. See `ephemera_common::quote` for
//! details.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use ephemera_common::payload::Ephemera;
use ephemera_common::{EphemeraError, QuoteList, Result, to_stardate};
use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Draw `count` quotes from `list` using the provided random source.
fn draw_quotes<R: Rng + ?Sized>(list: &QuoteList, count: usize, rng: &mut R) -> Vec<String> {
    (0..count).map(|_| list.random_quote(rng)).collect()
}

fn main() -> Result<(), EphemeraError> {
    init_logger();
    let args = Args::parse();

    let list = match &args.path {
        Some(raw) => {
            let file_path = normalize_path(raw);
            if !is_file_exist(&file_path) {
                return Err(EphemeraError::Format(format!(
                    "Quote file not found: {}",
                    file_path.display()
                )));
            }
            let file = File::open(&file_path).map_err(EphemeraError::Io)?;
            let buf = BufReader::new(file);
            let list = QuoteList::parse_from_file(buf, args.edition.uppercases())?;
            info!("Loaded {} quotes from {}", list.len(), file_path.display());
            list
        }
        None => args.edition.quote_list(),
    };

    let quotes = match args.seed {
        Some(seed) => {
            debug!("Seeded random source: {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            draw_quotes(&list, args.count, &mut rng)
        }
        None => {
            let mut rng = rand::rng();
            draw_quotes(&list, args.count, &mut rng)
        }
    };

    let stardate = to_stardate();

    if args.json {
        let payload = Ephemera::new(quotes, stardate, args.edition);
        println!("{}", payload.to_json_string()?);
    } else {
        println!("Stardate {}", stardate);
        for quote in &quotes {
            println!("{}", quote);
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching
/// quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
