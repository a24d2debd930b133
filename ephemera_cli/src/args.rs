//! Command-line arguments for the ephemera CLI.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage.
use clap::Parser;
use ephemera_common::Edition;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Which revision of the built-in quote list to draw from. Also governs
    /// the case transform when --path supplies the quotes.
    #[clap(long, value_enum, default_value_t = Edition::Revised)]
    pub edition: Edition,

    /// Number of quotes to print.
    #[clap(long, default_value_t = 1)]
    pub count: usize,

    /// Seed for the random source. Omitted means the thread-local RNG;
    /// identical seeds reproduce identical draws.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Path to a text file with quotes to draw from instead of the built-in
    /// list, one quote per line. Blank lines are ignored.
    #[clap(long)]
    pub path: Option<String>,

    /// Emit a JSON payload instead of plain text.
    #[clap(long)]
    pub json: bool,
}
