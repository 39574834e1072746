//! `babel-reader`: reads a spread from the library on the command line.
//!
//! Builds a seed grid (from `--seed` or the OS), walks the given room
//! crossings, opens `(shelf, book)` and prints the spread at `--page`.
//!
//! **Usage:**
//! ```text
//! babel-reader [--config <path>] [--seed <n>] [--move z,x,y]... \
//!              [--shelf <n>] [--book <n>] [--page <n>] [--json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use babel_clients::{ReaderConfig, SpreadReport};
use babel_core::{Library, RoomMove};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Read a page spread from the library.
#[derive(Parser)]
#[command(name = "babel-reader", about = "Read a page spread from the library")]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// 64 distinct glyphs; overrides the config.
    #[arg(long)]
    alphabet: Option<String>,

    /// Seed for a reproducible grid; overrides the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Room crossing as `z,x,y`; repeat to walk further.
    #[arg(long = "move", value_name = "Z,X,Y", allow_hyphen_values = true)]
    moves: Vec<RoomMove>,

    /// Shelf selector, applied as a bit mask.
    #[arg(long, default_value_t = 0)]
    shelf: u8,

    /// Book selector.
    #[arg(long, default_value_t = 0)]
    book: u8,

    /// Page to jump to; clamped to 1..=639 and moved to an odd number.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    page: i64,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ReaderConfig::load(path)?,
        None => ReaderConfig::default(),
    };
    if let Some(alphabet) = args.alphabet {
        config.alphabet = alphabet;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // ── Tracing ───────────────────────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    // ── Library ───────────────────────────────────────────────────────────────
    let alphabet = config.alphabet()?;
    let mut library = match config.seed {
        Some(seed) => Library::from_rng(alphabet, &mut StdRng::seed_from_u64(seed)),
        None => Library::new(alphabet),
    };
    info!(seed = ?config.seed, "seed grid ready");

    for m in &args.moves {
        library.apply(*m);
    }

    let mut spread = library.open_book(args.shelf, args.book);
    if args.page != 1 {
        spread = library
            .set_page(args.page)
            .context("book closed before the page jump")?;
    }
    info!(
        room = %library.room(),
        shelf = args.shelf,
        book = args.book,
        page = spread.right.number(),
        "reading"
    );

    let report = SpreadReport::new(library.room(), args.shelf, args.book, &spread);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
