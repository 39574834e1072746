//! Support code shared by the Babel Stacks client binaries.
//!
//! - [`config`]: the reader's TOML configuration
//! - [`output`]: text and JSON rendering of a spread

#![deny(clippy::unwrap_used, clippy::expect_used, missing_docs)]

pub mod config;
pub mod output;

pub use config::{ConfigError, ReaderConfig};
pub use output::{PageReport, SpreadReport};
