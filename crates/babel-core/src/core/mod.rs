//! Core data types and constants.
//!
//! - [`word::FixedWord`]: fixed-width integer with scrambling arithmetic
//! - [`alphabet::Alphabet`]: the 64 glyphs pages are written in
//! - [`constants`]: grid, word and page dimensions

pub mod alphabet;
pub mod constants;
pub mod word;
