//! Babel Stacks - deterministic book text for an unbounded library.
//!
//! No page of the library is ever stored. Every page is recomputed from a
//! small random seed grid, the room the player stands in and the book they
//! pick, so the same room and book always show the same text.
//!
//! # Data Flow
//!
//! ```text
//! room crossing ──► BookCorpus::move_room ──► seed grid (160 x 160 x 2 words)
//!                                                   │
//! (shelf, book) ──► OpenedBook::open ◄──────────────┤
//!                          │                        │
//! page jump ──► Reader ──► render_page ◄────────────┘ ──► Spread (two pages of text)
//! ```
//!
//! # Layers
//!
//! | Layer | Type | Width |
//! |-------|------|-------|
//! | Arithmetic | [`FixedWord`] | any bit width |
//! | Seed grid | [`BookCorpus`] | 160 x 160 cells, 2 x 107 bits each |
//! | Book table | [`OpenedBook`] | 2 x 160 rows of 1280 bits |
//! | Pages | [`Reader`], [`Page`] | 640 pages of 720 glyphs |
//!
//! # The Scrambling Rule
//!
//! [`FixedWord`] arithmetic is ordinary except in the "modulo" family, where
//! every wrap past the top of the word adds the constant 2 back at byte 0.
//! This is an obfuscation rule, not a field reduction, and the page text
//! depends on it exactly.
//!
//! # Example
//!
//! ```
//! use babel_core::{Alphabet, FixedWord};
//!
//! let mut w = FixedWord::from_bytes(107, 5, &[3]);
//! w.scramble();
//! assert_eq!(w.byte(0), 243); // 3^5
//!
//! let text = w.to_glyphs(&Alphabet::default());
//! assert_eq!(text.chars().count(), 18);
//! ```
//!
//! # Design Principles
//!
//! - **Recompute, never store**: the seed grid is the only state
//! - **Single owner**: one [`Library`] owns the grid and the open book
//! - **Overflow is a signal**: carries drive the room counters, they are not errors
//! - **Injectable randomness**: seeding takes any `RngCore + CryptoRng`

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Core data types (word, alphabet, constants)
mod core;

// Seed grid (cell, grid, room)
mod corpus;

// Book opening and pagination
pub mod book;

// Session facade
mod library;

// Re-export submodules for external access
pub use crate::core::alphabet;
pub use crate::core::constants;
pub use crate::core::word;
pub use crate::corpus::cell;
pub use crate::corpus::grid;
pub use crate::corpus::room;

// Re-export core types at crate root
pub use crate::core::alphabet::{Alphabet, AlphabetError, DEFAULT_ALPHABET};
pub use crate::core::word::FixedWord;
pub use crate::corpus::cell::{CellIndex, Channel};
pub use crate::corpus::grid::BookCorpus;
pub use crate::corpus::room::{RoomAddress, RoomMove, RoomMoveParseError};

pub use crate::book::{normalize_page, OpenedBook, Page, Reader, ReaderState, Spread};
pub use crate::library::Library;

/// Prelude module for convenient imports.
///
/// ```
/// use babel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::book::{normalize_page, OpenedBook, Page, Reader, Spread};
    pub use crate::core::alphabet::{Alphabet, AlphabetError};
    pub use crate::core::constants::{GRID_SIZE, PAGE_MAX, PAGE_MIN};
    pub use crate::core::word::FixedWord;
    pub use crate::corpus::cell::{CellIndex, Channel};
    pub use crate::corpus::grid::BookCorpus;
    pub use crate::corpus::room::{RoomAddress, RoomMove};
    pub use crate::library::Library;
}
