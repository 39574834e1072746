//! Re-keying the seed grid for one (shelf, book) selection.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::core::alphabet::Alphabet;
use crate::core::constants::{
    CELL_DIGITS, CHANNEL_COUNT, COLUMNS_PER_PAGE, EXPONENT, GRID_SIZE, PAGES_PER_ROW, PAGE_COUNT,
    ROW_DIGITS,
};
use crate::core::word::FixedWord;
use crate::corpus::cell::Channel;
use crate::corpus::grid::BookCorpus;

use super::page::Page;

/// The working table of an open book.
///
/// Derived from the seed grid and the selectors without touching the grid.
/// Each channel holds 160 rows of 1280 bits, one byte per grid column:
/// byte 0 comes from the scrambled header, bytes 1..160 from the low byte of
/// the matching grid cell, and the whole row is scrambled.
///
/// Nothing is cached; opening the same book again recomputes everything.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenedBook {
    shelf: u8,
    book: u8,
    rows: [Vec<FixedWord>; CHANNEL_COUNT],
}

impl OpenedBook {
    /// The header pair before scrambling.
    ///
    /// Byte `r` of each header is the seed byte of cell `(r, 0)` in that
    /// channel. Then channel 0's byte 0 is replaced by `book`, while channel
    /// 1's byte 0 is ANDed with `shelf`: the shelf selector is a bit mask,
    /// not an index.
    #[must_use]
    pub fn header_seed(corpus: &BookCorpus, shelf: u8, book: u8) -> [FixedWord; CHANNEL_COUNT] {
        let mut header = Channel::ALL.map(|channel| {
            let mut word = FixedWord::new(ROW_DIGITS, EXPONENT);
            for row in 0..GRID_SIZE {
                word.set_byte(row, corpus.seed_byte(row, 0, channel));
            }
            word
        });
        header[Channel::Zero.index()].set_byte(0, book);
        let masked = header[Channel::One.index()].byte(0) & shelf;
        header[Channel::One.index()].set_byte(0, masked);
        header
    }

    /// The scrambled header pair.
    #[must_use]
    pub fn header(corpus: &BookCorpus, shelf: u8, book: u8) -> [FixedWord; CHANNEL_COUNT] {
        let mut header = Self::header_seed(corpus, shelf, book);
        for word in &mut header {
            word.scramble();
        }
        header
    }

    /// Builds the working table for `(shelf, book)`.
    #[must_use]
    pub fn open(corpus: &BookCorpus, shelf: u8, book: u8) -> Self {
        let header = Self::header(corpus, shelf, book);
        let rows = Channel::ALL.map(|channel| {
            let head = &header[channel.index()];
            (0..GRID_SIZE)
                .map(|row| {
                    let mut word = FixedWord::new(ROW_DIGITS, EXPONENT);
                    word.set_byte(0, head.byte(row));
                    for col in 1..GRID_SIZE {
                        word.set_byte(col, corpus.seed_byte(row, col, channel));
                    }
                    word.scramble();
                    word
                })
                .collect::<Vec<_>>()
        });
        tracing::debug!(shelf, book, "opened book");
        Self { shelf, book, rows }
    }

    #[must_use]
    pub fn shelf(&self) -> u8 {
        self.shelf
    }

    #[must_use]
    pub fn book(&self) -> u8 {
        self.book
    }

    /// Row `row` of the table in `channel`.
    #[must_use]
    pub fn row(&self, channel: Channel, row: usize) -> &FixedWord {
        &self.rows[channel.index()][row % GRID_SIZE]
    }

    /// Byte `col` of row `row` in `channel`.
    #[inline]
    #[must_use]
    pub fn byte(&self, channel: Channel, row: usize, col: usize) -> u8 {
        self.row(channel, row).byte(col)
    }

    /// Renders the page at 0-based `index`.
    ///
    /// Page `p` covers grid row `p / 4`, columns `(p % 4) * 40` onward. For
    /// each of the 40 columns the cell's channel 0 word is copied, its bytes
    /// 0 and 1 are replaced by this table's bytes for that cell, and the
    /// copy is scrambled and mapped to 18 glyphs. Indices wrap at 640.
    #[must_use]
    pub fn render_page(&self, corpus: &BookCorpus, alphabet: &Alphabet, index: u16) -> Page {
        let index = usize::from(index) % PAGE_COUNT;
        let row = index / PAGES_PER_ROW;
        let start = (index % PAGES_PER_ROW) * COLUMNS_PER_PAGE;

        let mut body = String::with_capacity(COLUMNS_PER_PAGE * CELL_DIGITS.div_ceil(6));
        for col in start..start + COLUMNS_PER_PAGE {
            let mut word = corpus.cell(row, col, Channel::Zero).clone();
            word.set_byte(0, self.byte(Channel::Zero, row, col));
            word.set_byte(1, self.byte(Channel::One, row, col));
            body.push_str(&word.scramble().to_glyphs(alphabet));
        }
        tracing::trace!(page = index + 1, row, start, "rendered page");
        Page::new(index as u16, body)
    }
}

impl fmt::Debug for OpenedBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenedBook")
            .field("shelf", &self.shelf)
            .field("book", &self.book)
            .finish_non_exhaustive()
    }
}
