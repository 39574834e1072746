//! The page cursor over an open book.

use crate::core::alphabet::Alphabet;
use crate::core::constants::{PAGE_MAX, PAGE_MIN};
use crate::corpus::grid::BookCorpus;

use super::opening::OpenedBook;
use super::page::Spread;

/// Clamps a requested page to `[1, 639]` and moves it onto the odd,
/// right-hand member of its spread.
///
/// ```
/// use babel_core::book::normalize_page;
///
/// assert_eq!(normalize_page(4), 3);
/// assert_eq!(normalize_page(641), 639);
/// assert_eq!(normalize_page(0), 1);
/// assert_eq!(normalize_page(-20), 1);
/// ```
#[must_use]
pub fn normalize_page(page: i64) -> u16 {
    let page = page.clamp(i64::from(PAGE_MIN), i64::from(PAGE_MAX));
    let page = if page % 2 == 0 { page - 1 } else { page };
    page as u16
}

/// Whether a book is open, and where.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReaderState {
    #[default]
    Closed,
    Open {
        book: OpenedBook,
        /// Odd page cursor in `[1, 639]`; the right-hand page of the spread.
        page: u16,
    },
}

/// Paginates the open book.
///
/// `Closed -> Open` on [`Reader::open`], back on [`Reader::close`]. The
/// cursor exists only while open; opening another book discards the
/// previous table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reader {
    state: ReaderState,
}

impl Reader {
    /// A closed reader.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ReaderState::Closed,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ReaderState::Open { .. })
    }

    /// The page cursor, if a book is open.
    #[must_use]
    pub fn page(&self) -> Option<u16> {
        match &self.state {
            ReaderState::Open { page, .. } => Some(*page),
            ReaderState::Closed => None,
        }
    }

    /// The open book's table, if any.
    #[must_use]
    pub fn book(&self) -> Option<&OpenedBook> {
        match &self.state {
            ReaderState::Open { book, .. } => Some(book),
            ReaderState::Closed => None,
        }
    }

    /// Opens `(shelf, book)`, replacing any open book, and shows the first
    /// spread.
    pub fn open(
        &mut self,
        corpus: &BookCorpus,
        alphabet: &Alphabet,
        shelf: u8,
        book: u8,
    ) -> Spread {
        let book = OpenedBook::open(corpus, shelf, book);
        let spread = render_spread(&book, corpus, alphabet, PAGE_MIN);
        self.state = ReaderState::Open {
            book,
            page: PAGE_MIN,
        };
        spread
    }

    /// Closes the book, dropping its table.
    pub fn close(&mut self) {
        self.state = ReaderState::Closed;
    }

    /// Moves the cursor to `page` (see [`normalize_page`]) and renders the
    /// spread. Returns `None` if no book is open.
    pub fn set_page(
        &mut self,
        corpus: &BookCorpus,
        alphabet: &Alphabet,
        page: i64,
    ) -> Option<Spread> {
        match &mut self.state {
            ReaderState::Open { book, page: cursor } => {
                *cursor = normalize_page(page);
                Some(render_spread(book, corpus, alphabet, *cursor))
            }
            ReaderState::Closed => None,
        }
    }

    /// Next spread.
    pub fn turn_forward(&mut self, corpus: &BookCorpus, alphabet: &Alphabet) -> Option<Spread> {
        let page = self.page()?;
        self.set_page(corpus, alphabet, i64::from(page) + 2)
    }

    /// Previous spread.
    pub fn turn_back(&mut self, corpus: &BookCorpus, alphabet: &Alphabet) -> Option<Spread> {
        let page = self.page()?;
        self.set_page(corpus, alphabet, i64::from(page) - 2)
    }

    /// Re-renders the current spread.
    #[must_use]
    pub fn spread(&self, corpus: &BookCorpus, alphabet: &Alphabet) -> Option<Spread> {
        match &self.state {
            ReaderState::Open { book, page } => Some(render_spread(book, corpus, alphabet, *page)),
            ReaderState::Closed => None,
        }
    }
}

fn render_spread(book: &OpenedBook, corpus: &BookCorpus, alphabet: &Alphabet, page: u16) -> Spread {
    Spread {
        left: book.render_page(corpus, alphabet, page - 1),
        right: book.render_page(corpus, alphabet, page),
    }
}
