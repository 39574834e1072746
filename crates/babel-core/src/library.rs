//! One library session: the seed grid, its alphabet and the reader.

use rand::{CryptoRng, RngCore};

use crate::book::{OpenedBook, Reader, Spread};
use crate::core::alphabet::Alphabet;
use crate::corpus::grid::BookCorpus;
use crate::corpus::room::{RoomAddress, RoomMove};

/// Everything the display layer talks to.
///
/// The external world supplies an alphabet once, movement deltas as the
/// player crosses rooms, selectors when a book is picked and page jumps
/// while reading; it gets back spreads of text.
///
/// # Example
///
/// ```no_run
/// use babel_core::{Alphabet, Library};
///
/// let mut library = Library::new(Alphabet::default());
/// library.move_room(0, 1, 0);
/// let spread = library.open_book(2, 17);
/// assert_eq!(spread.right.number(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Library {
    corpus: BookCorpus,
    alphabet: Alphabet,
    reader: Reader,
}

impl Library {
    /// Starts a session seeded from the operating system.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_corpus(BookCorpus::random(), alphabet)
    }

    /// Starts a session from a letter set, seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`](crate::AlphabetError) if `letters` is not 64 distinct characters.
    #[cfg(feature = "std")]
    pub fn from_letters(letters: &str) -> Result<Self, crate::core::alphabet::AlphabetError> {
        Ok(Self::new(Alphabet::new(letters)?))
    }

    /// Starts a session seeded from `rng`.
    pub fn from_rng<R>(alphabet: Alphabet, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Self::with_corpus(BookCorpus::from_rng(rng), alphabet)
    }

    /// Starts a session over an existing corpus.
    #[must_use]
    pub fn with_corpus(corpus: BookCorpus, alphabet: Alphabet) -> Self {
        Self {
            corpus,
            alphabet,
            reader: Reader::new(),
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &BookCorpus {
        &self.corpus
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    #[must_use]
    pub fn room(&self) -> RoomAddress {
        self.corpus.room()
    }

    /// Records a room crossing. See [`BookCorpus::move_room`].
    pub fn move_room(&mut self, z: i32, x: i32, y: i32) {
        self.corpus.move_room(z, x, y);
    }

    pub fn apply(&mut self, m: RoomMove) {
        self.corpus.apply(m);
    }

    /// Opens a book and returns its first spread.
    pub fn open_book(&mut self, shelf: u8, book: u8) -> Spread {
        self.reader.open(&self.corpus, &self.alphabet, shelf, book)
    }

    pub fn close_book(&mut self) {
        self.reader.close();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.reader.is_open()
    }

    #[must_use]
    pub fn page(&self) -> Option<u16> {
        self.reader.page()
    }

    #[must_use]
    pub fn opened(&self) -> Option<&OpenedBook> {
        self.reader.book()
    }

    /// Jumps to a page; `None` while closed.
    pub fn set_page(&mut self, page: i64) -> Option<Spread> {
        self.reader.set_page(&self.corpus, &self.alphabet, page)
    }

    pub fn turn_forward(&mut self) -> Option<Spread> {
        self.reader.turn_forward(&self.corpus, &self.alphabet)
    }

    pub fn turn_back(&mut self) -> Option<Spread> {
        self.reader.turn_back(&self.corpus, &self.alphabet)
    }

    /// The spread under the cursor; `None` while closed.
    #[must_use]
    pub fn spread(&self) -> Option<Spread> {
        self.reader.spread(&self.corpus, &self.alphabet)
    }
}
