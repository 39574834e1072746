use alloc::vec::Vec;
use core::fmt;

use rand::{CryptoRng, RngCore};

use super::cell::{CellIndex, Channel};
use super::room::{RoomAddress, RoomMove};
use crate::core::constants::{
    CELL_COUNT, CELL_DIGITS, CHANNEL_COUNT, EXPONENT, HEADER_RESERVED_MASK,
};
use crate::core::word::FixedWord;

/// The raw seed state of the whole world: 160 x 160 cells, two
/// [`FixedWord`]s of 107 bits per cell.
///
/// The grid behaves as one chained counter. An addition that overflows a
/// cell carries into the same channel of the next cell in row-major order,
/// and the last cell carries into (0, 0). Cell (0, 0) doubles as the room
/// counter: channel 0 byte 0 counts x, channel 0 byte 1 counts z (in steps
/// of 4), channel 1 byte 0 counts y.
///
/// # Example
///
/// ```
/// use babel_core::{BookCorpus, Channel};
///
/// let mut corpus = BookCorpus::zeroed();
/// for _ in 0..3 {
///     corpus.move_room(1, 0, 0);
/// }
/// assert_eq!(corpus.cell(0, 0, Channel::Zero).byte(1), 12);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BookCorpus {
    cells: Vec<[FixedWord; CHANNEL_COUNT]>,
    room: RoomAddress,
}

impl BookCorpus {
    /// A corpus with every cell zero. Deterministic; meant for tests and
    /// reproducible fixtures.
    #[must_use]
    pub fn zeroed() -> Self {
        let blank = FixedWord::new(CELL_DIGITS, EXPONENT);
        Self {
            cells: (0..CELL_COUNT)
                .map(|_| [blank.clone(), blank.clone()])
                .collect(),
            room: RoomAddress::default(),
        }
    }

    /// Seeds every cell from `rng`, then reserves the header space of cell
    /// (0, 0): channel 0 is zeroed and the low two bits of channel 1 are
    /// cleared.
    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut corpus = Self::zeroed();
        for pair in &mut corpus.cells {
            for word in pair.iter_mut() {
                word.set_random(rng);
            }
        }
        let home = &mut corpus.cells[CellIndex::ZERO.index()];
        home[Channel::Zero.index()].clear();
        let y = home[Channel::One.index()].byte(0);
        home[Channel::One.index()].set_byte(0, y & HEADER_RESERVED_MASK);
        tracing::debug!(cells = CELL_COUNT, "seeded book corpus");
        corpus
    }

    /// Seeds the corpus from the operating system's random source.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn random() -> Self {
        Self::from_rng(&mut rand::rngs::OsRng)
    }

    /// The word at `(row, col)` in `channel`. Coordinates wrap at 160.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize, channel: Channel) -> &FixedWord {
        self.word(CellIndex::from_row_col(row, col), channel)
    }

    /// Mutable access to the word at `(row, col)` in `channel`.
    ///
    /// Writing here bypasses the carry chain.
    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize, channel: Channel) -> &mut FixedWord {
        self.word_mut(CellIndex::from_row_col(row, col), channel)
    }

    #[inline]
    #[must_use]
    pub fn word(&self, cell: CellIndex, channel: Channel) -> &FixedWord {
        &self.cells[cell.index()][channel.index()]
    }

    #[inline]
    fn word_mut(&mut self, cell: CellIndex, channel: Channel) -> &mut FixedWord {
        &mut self.cells[cell.index()][channel.index()]
    }

    /// The byte a cell channel contributes to an opened book: its least
    /// significant byte.
    #[inline]
    #[must_use]
    pub fn seed_byte(&self, row: usize, col: usize, channel: Channel) -> u8 {
        self.cell(row, col, channel).byte(0)
    }

    /// Adds `value` at byte `shift` of one channel of `(row, col)`.
    ///
    /// An overflow carries one unit into the same channel of the next cell
    /// in row-major order, and on along the chain for as long as cells keep
    /// overflowing; the chain is cyclic. A negative `value` borrows the same
    /// way. Returns the last cell the carry reached.
    pub fn add(
        &mut self,
        row: usize,
        col: usize,
        channel: Channel,
        shift: usize,
        value: i64,
    ) -> CellIndex {
        let mut cell = CellIndex::from_row_col(row, col);
        let carry = value.signum();
        let mut overflowed = self.word_mut(cell, channel).add(value, shift);
        let mut hops = 0;
        while overflowed && hops < CELL_COUNT {
            cell = cell.next();
            overflowed = self.word_mut(cell, channel).add(carry, 0);
            hops += 1;
        }
        if hops > 0 {
            tracing::trace!(%cell, hops, "grid carry");
        }
        cell
    }

    /// Applies a room crossing to the counters in cell (0, 0).
    ///
    /// `z` adds `4 * z` at byte 1 of channel 0, `x` adds at byte 0 of
    /// channel 0 and `y` at byte 0 of channel 1. Zero components are
    /// skipped; overflow cascades through the grid.
    pub fn move_room(&mut self, z: i32, x: i32, y: i32) {
        if z != 0 {
            self.add(0, 0, Channel::Zero, 1, i64::from(z) * 4);
        }
        if x != 0 {
            self.add(0, 0, Channel::Zero, 0, i64::from(x));
        }
        if y != 0 {
            self.add(0, 0, Channel::One, 0, i64::from(y));
        }
        self.room += RoomMove::new(z, x, y);
        tracing::debug!(z, x, y, room = %self.room, "moved room");
    }

    /// [`BookCorpus::move_room`] taking a [`RoomMove`].
    pub fn apply(&mut self, m: RoomMove) {
        self.move_room(m.z, m.x, m.y);
    }

    /// The running sum of every move applied so far.
    #[must_use]
    pub fn room(&self) -> RoomAddress {
        self.room
    }
}

impl Default for BookCorpus {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for BookCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let non_zero = self
            .cells
            .iter()
            .flatten()
            .filter(|w| !w.is_zero())
            .count();
        write!(
            f,
            "BookCorpus {{ room: {}, {} non-zero words }}",
            self.room, non_zero
        )
    }
}
