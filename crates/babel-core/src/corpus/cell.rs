//! Addresses into the seed grid.
//!
//! The grid is stored flat, row-major, and behaves as a ring: the cell after
//! (159, 159) is (0, 0).

use core::fmt;

use crate::core::constants::{CELL_COUNT, GRID_SIZE};

/// One of the two integer planes of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Channel 0. In cell (0, 0) it holds the x and z room counters.
    Zero,
    /// Channel 1. In cell (0, 0) it holds the y room counter.
    One,
}

impl Channel {
    /// Both channels in index order.
    pub const ALL: [Self; 2] = [Self::Zero, Self::One];

    /// Index of the channel (0 or 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// A cell address in the seed grid.
///
/// # Example
///
/// ```
/// use babel_core::CellIndex;
///
/// let last = CellIndex::from_row_col(159, 159);
/// assert_eq!(last.next(), CellIndex::ZERO);
///
/// let cell = CellIndex::from_row_col(2, 159);
/// assert_eq!(cell.next().row(), 3);
/// assert_eq!(cell.next().col(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CellIndex(u16);

impl CellIndex {
    /// Cell (0, 0), home of the room counters.
    pub const ZERO: Self = Self(0);

    /// Cell (159, 159).
    pub const MAX: Self = Self((CELL_COUNT - 1) as u16);

    /// Creates an index from a flat position, wrapping modulo the grid size.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self((index % CELL_COUNT) as u16)
    }

    /// Creates an index from a row and column, each wrapping at 160.
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        Self(((row % GRID_SIZE) * GRID_SIZE + col % GRID_SIZE) as u16)
    }

    /// Flat row-major position.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / GRID_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % GRID_SIZE
    }

    /// The next cell in row-major order: column first, then row, wrapping
    /// back to (0, 0) after the last cell.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 as usize + 1)
    }
}

impl fmt::Debug for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellIndex({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_roundtrip() {
        for (row, col) in [(0, 0), (0, 159), (1, 0), (80, 17), (159, 159)] {
            let cell = CellIndex::from_row_col(row, col);
            assert_eq!((cell.row(), cell.col()), (row, col));
        }
    }

    #[test]
    fn test_next_wraps_column_then_row() {
        assert_eq!(CellIndex::from_row_col(0, 5).next(), CellIndex::from_row_col(0, 6));
        assert_eq!(CellIndex::from_row_col(0, 159).next(), CellIndex::from_row_col(1, 0));
        assert_eq!(CellIndex::MAX.next(), CellIndex::ZERO);
    }

    #[test]
    fn test_new_wraps() {
        assert_eq!(CellIndex::new(CELL_COUNT), CellIndex::ZERO);
        assert_eq!(CellIndex::from_row_col(160, 161), CellIndex::from_row_col(0, 1));
    }

    #[test]
    fn test_channel_index() {
        assert_eq!(Channel::Zero.index(), 0);
        assert_eq!(Channel::One.index(), 1);
        assert_eq!(Channel::ALL.len(), 2);
    }
}
