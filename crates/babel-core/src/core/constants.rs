//! Dimensions of the library.
//!
//! The grid, the integer widths and the page geometry are fixed. Changing
//! any of them changes every rendered page.

/// Side length of the seed grid (rows and columns).
pub const GRID_SIZE: usize = 160;

/// Number of cells in the seed grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of independent integer planes per grid cell.
pub const CHANNEL_COUNT: usize = 2;

/// Bit width of one grid cell channel.
///
/// 107 bits map to exactly 18 glyphs of 6 bits each.
pub const CELL_DIGITS: usize = 107;

/// Bit width of one opened-book row: one byte per grid column.
pub const ROW_DIGITS: usize = GRID_SIZE * 8;

/// Exponent used by the scrambling transform everywhere in the library.
pub const EXPONENT: u32 = 5;

/// Number of glyphs in an alphabet (one per 6-bit value).
pub const ALPHABET_LEN: usize = 64;

/// Grid columns rendered on one page.
pub const COLUMNS_PER_PAGE: usize = 40;

/// Pages carved out of one grid row.
pub const PAGES_PER_ROW: usize = GRID_SIZE / COLUMNS_PER_PAGE;

/// Total pages in a book (0-based indices `0..PAGE_COUNT`).
pub const PAGE_COUNT: usize = GRID_SIZE * PAGES_PER_ROW;

/// Lowest valid page cursor.
pub const PAGE_MIN: u16 = 1;

/// Highest valid page cursor.
pub const PAGE_MAX: u16 = (PAGE_COUNT - 1) as u16;

/// Mask applied to byte 0 of channel 1 in cell (0, 0) at seeding.
///
/// Clears the two low bits reserved for the shelf header.
pub const HEADER_RESERVED_MASK: u8 = 0xfc;

/// Value added at byte 0 whenever a scrambling operation wraps past the
/// top of the word.
pub const MODULO_CORRECTION: u8 = 2;
